//! Input-stage layout: the labelled taps of the virtual input layer.

use good_core::{
    draw::{EndMarkers, Label, LabelRole, Shape, ShapeRole},
    geometry::Point,
};

use super::{SceneParts, Tap, node_y};
use crate::config::Style;

/// Lays out `count_inputs` input taps around `x_center`.
///
/// Each input gets a horizontal stub starting at the right edge of where its
/// node body would be, plus an italic `x_k` label sitting on the stub. The
/// topmost input gets the largest index. The returned [`Tap`] is where the
/// first layer's edges originate.
///
/// `count_inputs` is expected to be positive; zero yields no shapes.
pub fn layout_inputs(count_inputs: usize, x_center: f32, style: &Style) -> (Tap, SceneParts) {
    let half_width = style.node_size().half_width();
    let half_height = style.node_size().half_height();
    let text = style.label_text().clone().with_italic(true);

    let mut parts = SceneParts::default();
    for index in 0..count_inputs {
        let y = node_y(index, count_inputs);
        let start = Point::new(x_center + half_width, y);
        let end = start.with_x(x_center + style.tap_offset());

        parts.push_shape(
            Shape::line(ShapeRole::InputStub, start, end, style.stroke().clone())
                .with_markers(EndMarkers::Hidden),
        );
        parts.push_label(Label::new(
            LabelRole::Input,
            Point::new(x_center + half_width, y + half_height),
            input_label(count_inputs - index),
            text.clone(),
        ));
    }

    let tap = Tap::new(count_inputs, x_center + style.tap_offset());
    (tap, parts)
}

fn input_label(number: usize) -> String {
    format!("x<sub>{number}</sub>")
}
