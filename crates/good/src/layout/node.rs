//! Node renderer: one node body with its activation, axon and response label.

use good_core::{
    draw::{EndMarkers, HorizontalAnchor, Label, LabelRole, Shape, ShapeRole, VerticalAnchor},
    geometry::Point,
};

use super::SceneParts;
use crate::config::Style;

/// Draws the "D"-shaped body of the node centred at `center` and its
/// activation annotation just below-right of it.
pub fn draw_node(center: Point, activation: &str, style: &Style) -> SceneParts {
    let half_width = style.node_size().half_width();
    let half_height = style.node_size().half_height();

    let mut parts = SceneParts::default();
    parts.push_shape(Shape::outline(
        ShapeRole::NodeBody,
        style.node_outline().outline(center),
        style.stroke().clone(),
    ));
    parts.push_label(
        Label::new(
            LabelRole::Activation,
            Point::new(center.x() + half_width, center.y() - half_height),
            activation,
            style.activation_text().clone(),
        )
        .with_anchor(HorizontalAnchor::Right, VerticalAnchor::Bottom),
    );

    parts
}

/// The line leaving a node's flat right edge; the next layer's edges start
/// at its end.
pub fn draw_axon(center: Point, style: &Style) -> Shape {
    let start = center.with_x(center.x() + style.node_size().half_width());
    let end = center.with_x(center.x() + style.tap_offset());

    Shape::line(ShapeRole::Axon, start, end, style.stroke().clone())
        .with_markers(EndMarkers::Hidden)
}

/// The `a_k^[l]` label of a node, sitting on its axon.
///
/// `node_number` is the node's 1-based index counted from the bottom of the
/// layer and `layer_number` the 1-based layer index.
pub fn response_label(
    center: Point,
    node_number: usize,
    layer_number: usize,
    style: &Style,
) -> Label {
    let position = Point::new(
        center.x() + style.node_size().half_width(),
        center.y() + style.node_size().half_height(),
    );
    Label::new(
        LabelRole::Response,
        position,
        format!("a<sub>{node_number}</sub><sup>[{layer_number}]</sup>"),
        style.label_text().clone(),
    )
}
