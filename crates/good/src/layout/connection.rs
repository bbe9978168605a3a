//! Connection renderer: directed edges into a node, including bias edges.

use good_core::{
    draw::{EndMarkers, Label, LabelRole, Shape, ShapeRole},
    geometry::Point,
};

use super::SceneParts;
use crate::config::Style;

/// Draws an edge from `source` to the left arc of the node centred at
/// `center`, with an arrowhead at the node end.
///
/// `source` must not be vertically aligned with `center`.
pub fn draw_connection(source: Point, center: Point, style: &Style) -> Shape {
    edge(ShapeRole::Connection, source, center, style)
}

/// Draws one bias edge: the edge itself from the synthetic `source` point,
/// the short stub ending at that point and the constant `1` label on it.
pub fn draw_bias(source: Point, center: Point, style: &Style) -> SceneParts {
    let stub_start = source.with_x(source.x() - style.bias_stub_length());

    let mut parts = SceneParts::default();
    parts.push_shape(edge(ShapeRole::BiasConnection, source, center, style));
    parts.push_shape(
        Shape::line(ShapeRole::BiasStub, stub_start, source, style.stroke().clone())
            .with_markers(EndMarkers::Hidden),
    );
    parts.push_label(Label::new(
        LabelRole::Bias,
        stub_start.with_y(source.y() + style.node_size().height() / 4.0),
        "1",
        style.bias_text().clone(),
    ));

    parts
}

fn edge(role: ShapeRole, source: Point, center: Point, style: &Style) -> Shape {
    let end = style.node_outline().boundary_toward(center, source);
    Shape::line(role, source, end, style.stroke().clone()).with_markers(EndMarkers::ArrowAtEnd)
}
