//! SVG export.
//!
//! The scene's advisory axis ranges are mapped linearly onto the canvas, with
//! the y axis flipped so that layout "up" is screen "up". Content outside the
//! ranges is still emitted and may fall outside the visible canvas.
//!
//! Elements are grouped by [`RenderLayer`] so that edges are painted first,
//! node bodies over them and labels on top.

use log::{debug, info};
use svg::{
    Document,
    node::{
        Text as SvgText,
        element::{self as svg_element, Definitions, Marker, Path},
    },
};

use good_core::{
    apply_stroke,
    color::Color,
    draw::{Label, LayeredOutput, RenderLayer, Shape, ShapeKind, ShapeRole, SvgNode, markup},
    geometry::{AxisRange, Point, Size},
    scene::Scene,
};

use super::{Error, Exporter};

const ARROW_MARKER_ID: &str = "arrow-end";
/// Font size of sub- and superscripts relative to the label's size.
const SCRIPT_SCALE: f32 = 0.7;

/// Renders scenes as standalone SVG documents.
#[derive(Debug, Clone, Default)]
pub struct SvgExporter {
    background_color: Option<Color>,
}

impl SvgExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fills the canvas with `color` before drawing. `None` keeps it
    /// transparent.
    pub fn with_background_color(mut self, color: Option<Color>) -> Self {
        self.background_color = color;
        self
    }

    /// Builds the SVG document for `scene`.
    pub fn render(&self, scene: &Scene) -> Document {
        let canvas = scene.canvas();
        let viewport = Viewport::new(scene.x_range(), scene.y_range(), canvas);

        let mut output = LayeredOutput::new();
        if let Some(color) = self.background_color {
            output.add_to_layer(RenderLayer::Background, render_background(color, canvas));
        }
        for shape in scene.shapes() {
            output.add_to_layer(shape_layer(shape), render_shape(shape, &viewport));
        }
        for label in scene.labels() {
            output.add_to_layer(RenderLayer::Text, render_label(label, &viewport));
        }

        let mut doc = Document::new()
            .set(
                "viewBox",
                format!("0 0 {} {}", canvas.width(), canvas.height()),
            )
            .set("width", canvas.width())
            .set("height", canvas.height())
            .add(marker_definitions());

        for group in output.render() {
            doc = doc.add(group);
        }

        debug!(
            shapes = scene.shapes().len(),
            labels = scene.labels().len();
            "SVG document rendered"
        );
        doc
    }
}

impl Exporter for SvgExporter {
    fn export(&self, scene: &Scene) -> Result<String, Error> {
        info!("Exporting scene to SVG");
        let doc = self.render(scene);
        Ok(doc.to_string())
    }
}

/// Linear map from layout units onto canvas pixels.
#[derive(Debug, Clone, Copy)]
struct Viewport {
    x_min: f32,
    y_max: f32,
    x_scale: f32,
    y_scale: f32,
}

impl Viewport {
    fn new(x_range: AxisRange, y_range: AxisRange, canvas: Size) -> Self {
        Self {
            x_min: x_range.min(),
            y_max: y_range.max(),
            x_scale: scale(canvas.width(), x_range),
            y_scale: scale(canvas.height(), y_range),
        }
    }

    fn map(&self, point: Point) -> Point {
        Point::new(
            (point.x() - self.x_min) * self.x_scale,
            (self.y_max - point.y()) * self.y_scale,
        )
    }
}

// An empty or non-finite range leaves that axis unscaled.
fn scale(extent: f32, range: AxisRange) -> f32 {
    let span = range.span();
    if span.is_finite() && span > 0.0 {
        extent / span
    } else {
        1.0
    }
}

fn shape_layer(shape: &Shape) -> RenderLayer {
    match shape.role() {
        ShapeRole::NodeBody => RenderLayer::Node,
        ShapeRole::InputStub
        | ShapeRole::Axon
        | ShapeRole::Connection
        | ShapeRole::BiasConnection
        | ShapeRole::BiasStub => RenderLayer::Edge,
    }
}

fn points_attribute(points: &[Point], viewport: &Viewport) -> String {
    points
        .iter()
        .map(|point| {
            let mapped = viewport.map(*point);
            format!("{},{}", mapped.x(), mapped.y())
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_shape(shape: &Shape, viewport: &Viewport) -> SvgNode {
    let points = points_attribute(shape.points(), viewport);

    match shape.kind() {
        ShapeKind::Outline => {
            let polygon = svg_element::Polygon::new()
                .set("points", points)
                .set("fill", "none");
            Box::new(apply_stroke!(polygon, shape.stroke()))
        }
        ShapeKind::Polyline => {
            let mut polyline = svg_element::Polyline::new()
                .set("points", points)
                .set("fill", "none");
            if shape.markers().has_end_arrow() {
                polyline = polyline.set("marker-end", format!("url(#{ARROW_MARKER_ID})"));
            }
            Box::new(apply_stroke!(polyline, shape.stroke()))
        }
    }
}

fn render_label(label: &Label, viewport: &Viewport) -> SvgNode {
    let position = viewport.map(label.position());

    let mut text = svg_element::Text::new("")
        .set("x", position.x())
        .set("y", position.y())
        .set("text-anchor", label.horizontal_anchor().to_svg_value())
        .set("dominant-baseline", label.vertical_anchor().to_svg_value())
        .set("font-family", label.font_family())
        .set("font-size", label.font_size());
    if label.italic() {
        text = text.set("font-style", "italic");
    }

    for segment in markup::segments(label.text()) {
        text = match segment.baseline().to_svg_value() {
            None => text.add(SvgText::new(segment.text())),
            Some(shift) => text.add(
                svg_element::TSpan::new("")
                    .set("baseline-shift", shift)
                    .set("font-size", label.font_size() * SCRIPT_SCALE)
                    .add(SvgText::new(segment.text())),
            ),
        };
    }

    Box::new(text)
}

fn render_background(color: Color, canvas: Size) -> SvgNode {
    Box::new(
        svg_element::Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", canvas.width())
            .set("height", canvas.height())
            .set("fill", color.to_string())
            .set("fill-opacity", color.alpha()),
    )
}

/// The single arrowhead used by every directed edge. It takes the edge's
/// stroke color through `context-stroke`.
fn marker_definitions() -> Definitions {
    let arrow = Marker::new()
        .set("id", ARROW_MARKER_ID)
        .set("viewBox", "0 0 10 10")
        .set("refX", 9)
        .set("refY", 5)
        .set("markerWidth", 6)
        .set("markerHeight", 6)
        .set("orient", "auto")
        .add(
            Path::new()
                .set("d", "M 0 0 L 10 5 L 0 10 z")
                .set("fill", "context-stroke"),
        );

    Definitions::new().add(arrow)
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use good_core::{
        draw::{
            EndMarkers, HorizontalAnchor, LabelRole, StrokeDefinition, TextDefinition,
            VerticalAnchor,
        },
        scene::DEFAULT_CANVAS,
    };

    use super::*;

    fn scene_with(shapes: Vec<Shape>, labels: Vec<Label>) -> Scene {
        Scene::new(
            shapes,
            labels,
            AxisRange::new(0.0, 10.0),
            AxisRange::new(-1.0, 2.0),
            DEFAULT_CANVAS,
        )
    }

    #[test]
    fn test_viewport_flips_y() {
        let viewport = Viewport::new(
            AxisRange::new(0.0, 10.0),
            AxisRange::new(-1.0, 2.0),
            Size::new(1000.0, 600.0),
        );

        let top_left = viewport.map(Point::new(0.0, 2.0));
        assert_approx_eq!(f32, top_left.x(), 0.0);
        assert_approx_eq!(f32, top_left.y(), 0.0);

        let bottom_right = viewport.map(Point::new(10.0, -1.0));
        assert_approx_eq!(f32, bottom_right.x(), 1000.0);
        assert_approx_eq!(f32, bottom_right.y(), 600.0);
    }

    #[test]
    fn test_degenerate_range_is_unscaled() {
        let viewport = Viewport::new(
            AxisRange::new(0.0, 0.0),
            AxisRange::new(0.0, 1.0),
            Size::new(1000.0, 600.0),
        );
        assert_eq!(viewport.map(Point::new(3.0, 1.0)).x(), 3.0);
    }

    #[test]
    fn test_document_has_canvas_size_and_marker() {
        let rendered = SvgExporter::new()
            .export(&scene_with(Vec::new(), Vec::new()))
            .unwrap();

        assert!(rendered.contains("viewBox=\"0 0 1000 600\""));
        assert!(rendered.contains("id=\"arrow-end\""));
    }

    #[test]
    fn test_edges_and_bodies_render_in_layers() {
        let stroke = StrokeDefinition::default();
        let shapes = vec![
            Shape::outline(
                ShapeRole::NodeBody,
                vec![Point::new(1.0, 0.0), Point::new(2.0, 1.0), Point::new(1.0, 0.0)],
                stroke.clone(),
            ),
            Shape::line(
                ShapeRole::Connection,
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                stroke.clone(),
            )
            .with_markers(EndMarkers::ArrowAtEnd),
            Shape::line(
                ShapeRole::Axon,
                Point::new(2.0, 0.0),
                Point::new(3.0, 0.0),
                stroke,
            )
            .with_markers(EndMarkers::Hidden),
        ];
        let rendered = SvgExporter::new()
            .export(&scene_with(shapes, Vec::new()))
            .unwrap();

        let edge_at = rendered.find("data-layer=\"edge\"").unwrap();
        let node_at = rendered.find("data-layer=\"node\"").unwrap();
        assert!(edge_at < node_at);
        assert!(rendered.contains("<polygon"));
        assert_eq!(rendered.matches("<polyline").count(), 2);
        assert_eq!(rendered.matches("marker-end=\"url(#arrow-end)\"").count(), 1);
    }

    #[test]
    fn test_label_markup_becomes_tspans() {
        let label = Label::new(
            LabelRole::Response,
            Point::new(1.0, 1.0),
            "a<sub>6</sub><sup>[1]</sup>",
            TextDefinition::default(),
        );
        let rendered = SvgExporter::new()
            .export(&scene_with(Vec::new(), vec![label]))
            .unwrap();

        assert!(rendered.contains("text-anchor=\"start\""));
        assert!(rendered.contains("dominant-baseline=\"middle\""));
        assert!(rendered.contains("baseline-shift=\"sub\""));
        assert!(rendered.contains("baseline-shift=\"super\""));
        assert!(rendered.contains("[1]"));
        assert!(!rendered.contains("&lt;sub"));
    }

    #[test]
    fn test_italic_right_bottom_label() {
        let label = Label::new(
            LabelRole::Activation,
            Point::new(1.0, 1.0),
            "σ",
            TextDefinition::new("Script MT Bold", 8.0).with_italic(true),
        )
        .with_anchor(HorizontalAnchor::Right, VerticalAnchor::Bottom);
        let rendered = SvgExporter::new()
            .export(&scene_with(Vec::new(), vec![label]))
            .unwrap();

        assert!(rendered.contains("font-style=\"italic\""));
        assert!(rendered.contains("text-anchor=\"end\""));
        assert!(rendered.contains("font-family=\"Script MT Bold\""));
    }

    #[test]
    fn test_background_is_optional() {
        let scene = scene_with(Vec::new(), Vec::new());

        let plain = SvgExporter::new().export(&scene).unwrap();
        assert!(!plain.contains("data-layer=\"background\""));

        let filled = SvgExporter::new()
            .with_background_color(Some(Color::new("white").unwrap()))
            .export(&scene)
            .unwrap();
        assert!(filled.contains("data-layer=\"background\""));
        assert!(filled.contains("<rect"));
    }
}
