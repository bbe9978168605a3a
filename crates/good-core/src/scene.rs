//! The renderer-agnostic output of a diagram build.
//!
//! A [`Scene`] is built once and then only read: it is handed to an exporter
//! (or any other consumer) and discarded. Shapes and labels are unordered as
//! far as meaning goes; a consumer may sort or filter them freely.

use serde::Serialize;

use crate::{
    draw::{Label, LabelRole, Shape, ShapeRole},
    geometry::{AxisRange, Size},
};

/// Canvas size used when none is configured, in pixels.
pub const DEFAULT_CANVAS: Size = Size::new(1000.0, 600.0);

/// Shapes, labels and advisory axis bounds for one diagram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    shapes: Vec<Shape>,
    labels: Vec<Label>,
    x_range: AxisRange,
    y_range: AxisRange,
    canvas: Size,
    show_legend: bool,
    show_axes: bool,
}

impl Scene {
    /// Assembles a scene from its parts.
    ///
    /// Legend and axes are hidden; a GOOD diagram has neither.
    pub fn new(
        shapes: Vec<Shape>,
        labels: Vec<Label>,
        x_range: AxisRange,
        y_range: AxisRange,
        canvas: Size,
    ) -> Self {
        Self {
            shapes,
            labels,
            x_range,
            y_range,
            canvas,
            show_legend: false,
            show_axes: false,
        }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Suggested horizontal viewport. Content may extend beyond it.
    pub fn x_range(&self) -> AxisRange {
        self.x_range
    }

    /// Suggested vertical viewport. Content may extend beyond it.
    pub fn y_range(&self) -> AxisRange {
        self.y_range
    }

    /// Output canvas size in pixels
    pub fn canvas(&self) -> Size {
        self.canvas
    }

    pub fn show_legend(&self) -> bool {
        self.show_legend
    }

    pub fn show_axes(&self) -> bool {
        self.show_axes
    }

    /// Iterates over the shapes with the given role.
    pub fn shapes_with_role(&self, role: ShapeRole) -> impl Iterator<Item = &Shape> {
        self.shapes.iter().filter(move |shape| shape.role() == role)
    }

    /// Iterates over the labels with the given role.
    pub fn labels_with_role(&self, role: LabelRole) -> impl Iterator<Item = &Label> {
        self.labels.iter().filter(move |label| label.role() == role)
    }
}
