//! Line and outline shapes.
//!
//! A [`Shape`] is an ordered list of points in layout space plus everything a
//! renderer needs to stroke it: the [`StrokeDefinition`], whether the path is
//! closed ([`ShapeKind`]) and what sits at its endpoints ([`EndMarkers`]).
//! Shapes are also tagged with a [`ShapeRole`] so consumers can count or
//! style them by purpose without inspecting coordinates.

use serde::Serialize;

use crate::{draw::StrokeDefinition, geometry::Point};

/// Whether a shape's path is open or closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// Open path through the points
    Polyline,
    /// Closed, unfilled outline through the points
    Outline,
}

/// Markers at the endpoints of an open path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EndMarkers {
    /// No endpoint markers at all
    #[default]
    None,
    /// Zero-opacity markers at both ends. They exist so every edge-like line
    /// carries markers uniformly but nothing visible is drawn.
    Hidden,
    /// An invisible marker at the start and an arrowhead at the end
    ArrowAtEnd,
}

impl EndMarkers {
    /// Returns true if an arrowhead is drawn at the last point
    pub fn has_end_arrow(self) -> bool {
        matches!(self, Self::ArrowAtEnd)
    }
}

/// The purpose of a shape within a diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeRole {
    /// Short horizontal tap of an input `x_i`
    InputStub,
    /// The "D"-shaped body of a node
    NodeBody,
    /// Line leaving a node, where its response label sits
    Axon,
    /// Edge from a previous-layer tap to a node
    Connection,
    /// Edge from a bias tap to a node
    BiasConnection,
    /// Short line on which the bias `1` sits
    BiasStub,
}

/// A stroked path in layout space.
///
/// # Examples
///
/// ```
/// # use good_core::draw::{EndMarkers, Shape, ShapeKind, ShapeRole, StrokeDefinition};
/// # use good_core::geometry::Point;
/// let edge = Shape::line(
///     ShapeRole::Connection,
///     Point::new(1.105, 0.0),
///     Point::new(3.075, 0.0),
///     StrokeDefinition::default(),
/// )
/// .with_markers(EndMarkers::ArrowAtEnd);
///
/// assert_eq!(edge.kind(), ShapeKind::Polyline);
/// assert_eq!(edge.points().len(), 2);
/// assert!(edge.markers().has_end_arrow());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shape {
    role: ShapeRole,
    kind: ShapeKind,
    points: Vec<Point>,
    stroke: StrokeDefinition,
    markers: EndMarkers,
}

impl Shape {
    /// Creates an open path through `points`.
    pub fn polyline(role: ShapeRole, points: Vec<Point>, stroke: StrokeDefinition) -> Self {
        Self {
            role,
            kind: ShapeKind::Polyline,
            points,
            stroke,
            markers: EndMarkers::None,
        }
    }

    /// Creates a straight two-point line.
    pub fn line(role: ShapeRole, start: Point, end: Point, stroke: StrokeDefinition) -> Self {
        Self::polyline(role, vec![start, end], stroke)
    }

    /// Creates a closed outline through `points`.
    pub fn outline(role: ShapeRole, points: Vec<Point>, stroke: StrokeDefinition) -> Self {
        Self {
            role,
            kind: ShapeKind::Outline,
            points,
            stroke,
            markers: EndMarkers::None,
        }
    }

    /// Sets the endpoint markers (builder style).
    pub fn with_markers(mut self, markers: EndMarkers) -> Self {
        self.markers = markers;
        self
    }

    pub fn role(&self) -> ShapeRole {
        self.role
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    pub fn markers(&self) -> EndMarkers {
        self.markers
    }

    /// The first point of the path, if any
    pub fn start(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// The last point of the path, if any
    pub fn end(&self) -> Option<Point> {
        self.points.last().copied()
    }
}
