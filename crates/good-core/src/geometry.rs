//! Geometric primitives for diagram layout.
//!
//! This module provides the fundamental geometric types used by GOOD diagrams
//! to place nodes, edges and labels.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in layout units
//! - [`Size`] - Width and height dimensions
//! - [`AxisRange`] - A closed interval on one axis, used for scene bounds
//!
//! # Coordinate System
//!
//! Scenes are laid out in abstract layout units with a plotting-style axis:
//!
//! ```text
//!    +Y
//!     ▲
//!     │
//!     │
//!     │
//!   (0,0) ────────► +X
//! ```
//!
//! - **X-axis**: Increases rightward; layers advance along it
//! - **Y-axis**: Increases upward; nodes of a layer stack along it
//!
//! Exporters targeting screen coordinates (such as SVG) flip the y axis.

use serde::Serialize;

/// A 2D point representing a position in layout coordinate space.
///
/// # Examples
///
/// ```
/// # use good_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let sum = p1.add_point(p2);
/// assert_eq!(sum.x(), 15.0);
/// assert_eq!(sum.y(), 25.0);
///
/// let mid = p1.midpoint(p2);
/// assert_eq!(mid.x(), 7.5);
/// assert_eq!(mid.y(), 12.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Creates a new point with the specified x-coordinate
    pub fn with_x(mut self, x: f32) -> Self {
        self.x = x;
        self
    }

    /// Creates a new point with the specified y-coordinate
    pub fn with_y(mut self, y: f32) -> Self {
        self.y = y;
        self
    }

    /// Adds another point to this point, returning a new point.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the midpoint between this point and another point
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Multiplies both coordinates by the given factor.
    pub fn scale(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns half of the width
    pub fn half_width(self) -> f32 {
        self.width / 2.0
    }

    /// Returns half of the height
    pub fn half_height(self) -> f32 {
        self.height / 2.0
    }

    /// Returns true if both dimensions are strictly positive and finite
    pub fn is_positive(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// A closed interval `[min, max]` along one axis.
///
/// Scenes carry one range per axis as advisory bounds for a renderer: content
/// outside the range is still emitted, the range only suggests a viewport.
///
/// # Examples
///
/// ```
/// # use good_core::geometry::AxisRange;
/// let range = AxisRange::new(-3.0, 4.0);
/// assert_eq!(range.span(), 7.0);
/// assert!(range.contains(0.0));
/// assert!(!range.contains(4.5));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct AxisRange {
    min: f32,
    max: f32,
}

impl AxisRange {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Returns the lower bound
    pub fn min(self) -> f32 {
        self.min
    }

    /// Returns the upper bound
    pub fn max(self) -> f32 {
        self.max
    }

    /// Returns `max - min`
    pub fn span(self) -> f32 {
        self.max - self.min
    }

    /// Checks whether `value` lies inside the closed interval
    pub fn contains(self, value: f32) -> bool {
        self.min <= value && value <= self.max
    }
}
