//! The "D"-shaped node outline.
//!
//! A node is a half ellipse on the left joined to a flat right edge:
//!
//! ```text
//!    ____________
//!   /            |
//!  (      ·      |     · = node center
//!   \____________|
//! ```
//!
//! The left arc is the ellipse with semi-axes `W/2` and `H/2` centred on the
//! node, so the body spans exactly `W × H` around its center.

use std::f32::consts::{FRAC_PI_2, PI};

use crate::geometry::{Point, Size};

/// Geometry of a node body: its size and how finely the left arc is sampled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeOutline {
    size: Size,
    arc_steps: u16,
}

impl NodeOutline {
    /// Creates an outline of `size` whose arc is sampled in `arc_steps`
    /// equal angular steps across π. At least one step is always used.
    pub fn new(size: Size, arc_steps: u16) -> Self {
        Self {
            size,
            arc_steps: arc_steps.max(1),
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn arc_steps(&self) -> u16 {
        self.arc_steps
    }

    /// Traces the closed outline around `center`.
    ///
    /// Starts at the top-right corner, follows the arc counter-clockwise from
    /// the top of the node through its leftmost point to the bottom, then
    /// runs along the flat right edge back to the start. The first and last
    /// points coincide.
    pub fn outline(&self, center: Point) -> Vec<Point> {
        let half_width = self.size.half_width();
        let half_height = self.size.half_height();
        let steps = usize::from(self.arc_steps);

        let top_right = Point::new(center.x() + half_width, center.y() + half_height);
        let bottom_right = Point::new(center.x() + half_width, center.y() - half_height);

        let mut points = Vec::with_capacity(steps + 4);
        points.push(top_right);
        points.extend((0..=steps).map(|step| {
            let angle = FRAC_PI_2 + PI * step as f32 / steps as f32;
            Point::new(
                half_width.mul_add(angle.cos(), center.x()),
                half_height.mul_add(angle.sin(), center.y()),
            )
        }));
        points.push(bottom_right);
        points.push(top_right);

        points
    }

    /// Finds where an edge arriving from `source` meets the left arc of the
    /// node centred at `center`.
    ///
    /// The bearing is `atan(dy / dx)` between source and center, and the end
    /// point is pulled back from the center by `W/2·cos` horizontally and
    /// `H/2·sin` vertically. The result always lies on the arc when the
    /// source is to the left of the node.
    ///
    /// The source must not share the center's x-coordinate; edges only ever
    /// run between layers at different horizontal offsets.
    pub fn boundary_toward(&self, center: Point, source: Point) -> Point {
        debug_assert!(
            source.x() != center.x(),
            "edge source must not be vertically aligned with the node center"
        );

        let angle = ((source.y() - center.y()) / (source.x() - center.x())).atan();
        Point::new(
            center.x() - self.size.half_width() * angle.cos(),
            center.y() - self.size.half_height() * angle.sin(),
        )
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn outline() -> NodeOutline {
        NodeOutline::new(Size::new(0.85, 0.65), 50)
    }

    #[test]
    fn test_outline_point_count_and_closure() {
        let points = outline().outline(Point::new(3.5, 1.0));

        // corner + 51 arc samples + bottom-right + closing corner
        assert_eq!(points.len(), 54);
        assert_eq!(points.first(), points.last());
    }

    #[test]
    fn test_outline_extents() {
        let center = Point::new(3.5, 1.0);
        let points = outline().outline(center);

        let min_x = points.iter().map(|p| p.x()).fold(f32::INFINITY, f32::min);
        let max_x = points.iter().map(|p| p.x()).fold(f32::NEG_INFINITY, f32::max);
        let min_y = points.iter().map(|p| p.y()).fold(f32::INFINITY, f32::min);
        let max_y = points.iter().map(|p| p.y()).fold(f32::NEG_INFINITY, f32::max);

        assert_approx_eq!(f32, min_x, 3.5 - 0.425, epsilon = 1e-5);
        assert_approx_eq!(f32, max_x, 3.5 + 0.425, epsilon = 1e-5);
        assert_approx_eq!(f32, min_y, 1.0 - 0.325, epsilon = 1e-5);
        assert_approx_eq!(f32, max_y, 1.0 + 0.325, epsilon = 1e-5);
    }

    #[test]
    fn test_outline_right_edge_is_flat() {
        let points = outline().outline(Point::new(0.0, 0.0));
        let n = points.len();

        assert_approx_eq!(f32, points[n - 2].x(), 0.425);
        assert_approx_eq!(f32, points[n - 1].x(), 0.425);
        assert_approx_eq!(f32, points[n - 2].y(), -0.325);
        assert_approx_eq!(f32, points[n - 1].y(), 0.325);
    }

    #[test]
    fn test_outline_arc_passes_leftmost_point_at_center_height() {
        let points = outline().outline(Point::new(0.0, 0.0));

        // Sample 25 of 50 sits at angle π, one past the leading corner.
        let leftmost = points[26];
        assert_approx_eq!(f32, leftmost.x(), -0.425, epsilon = 1e-5);
        assert_approx_eq!(f32, leftmost.y(), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_zero_steps_is_clamped() {
        let node = NodeOutline::new(Size::new(1.0, 1.0), 0);
        assert_eq!(node.arc_steps(), 1);
        assert_eq!(node.outline(Point::default()).len(), 5);
    }

    #[test]
    fn test_boundary_head_on() {
        let end = outline().boundary_toward(Point::new(3.5, 0.0), Point::new(1.105, 0.0));

        assert_approx_eq!(f32, end.x(), 3.5 - 0.425);
        assert_approx_eq!(f32, end.y(), 0.0);
    }

    #[test]
    fn test_boundary_from_below_left() {
        let center = Point::new(3.5, 1.0);
        let source = Point::new(1.5, -1.0);
        let end = outline().boundary_toward(center, source);

        // 45° approach
        let angle = std::f32::consts::FRAC_PI_4;
        assert_approx_eq!(f32, end.x(), 3.5 - 0.425 * angle.cos(), epsilon = 1e-5);
        assert_approx_eq!(f32, end.y(), 1.0 - 0.325 * angle.sin(), epsilon = 1e-5);
        assert!(end.y() < center.y());
    }
}
