//! Stroke definitions.
//!
//! Every line and outline in a GOOD diagram shares one stroke style, but the
//! style is still carried per shape so that a renderer never has to consult
//! global state.
//!
//! | Rust Property | SVG Attribute |
//! |--------------|---------------|
//! | `color` | `stroke`, `stroke-opacity` |
//! | `width` | `stroke-width` |

use serde::Serialize;

use crate::color::Color;

/// A stroke definition for rendering lines and outlines.
///
/// The width is expressed in canvas pixels, not layout units, so that line
/// weight stays constant however far the scene is scaled.
///
/// # Examples
///
/// ```
/// use good_core::draw::StrokeDefinition;
/// use good_core::color::Color;
///
/// let stroke = StrokeDefinition::new(Color::new("black").unwrap(), 0.5);
/// assert_eq!(stroke.width(), 0.5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
}

impl StrokeDefinition {
    /// Creates a new stroke with the given color and width.
    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Sets the stroke color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Sets the stroke width.
    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }
}

impl Default for StrokeDefinition {
    /// Thin black hairline (width 0.5).
    fn default() -> Self {
        Self {
            color: Color::default(),
            width: 0.5,
        }
    }
}

/// Apply stroke attributes to an SVG element.
///
/// # Examples
///
/// ```
/// use good_core::draw::StrokeDefinition;
/// use svg::node::element as svg_element;
///
/// let stroke = StrokeDefinition::default();
/// let line = svg_element::Polyline::new().set("points", "0,0 1,1");
/// let line = good_core::apply_stroke!(line, &stroke);
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width())
    }};
}
