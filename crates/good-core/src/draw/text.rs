//! Text labels anchored in layout space.
//!
//! # Overview
//!
//! - [`TextDefinition`] - Reusable font configuration (family, size, italics)
//! - [`Label`] - A literal string placed at an anchor point
//! - [`HorizontalAnchor`] / [`VerticalAnchor`] - Which side of the text box
//!   sits on the anchor point
//!
//! Label texts may contain `<sub>` / `<sup>` markup; see [`markup`](super::markup).

use serde::Serialize;

use crate::geometry::Point;

/// Defines the font used for a label.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"Times"` |
/// | Font size | `12` |
/// | Italic | `false` |
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextDefinition {
    font_family: String,
    font_size: f32,
    italic: bool,
}

impl TextDefinition {
    /// Creates a text definition with the given family and size.
    pub fn new(font_family: impl Into<String>, font_size: f32) -> Self {
        Self {
            font_family: font_family.into(),
            font_size,
            italic: false,
        }
    }

    /// Returns a copy of this definition with italics switched on or off.
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    /// Sets the font family for the text.
    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    /// Sets the font size in points.
    pub fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn italic(&self) -> bool {
        self.italic
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self::new("Times", 12.0)
    }
}

/// Horizontal alignment of a label relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HorizontalAnchor {
    /// Text starts at the anchor and extends rightward
    Left,
    /// Text ends at the anchor
    Right,
}

impl HorizontalAnchor {
    /// Returns the SVG `text-anchor` value
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Left => "start",
            Self::Right => "end",
        }
    }
}

/// Vertical alignment of a label relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalAnchor {
    /// Top edge of the text at the anchor; text hangs below it
    Top,
    Middle,
    /// Bottom edge of the text at the anchor; text sits above it
    Bottom,
}

impl VerticalAnchor {
    /// Returns the SVG `dominant-baseline` value
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Top => "hanging",
            Self::Middle => "middle",
            Self::Bottom => "auto",
        }
    }
}

/// What a label annotates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelRole {
    /// `x_i` next to an input tap
    Input,
    /// `a_i^[l]` at a node's upper-right
    Response,
    /// Activation symbol at a node's lower-right
    Activation,
    /// The constant `1` beside a bias tap
    Bias,
}

/// A literal string anchored at a point in layout space.
///
/// # Examples
///
/// ```
/// # use good_core::draw::{HorizontalAnchor, Label, LabelRole, TextDefinition, VerticalAnchor};
/// # use good_core::geometry::Point;
/// let label = Label::new(
///     LabelRole::Bias,
///     Point::new(1.0, -1.3),
///     "1",
///     TextDefinition::new("Cambria Math", 8.0),
/// )
/// .with_anchor(HorizontalAnchor::Left, VerticalAnchor::Middle);
///
/// assert_eq!(label.text(), "1");
/// assert_eq!(label.horizontal_anchor(), HorizontalAnchor::Left);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    role: LabelRole,
    position: Point,
    horizontal_anchor: HorizontalAnchor,
    vertical_anchor: VerticalAnchor,
    definition: TextDefinition,
    text: String,
}

impl Label {
    /// Creates a label anchored left/middle at `position`.
    pub fn new(
        role: LabelRole,
        position: Point,
        text: impl Into<String>,
        definition: TextDefinition,
    ) -> Self {
        Self {
            role,
            position,
            horizontal_anchor: HorizontalAnchor::Left,
            vertical_anchor: VerticalAnchor::Middle,
            definition,
            text: text.into(),
        }
    }

    /// Sets both anchors (builder style).
    pub fn with_anchor(mut self, horizontal: HorizontalAnchor, vertical: VerticalAnchor) -> Self {
        self.horizontal_anchor = horizontal;
        self.vertical_anchor = vertical;
        self
    }

    pub fn role(&self) -> LabelRole {
        self.role
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn horizontal_anchor(&self) -> HorizontalAnchor {
        self.horizontal_anchor
    }

    pub fn vertical_anchor(&self) -> VerticalAnchor {
        self.vertical_anchor
    }

    pub fn definition(&self) -> &TextDefinition {
        &self.definition
    }

    pub fn font_family(&self) -> &str {
        self.definition.font_family()
    }

    pub fn font_size(&self) -> f32 {
        self.definition.font_size()
    }

    pub fn italic(&self) -> bool {
        self.definition.italic()
    }

    /// The literal text, possibly with `<sub>`/`<sup>` markup.
    pub fn text(&self) -> &str {
        &self.text
    }
}
