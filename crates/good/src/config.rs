//! Configuration types for GOOD diagram rendering.
//!
//! The layout is driven by one immutable [`Style`] value holding every
//! geometric and typographic constant. [`AppConfig`] is the deserializable
//! form loaded from TOML; each field it leaves unset keeps the default.
//!
//! # Overview
//!
//! - [`Style`] - Resolved, immutable drawing constants passed into the builder.
//! - [`AppConfig`] - Top-level configuration root.
//! - [`StyleConfig`] - Optional overrides for [`Style`] fields.
//!
//! # Example
//!
//! ```
//! # use good::config::AppConfig;
//! let config: AppConfig = toml::from_str(
//!     r#"
//!     [style]
//!     layer_spacing = 4.0
//!     stroke_color = "navy"
//!     "#,
//! )
//! .unwrap();
//!
//! let style = config.style().to_style().unwrap();
//! assert_eq!(style.layer_spacing(), 4.0);
//! ```

use serde::Deserialize;

use good_core::{
    color::Color,
    draw::{NodeOutline, StrokeDefinition, TextDefinition},
    geometry::Size,
    scene::DEFAULT_CANVAS,
};

/// Node body width in layout units.
const NODE_WIDTH: f32 = 0.85;
/// Node body height in layout units.
const NODE_HEIGHT: f32 = 0.65;
/// Axon length as a fraction of the node width.
const AXON_RATIO: f32 = 0.8;
/// Bias stub length as a fraction of the node width.
const BIAS_STUB_RATIO: f32 = 0.3;
/// Horizontal pitch between consecutive layers.
const LAYER_SPACING: f32 = 3.5;
/// Angular steps sampled across the node's left arc.
const ARC_STEPS: u16 = 50;
const STROKE_WIDTH: f32 = 0.5;

const FONT_FAMILY_DEFAULT: &str = "Times";
const FONT_FAMILY_ACTIVATION: &str = "Script MT Bold";
const FONT_FAMILY_BIAS: &str = "Cambria Math";
const FONT_SIZE_DEFAULT: f32 = 12.0;
const FONT_SIZE_SMALL: f32 = 8.0;

/// Resolved drawing constants for one diagram build.
///
/// Lengths are in layout units except stroke widths and font sizes, which
/// are in canvas pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    node_size: Size,
    axon_length: f32,
    bias_stub_length: f32,
    layer_spacing: f32,
    arc_steps: u16,
    stroke: StrokeDefinition,
    label_text: TextDefinition,
    activation_text: TextDefinition,
    bias_text: TextDefinition,
    canvas: Size,
    background_color: Option<Color>,
}

impl Style {
    /// Creates a style for nodes of `node_size` with the default proportions:
    /// the axon is 0.8 node widths long and the bias stub 0.3 node widths.
    pub fn new(node_size: Size, layer_spacing: f32) -> Self {
        Self {
            node_size,
            axon_length: AXON_RATIO * node_size.width(),
            bias_stub_length: BIAS_STUB_RATIO * node_size.width(),
            layer_spacing,
            arc_steps: ARC_STEPS,
            stroke: StrokeDefinition::default(),
            label_text: TextDefinition::new(FONT_FAMILY_DEFAULT, FONT_SIZE_DEFAULT),
            activation_text: TextDefinition::new(FONT_FAMILY_ACTIVATION, FONT_SIZE_SMALL)
                .with_italic(true),
            bias_text: TextDefinition::new(FONT_FAMILY_BIAS, FONT_SIZE_SMALL),
            canvas: DEFAULT_CANVAS,
            background_color: None,
        }
    }

    pub fn with_axon_length(mut self, axon_length: f32) -> Self {
        self.axon_length = axon_length;
        self
    }

    pub fn with_arc_steps(mut self, arc_steps: u16) -> Self {
        self.arc_steps = arc_steps;
        self
    }

    pub fn with_stroke(mut self, stroke: StrokeDefinition) -> Self {
        self.stroke = stroke;
        self
    }

    pub fn with_label_text(mut self, text: TextDefinition) -> Self {
        self.label_text = text;
        self
    }

    pub fn with_activation_text(mut self, text: TextDefinition) -> Self {
        self.activation_text = text;
        self
    }

    pub fn with_bias_text(mut self, text: TextDefinition) -> Self {
        self.bias_text = text;
        self
    }

    pub fn with_canvas(mut self, canvas: Size) -> Self {
        self.canvas = canvas;
        self
    }

    pub fn with_background_color(mut self, color: Option<Color>) -> Self {
        self.background_color = color;
        self
    }

    /// Node body size `W × H`.
    pub fn node_size(&self) -> Size {
        self.node_size
    }

    /// Length of the line leaving each node, from its right edge.
    pub fn axon_length(&self) -> f32 {
        self.axon_length
    }

    pub fn bias_stub_length(&self) -> f32 {
        self.bias_stub_length
    }

    /// Horizontal distance between consecutive layer centers.
    pub fn layer_spacing(&self) -> f32 {
        self.layer_spacing
    }

    pub fn arc_steps(&self) -> u16 {
        self.arc_steps
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    /// Font of input and response labels.
    pub fn label_text(&self) -> &TextDefinition {
        &self.label_text
    }

    pub fn activation_text(&self) -> &TextDefinition {
        &self.activation_text
    }

    pub fn bias_text(&self) -> &TextDefinition {
        &self.bias_text
    }

    pub fn canvas(&self) -> Size {
        self.canvas
    }

    pub fn background_color(&self) -> Option<Color> {
        self.background_color
    }

    /// The node body geometry for this style.
    pub fn node_outline(&self) -> NodeOutline {
        NodeOutline::new(self.node_size, self.arc_steps)
    }

    /// Distance from a node center to the end of its axon, where outgoing
    /// edges originate.
    pub fn tap_offset(&self) -> f32 {
        self.node_size.half_width() + self.axon_length
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::new(Size::new(NODE_WIDTH, NODE_HEIGHT), LAYER_SPACING)
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    pub fn new(style: StyleConfig) -> Self {
        Self { style }
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Optional overrides for the default [`Style`].
///
/// Fields that are not set fall back to the defaults.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    #[serde(default)]
    node_width: Option<f32>,
    #[serde(default)]
    node_height: Option<f32>,
    /// Defaults to 0.8 node widths.
    #[serde(default)]
    axon_length: Option<f32>,
    #[serde(default)]
    layer_spacing: Option<f32>,
    #[serde(default)]
    arc_steps: Option<u16>,

    /// Stroke color as a CSS color string.
    #[serde(default)]
    stroke_color: Option<String>,
    #[serde(default)]
    stroke_width: Option<f32>,

    #[serde(default)]
    font_family: Option<String>,
    #[serde(default)]
    font_size: Option<f32>,
    #[serde(default)]
    activation_font_family: Option<String>,
    #[serde(default)]
    activation_font_size: Option<f32>,
    #[serde(default)]
    bias_font_family: Option<String>,
    #[serde(default)]
    bias_font_size: Option<f32>,

    #[serde(default)]
    canvas_width: Option<f32>,
    #[serde(default)]
    canvas_height: Option<f32>,
    /// Canvas fill as a CSS color string; transparent when unset.
    #[serde(default)]
    background_color: Option<String>,
}

impl StyleConfig {
    /// Resolves these overrides into a [`Style`].
    ///
    /// # Errors
    ///
    /// Returns an error if a color string cannot be parsed or a length,
    /// width or font size is not a positive finite number.
    pub fn to_style(&self) -> Result<Style, String> {
        let defaults = Style::default();

        let node_size = Size::new(
            self.node_width.unwrap_or(defaults.node_size.width()),
            self.node_height.unwrap_or(defaults.node_size.height()),
        );
        if !node_size.is_positive() {
            return Err(format!(
                "Invalid node size in config: {} x {}",
                node_size.width(),
                node_size.height()
            ));
        }

        let layer_spacing = positive(
            "layer_spacing",
            self.layer_spacing.unwrap_or(defaults.layer_spacing),
        )?;
        let mut style = Style::new(node_size, layer_spacing);

        if let Some(axon_length) = self.axon_length {
            style = style.with_axon_length(positive("axon_length", axon_length)?);
        }
        if let Some(arc_steps) = self.arc_steps {
            style = style.with_arc_steps(arc_steps);
        }

        let mut stroke = defaults.stroke.clone();
        if let Some(color) = &self.stroke_color {
            stroke.set_color(parse_color("stroke_color", color)?);
        }
        if let Some(width) = self.stroke_width {
            stroke.set_width(positive("stroke_width", width)?);
        }
        style = style.with_stroke(stroke);

        style = style
            .with_label_text(text_override(
                defaults.label_text(),
                self.font_family.as_deref(),
                self.font_size,
                "font_size",
            )?)
            .with_activation_text(text_override(
                defaults.activation_text(),
                self.activation_font_family.as_deref(),
                self.activation_font_size,
                "activation_font_size",
            )?)
            .with_bias_text(text_override(
                defaults.bias_text(),
                self.bias_font_family.as_deref(),
                self.bias_font_size,
                "bias_font_size",
            )?);

        let canvas = Size::new(
            self.canvas_width.unwrap_or(defaults.canvas.width()),
            self.canvas_height.unwrap_or(defaults.canvas.height()),
        );
        if !canvas.is_positive() {
            return Err(format!(
                "Invalid canvas size in config: {} x {}",
                canvas.width(),
                canvas.height()
            ));
        }
        style = style.with_canvas(canvas);

        let background = self
            .background_color
            .as_deref()
            .map(|color| parse_color("background_color", color))
            .transpose()?;

        Ok(style.with_background_color(background))
    }
}

fn positive(name: &str, value: f32) -> Result<f32, String> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(format!("Invalid {name} in config: {value} is not positive"))
    }
}

fn parse_color(name: &str, value: &str) -> Result<Color, String> {
    Color::new(value).map_err(|err| format!("Invalid {name} in config: {err}"))
}

fn text_override(
    base: &TextDefinition,
    family: Option<&str>,
    size: Option<f32>,
    size_name: &str,
) -> Result<TextDefinition, String> {
    let mut text = base.clone();
    if let Some(family) = family {
        text.set_font_family(family);
    }
    if let Some(size) = size {
        text.set_font_size(positive(size_name, size)?);
    }
    Ok(text)
}
