//! GOOD - Graph Of Ordered Dependencies diagrams for neural networks.
//!
//! Lays out a feed-forward network left to right: one column of "D"-shaped
//! nodes per layer, full connections between consecutive layers and an
//! optional bias input per layer. The result is a renderer-agnostic
//! [`scene::Scene`] which can be exported to SVG or JSON.

pub mod config;
pub mod export;
pub mod layout;
pub mod network;

mod error;

pub use good_core::{color, draw, geometry, scene};

pub use error::GoodError;

use log::{debug, info};

use config::{AppConfig, Style};
use export::{Exporter, json::JsonExporter, svg::SvgExporter};
use network::{LayerSpec, NetworkSpec};
use scene::Scene;

/// Builder for laying out and rendering GOOD diagrams.
///
/// # Examples
///
/// ```rust
/// use good::{DiagramBuilder, network::{LayerSpec, NetworkSpec, RELU, SIGMA}};
///
/// let network = NetworkSpec::new(
///     2,
///     vec![LayerSpec::new(6, RELU, true), LayerSpec::new(1, SIGMA, true)],
/// );
///
/// let builder = DiagramBuilder::default();
/// let scene = builder.build_figure(&network);
/// assert_eq!(scene.x_range().max(), 8.75);
///
/// let svg = builder.render_svg(&network).expect("Failed to render");
/// assert!(svg.contains("<svg"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DiagramBuilder {
    style: Style,
}

impl DiagramBuilder {
    /// Create a new diagram builder drawing with `style`.
    pub fn new(style: Style) -> Self {
        Self { style }
    }

    /// Create a builder from a loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GoodError::Config`] if the style section does not resolve.
    pub fn from_config(config: &AppConfig) -> Result<Self, GoodError> {
        let style = config.style().to_style().map_err(GoodError::Config)?;
        Ok(Self::new(style))
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Decode a TOML network description.
    ///
    /// # Errors
    ///
    /// Returns [`GoodError::Parse`] if the description cannot be decoded.
    pub fn parse(&self, source: &str) -> Result<NetworkSpec, GoodError> {
        info!("Parsing network description");
        network::parse(source)
    }

    /// Lay out `network` into a scene.
    ///
    /// The network is not validated; malformed networks yield degenerate
    /// scenes. Use [`Self::try_build_figure`] to reject them instead.
    pub fn build_figure(&self, network: &NetworkSpec) -> Scene {
        info!(
            inputs = network.input_dimension(),
            layers = network.layers().len();
            "Building figure"
        );
        let scene = layout::build_scene(network, &self.style);
        debug!(
            shapes = scene.shapes().len(),
            labels = scene.labels().len();
            "Figure built"
        );
        scene
    }

    /// Validate `network`, then lay it out.
    ///
    /// # Errors
    ///
    /// Returns [`GoodError::InvalidSpecification`] if the network has no
    /// inputs, no layers or an empty layer.
    pub fn try_build_figure(&self, network: &NetworkSpec) -> Result<Scene, GoodError> {
        network.validate()?;
        Ok(self.build_figure(network))
    }

    /// Validate, lay out and render `network` to an SVG document.
    ///
    /// # Errors
    ///
    /// Returns `GoodError` for an invalid network or a failed export.
    pub fn render_svg(&self, network: &NetworkSpec) -> Result<String, GoodError> {
        let scene = self.try_build_figure(network)?;

        let svg = SvgExporter::new()
            .with_background_color(self.style.background_color())
            .export(&scene)?;

        info!("SVG rendered successfully");
        Ok(svg)
    }

    /// Validate, lay out and serialize `network` as JSON.
    ///
    /// # Errors
    ///
    /// Returns `GoodError` for an invalid network or a failed export.
    pub fn render_json(&self, network: &NetworkSpec) -> Result<String, GoodError> {
        let scene = self.try_build_figure(network)?;
        let json = JsonExporter.export(&scene)?;

        info!("JSON rendered successfully");
        Ok(json)
    }
}

/// Lay out `layers` fed by `input_dimension` inputs with the default style.
///
/// ```rust
/// use good::{build_figure, network::{LayerSpec, RELU}};
///
/// let scene = build_figure(&[LayerSpec::new(3, RELU, false)], 4);
/// assert_eq!(scene.shapes().len(), 4 + 3 * 2 + 3 * 4);
/// ```
pub fn build_figure(layers: &[LayerSpec], input_dimension: usize) -> Scene {
    let network = NetworkSpec::new(input_dimension, layers.to_vec());
    DiagramBuilder::default().build_figure(&network)
}
