//! Network descriptions: what a GOOD diagram depicts.
//!
//! A [`NetworkSpec`] is the diagram specification: the size of the virtual
//! input layer plus an ordered list of [`LayerSpec`]s. Both are immutable
//! values; the layout reads them and never changes them.
//!
//! # TOML format
//!
//! ```toml
//! input_dimension = 2
//!
//! [[layers]]
//! node_count = 6
//! activation = "relu"
//!
//! [[layers]]
//! node_count = 1
//! activation = "sigma"
//! show_bias = false
//! ```
//!
//! Omitted layer fields default to one node, an empty activation and a shown
//! bias. Activation names are resolved with [`activation_symbol`].

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::GoodError;

/// Rectified linear unit, drawn as a bold script capital R (U+1D4E1).
pub const RELU: &str = "\u{1D4E1}";

/// Logistic sigmoid, drawn as `σ` (U+03C3).
pub const SIGMA: &str = "\u{03C3}";

/// Resolves a well-known activation name to its display symbol.
///
/// `relu` maps to [`RELU`]; `sigma` and `sigmoid` map to [`SIGMA`]. Matching
/// ignores ASCII case. Anything else is already a display string and is
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use good::network::{activation_symbol, RELU, SIGMA};
///
/// assert_eq!(activation_symbol("ReLU"), RELU);
/// assert_eq!(activation_symbol("sigmoid"), SIGMA);
/// assert_eq!(activation_symbol("tanh"), "tanh");
/// ```
pub fn activation_symbol(name: &str) -> &str {
    if name.eq_ignore_ascii_case("relu") {
        RELU
    } else if name.eq_ignore_ascii_case("sigma") || name.eq_ignore_ascii_case("sigmoid") {
        SIGMA
    } else {
        name
    }
}

/// One column of nodes in the diagram.
///
/// The activation is purely cosmetic and never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerSpec {
    #[serde(default = "default_node_count", alias = "count_nodes")]
    node_count: usize,

    #[serde(default)]
    activation: String,

    #[serde(default = "default_show_bias")]
    show_bias: bool,
}

fn default_node_count() -> usize {
    1
}

fn default_show_bias() -> bool {
    true
}

impl LayerSpec {
    /// Creates a layer of `node_count` nodes.
    pub fn new(node_count: usize, activation: impl Into<String>, show_bias: bool) -> Self {
        Self {
            node_count,
            activation: activation.into(),
            show_bias,
        }
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn activation(&self) -> &str {
        &self.activation
    }

    /// Whether every node of this layer receives an edge from a bias tap.
    pub fn show_bias(&self) -> bool {
        self.show_bias
    }
}

impl Default for LayerSpec {
    fn default() -> Self {
        Self::new(default_node_count(), "", default_show_bias())
    }
}

/// The full network description: input dimension plus ordered layers.
///
/// # Examples
///
/// ```
/// use good::network::{LayerSpec, NetworkSpec, RELU, SIGMA};
///
/// let network = NetworkSpec::new(
///     2,
///     vec![LayerSpec::new(6, RELU, true), LayerSpec::new(1, SIGMA, true)],
/// );
/// assert_eq!(network.max_node_count(), 6);
/// assert_eq!(network.connection_count(), 6 * 2 + 1 * 6);
/// assert!(network.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSpec {
    #[serde(alias = "count_inputs")]
    input_dimension: usize,

    #[serde(default)]
    layers: Vec<LayerSpec>,
}

impl NetworkSpec {
    pub fn new(input_dimension: usize, layers: Vec<LayerSpec>) -> Self {
        Self {
            input_dimension,
            layers,
        }
    }

    /// Node count of the virtual input layer.
    pub fn input_dimension(&self) -> usize {
        self.input_dimension
    }

    pub fn layers(&self) -> &[LayerSpec] {
        &self.layers
    }

    /// Largest node count over the declared layers, or zero when there are none.
    ///
    /// The input dimension is not included.
    pub fn max_node_count(&self) -> usize {
        self.layers
            .iter()
            .map(LayerSpec::node_count)
            .max()
            .unwrap_or(0)
    }

    /// Number of full (non-bias) connections the diagram will contain.
    pub fn connection_count(&self) -> usize {
        let mut previous = self.input_dimension;
        self.layers
            .iter()
            .map(|layer| {
                let count = layer.node_count * previous;
                previous = layer.node_count;
                count
            })
            .sum()
    }

    /// Checks the preconditions the layout silently assumes.
    ///
    /// # Errors
    ///
    /// Returns [`GoodError::InvalidSpecification`] if the input dimension is
    /// zero, there are no layers, or any layer has no nodes.
    pub fn validate(&self) -> Result<(), GoodError> {
        if self.input_dimension == 0 {
            return Err(GoodError::InvalidSpecification(
                "input_dimension must be at least 1".to_string(),
            ));
        }

        if self.layers.is_empty() {
            return Err(GoodError::InvalidSpecification(
                "network must declare at least one layer".to_string(),
            ));
        }

        if let Some(index) = self.layers.iter().position(|layer| layer.node_count == 0) {
            return Err(GoodError::InvalidSpecification(format!(
                "layer {} must have at least one node",
                index + 1
            )));
        }

        Ok(())
    }
}

/// Decodes a TOML network description.
///
/// Activation names are resolved through [`activation_symbol`]. The result is
/// not validated.
///
/// # Errors
///
/// Returns [`GoodError::Parse`] with the decoder's message and span if the
/// source is not a valid description.
pub fn parse(source: &str) -> Result<NetworkSpec, GoodError> {
    let network: NetworkSpec = toml::from_str(source).map_err(|err| {
        GoodError::new_parse_error(err.message().to_string(), err.span(), source)
    })?;

    let layers = network
        .layers
        .into_iter()
        .map(|layer| {
            let activation = activation_symbol(&layer.activation).to_string();
            LayerSpec { activation, ..layer }
        })
        .collect::<Vec<_>>();
    let network = NetworkSpec::new(network.input_dimension, layers);

    debug!(
        input_dimension = network.input_dimension,
        layers = network.layers.len();
        "Network description parsed"
    );
    trace!(network:?; "Parsed network");

    Ok(network)
}
