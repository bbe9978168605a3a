//! Layout of a network into a [`Scene`].
//!
//! The orchestrator walks the declared layers left to right. Before the first
//! layer it lays out the input taps; for every layer it draws the nodes, the
//! full bipartite fan-out from the previous layer and, when requested, one
//! bias edge per node. The only state carried from one layer to the next is
//! a [`Tap`]: the previous layer's node count and the x-coordinate where its
//! outgoing edges start.
//!
//! All positions are in layout units with the y axis pointing up.

mod connection;
mod input;
mod node;

pub use connection::{draw_bias, draw_connection};
pub use input::layout_inputs;
pub use node::{draw_axon, draw_node, response_label};

use log::{debug, trace};

use good_core::{
    draw::{Label, Shape},
    geometry::{AxisRange, Point},
    scene::Scene,
};

use crate::{config::Style, network::NetworkSpec};

/// Where the edges into the next layer originate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tap {
    count_nodes: usize,
    x: f32,
}

impl Tap {
    pub fn new(count_nodes: usize, x: f32) -> Self {
        Self { count_nodes, x }
    }

    /// Node count of the layer that owns this tap.
    pub fn count_nodes(&self) -> usize {
        self.count_nodes
    }

    /// The x-coordinate at the end of the layer's axons.
    pub fn x(&self) -> f32 {
        self.x
    }

    /// The source point for edges leaving node `index`.
    pub fn source(&self, index: usize) -> Point {
        Point::new(self.x, node_y(index, self.count_nodes))
    }
}

/// Shapes and labels accumulated by the layout routines.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneParts {
    shapes: Vec<Shape>,
    labels: Vec<Label>,
}

impl SceneParts {
    pub fn push_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn push_label(&mut self, label: Label) {
        self.labels.push(label);
    }

    /// Appends everything from `other`.
    pub fn merge(&mut self, other: SceneParts) {
        self.shapes.extend(other.shapes);
        self.labels.extend(other.labels);
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn into_parts(self) -> (Vec<Shape>, Vec<Label>) {
        (self.shapes, self.labels)
    }
}

/// Vertical center of node `index` in a layer of `count` nodes.
///
/// Computed as `index - count / 2 + 1` with integer halving, so a single
/// node sits at `y = 1` and a layer of six spans `-2..=3`.
pub fn node_y(index: usize, count: usize) -> f32 {
    index as f32 - (count / 2) as f32 + 1.0
}

/// Horizontal center of the 0-based layer `index`.
///
/// Layers are evenly spaced; node counts play no part.
pub fn layer_x(index: usize, style: &Style) -> f32 {
    (index + 1) as f32 * style.layer_spacing()
}

/// Synthetic source point of the bias edges into a layer of `count_nodes`
/// nodes centred at `x_center`.
///
/// It sits 70% of the way back towards `previous`, and vertically at the
/// lower of just below the previous layer's bottom and the midpoint between
/// that and the current layer's bottom.
pub fn bias_source(previous: Tap, count_nodes: usize, x_center: f32) -> Point {
    let x = 0.7 * previous.x() + 0.3 * x_center;

    let below_previous = -(previous.count_nodes() as f32) / 2.0 + 0.4;
    let current_bottom = -(count_nodes as f32) / 2.0 + 1.0;
    let y = below_previous.min((below_previous + current_bottom) / 2.0);

    Point::new(x, y)
}

/// Advisory horizontal range for `layer_count` layers: the layers' total
/// span plus half a pitch per layer spread over the trailing margin.
pub fn x_range(layer_count: usize, style: &Style) -> AxisRange {
    if layer_count == 0 {
        return AxisRange::new(0.0, 0.0);
    }

    let total = layer_count as f32 * style.layer_spacing();
    AxisRange::new(0.0, total * (1.0 + 1.0 / (2.0 * layer_count as f32)))
}

/// Advisory vertical range centred on the widest layer, with one unit of
/// head room.
pub fn y_range(max_node_count: usize) -> AxisRange {
    let half = max_node_count as f32 / 2.0;
    AxisRange::new(-half, half + 1.0)
}

/// Lays out `network` with `style`.
///
/// No validation happens here: zero inputs, an empty layer list or empty
/// layers give degenerate but well-defined scenes.
pub fn build_scene(network: &NetworkSpec, style: &Style) -> Scene {
    let (mut previous, mut parts) = layout_inputs(network.input_dimension(), 0.0, style);

    for (index, layer) in network.layers().iter().enumerate() {
        let x_center = layer_x(index, style);
        let count_nodes = layer.node_count();

        debug!(
            layer = index + 1,
            nodes = count_nodes,
            connections = count_nodes * previous.count_nodes(),
            bias = layer.show_bias(),
            x = x_center;
            "Laying out layer"
        );

        for i in 0..count_nodes {
            let center = Point::new(x_center, node_y(i, count_nodes));

            parts.merge(draw_node(center, layer.activation(), style));
            parts.push_shape(draw_axon(center, style));
            parts.push_label(response_label(center, count_nodes - i, index + 1, style));

            for j in 0..previous.count_nodes() {
                parts.push_shape(draw_connection(previous.source(j), center, style));
            }

            if layer.show_bias() {
                let source = bias_source(previous, count_nodes, x_center);
                parts.merge(draw_bias(source, center, style));
            }
        }

        previous = Tap::new(count_nodes, x_center + style.tap_offset());
    }

    let (shapes, labels) = parts.into_parts();
    let scene = Scene::new(
        shapes,
        labels,
        x_range(network.layers().len(), style),
        y_range(network.max_node_count()),
        style.canvas(),
    );
    trace!(scene:?; "Scene built");

    scene
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use good_core::draw::{LabelRole, ShapeRole};

    use super::*;
    use crate::network::{LayerSpec, RELU, SIGMA};

    fn sample_network() -> NetworkSpec {
        NetworkSpec::new(
            2,
            vec![LayerSpec::new(6, RELU, true), LayerSpec::new(1, SIGMA, true)],
        )
    }

    #[test]
    fn test_node_y_offsets() {
        assert_eq!(node_y(0, 1), 1.0);

        let six: Vec<f32> = (0..6).map(|i| node_y(i, 6)).collect();
        assert_eq!(six, [-2.0, -1.0, 0.0, 1.0, 2.0, 3.0]);

        let seven: Vec<f32> = (0..7).map(|i| node_y(i, 7)).collect();
        assert_eq!(seven, [-2.0, -1.0, 0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_layer_x_is_uniform() {
        let style = Style::default();
        assert_eq!(layer_x(0, &style), 3.5);
        assert_eq!(layer_x(1, &style), 7.0);
        assert_eq!(layer_x(4, &style), 17.5);
    }

    #[test]
    fn test_bias_source_first_layer() {
        let previous = Tap::new(2, 1.105);
        let source = bias_source(previous, 6, 3.5);

        assert_approx_eq!(f32, source.x(), 0.7 * 1.105 + 0.3 * 3.5);
        // below_previous = -0.6, current_bottom = -2.0, midpoint = -1.3
        assert_approx_eq!(f32, source.y(), -1.3);
    }

    #[test]
    fn test_bias_source_prefers_previous_when_lower() {
        let previous = Tap::new(6, 4.605);
        let source = bias_source(previous, 1, 7.0);

        // below_previous = -2.6, current_bottom = 0.5, midpoint = -1.05
        assert_approx_eq!(f32, source.y(), -2.6);
    }

    #[test]
    fn test_ranges() {
        let style = Style::default();
        assert_eq!(x_range(2, &style), AxisRange::new(0.0, 8.75));
        assert_eq!(x_range(0, &style), AxisRange::new(0.0, 0.0));
        assert_eq!(y_range(6), AxisRange::new(-3.0, 4.0));
        assert_eq!(y_range(1), AxisRange::new(-0.5, 1.5));
        assert_eq!(y_range(0), AxisRange::new(0.0, 1.0));
    }

    #[test]
    fn test_scene_counts_by_role() {
        let scene = build_scene(&sample_network(), &Style::default());

        assert_eq!(scene.shapes_with_role(ShapeRole::InputStub).count(), 2);
        assert_eq!(scene.labels_with_role(LabelRole::Input).count(), 2);
        assert_eq!(scene.shapes_with_role(ShapeRole::NodeBody).count(), 7);
        assert_eq!(scene.shapes_with_role(ShapeRole::Axon).count(), 7);
        assert_eq!(scene.labels_with_role(LabelRole::Response).count(), 7);
        assert_eq!(scene.labels_with_role(LabelRole::Activation).count(), 7);
        assert_eq!(scene.shapes_with_role(ShapeRole::Connection).count(), 12 + 6);
        assert_eq!(scene.shapes_with_role(ShapeRole::BiasConnection).count(), 7);
        assert_eq!(scene.shapes_with_role(ShapeRole::BiasStub).count(), 7);
        assert_eq!(scene.labels_with_role(LabelRole::Bias).count(), 7);
    }

    #[test]
    fn test_no_bias_when_disabled() {
        let network = NetworkSpec::new(3, vec![LayerSpec::new(4, "", false)]);
        let scene = build_scene(&network, &Style::default());

        assert_eq!(scene.shapes_with_role(ShapeRole::BiasConnection).count(), 0);
        assert_eq!(scene.shapes_with_role(ShapeRole::BiasStub).count(), 0);
        assert_eq!(scene.labels_with_role(LabelRole::Bias).count(), 0);
        assert_eq!(scene.shapes_with_role(ShapeRole::Connection).count(), 12);
    }

    #[test]
    fn test_second_layer_edges_start_at_axon_ends() {
        let style = Style::default();
        let scene = build_scene(&sample_network(), &style);

        let second_layer_x = layer_x(1, &style);
        let first_axon_end = layer_x(0, &style) + style.tap_offset();

        let into_output: Vec<&Shape> = scene
            .shapes_with_role(ShapeRole::Connection)
            .filter(|shape| shape.end().is_some_and(|end| end.x() > second_layer_x - 1.0))
            .collect();
        assert_eq!(into_output.len(), 6);
        for shape in into_output {
            assert_approx_eq!(f32, shape.start().unwrap().x(), first_axon_end);
        }
    }

    #[test]
    fn test_response_labels_count_down() {
        let network = NetworkSpec::new(1, vec![LayerSpec::new(3, "", false)]);
        let scene = build_scene(&network, &Style::default());

        let mut labels: Vec<(f32, &str)> = scene
            .labels_with_role(LabelRole::Response)
            .map(|label| (label.position().y(), label.text()))
            .collect();
        labels.sort_by(|a, b| a.0.total_cmp(&b.0));

        let texts: Vec<&str> = labels.into_iter().map(|(_, text)| text).collect();
        assert_eq!(
            texts,
            [
                "a<sub>3</sub><sup>[1]</sup>",
                "a<sub>2</sub><sup>[1]</sup>",
                "a<sub>1</sub><sup>[1]</sup>",
            ]
        );
    }

    #[test]
    fn test_empty_network_is_degenerate_not_panicking() {
        let scene = build_scene(&NetworkSpec::new(0, Vec::new()), &Style::default());

        assert!(scene.shapes().is_empty());
        assert!(scene.labels().is_empty());
        assert_eq!(scene.x_range(), AxisRange::new(0.0, 0.0));
    }
}

#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use good_core::draw::ShapeRole;
    use proptest::prelude::*;

    use super::*;
    use crate::network::LayerSpec;

    // ===================
    // Strategies
    // ===================

    fn layer_strategy() -> impl Strategy<Value = LayerSpec> {
        (1usize..8, any::<bool>())
            .prop_map(|(node_count, show_bias)| LayerSpec::new(node_count, "f", show_bias))
    }

    fn network_strategy() -> impl Strategy<Value = NetworkSpec> {
        (1usize..6, prop::collection::vec(layer_strategy(), 1..5))
            .prop_map(|(inputs, layers)| NetworkSpec::new(inputs, layers))
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Node bodies, edges and bias parts match the layer sizes.
    fn check_shape_counts(network: &NetworkSpec) -> Result<(), TestCaseError> {
        let scene = build_scene(network, &Style::default());

        let nodes: usize = network.layers().iter().map(LayerSpec::node_count).sum();
        let biased: usize = network
            .layers()
            .iter()
            .filter(|layer| layer.show_bias())
            .map(LayerSpec::node_count)
            .sum();

        prop_assert_eq!(scene.shapes_with_role(ShapeRole::NodeBody).count(), nodes);
        prop_assert_eq!(
            scene.shapes_with_role(ShapeRole::Connection).count(),
            network.connection_count()
        );
        prop_assert_eq!(scene.shapes_with_role(ShapeRole::BiasConnection).count(), biased);
        prop_assert_eq!(scene.shapes_with_role(ShapeRole::BiasStub).count(), biased);
        prop_assert_eq!(
            scene.shapes_with_role(ShapeRole::InputStub).count(),
            network.input_dimension()
        );
        Ok(())
    }

    /// Every node body of layer `idx` is centred at `(idx + 1) * spacing`.
    fn check_uniform_pitch(network: &NetworkSpec) -> Result<(), TestCaseError> {
        let style = Style::default();
        let scene = build_scene(network, &style);
        let half_width = style.node_size().half_width();

        // The outline starts at the top-right corner
        let mut bodies = scene.shapes_with_role(ShapeRole::NodeBody);
        for (index, layer) in network.layers().iter().enumerate() {
            let expected = layer_x(index, &style);
            for _ in 0..layer.node_count() {
                let body = bodies.next().ok_or_else(|| TestCaseError::fail("missing body"))?;
                let corner = body.points()[0];
                prop_assert!(approx_eq!(f32, corner.x() - half_width, expected, epsilon = 1e-4));
            }
        }
        Ok(())
    }

    /// Every arrowed edge ends on the left arc of a node.
    fn check_edges_end_on_outline(network: &NetworkSpec) -> Result<(), TestCaseError> {
        let style = Style::default();
        let scene = build_scene(network, &style);
        let size = style.node_size();

        for shape in scene.shapes().iter().filter(|s| s.markers().has_end_arrow()) {
            let end = shape.end().ok_or_else(|| TestCaseError::fail("empty edge"))?;

            let index = ((end.x() / style.layer_spacing()).round() as usize).saturating_sub(1);
            let layer = &network.layers()[index];
            let center_x = layer_x(index, &style);

            let on_outline = (0..layer.node_count()).any(|i| {
                let dx = (end.x() - center_x) / size.half_width();
                let dy = (end.y() - node_y(i, layer.node_count())) / size.half_height();
                approx_eq!(f32, dx * dx + dy * dy, 1.0, epsilon = 1e-3)
            });
            prop_assert!(on_outline, "edge end {:?} is not on a node outline", end);
            prop_assert!(end.x() <= center_x);
        }
        Ok(())
    }

    /// Building twice yields the same scene.
    fn check_idempotent(network: &NetworkSpec) -> Result<(), TestCaseError> {
        let style = Style::default();
        prop_assert_eq!(build_scene(network, &style), build_scene(network, &style));
        Ok(())
    }

    /// Axis ranges follow the layer count and the widest layer.
    fn check_ranges(network: &NetworkSpec) -> Result<(), TestCaseError> {
        let style = Style::default();
        let scene = build_scene(network, &style);
        let n = network.layers().len() as f32;
        let widest = network.max_node_count() as f32;

        prop_assert!(approx_eq!(
            f32,
            scene.x_range().max(),
            n * 3.5 * (1.0 + 1.0 / (2.0 * n)),
            epsilon = 1e-4
        ));
        prop_assert_eq!(scene.y_range().min(), -widest / 2.0);
        prop_assert_eq!(scene.y_range().max(), widest / 2.0 + 1.0);
        Ok(())
    }

    proptest! {
        #[test]
        fn shape_counts(network in network_strategy()) {
            check_shape_counts(&network)?;
        }

        #[test]
        fn uniform_pitch(network in network_strategy()) {
            check_uniform_pitch(&network)?;
        }

        #[test]
        fn edges_end_on_outline(network in network_strategy()) {
            check_edges_end_on_outline(&network)?;
        }

        #[test]
        fn idempotent(network in network_strategy()) {
            check_idempotent(&network)?;
        }

        #[test]
        fn ranges(network in network_strategy()) {
            check_ranges(&network)?;
        }
    }
}
