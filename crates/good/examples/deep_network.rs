//! Renders a six-layer network to `deep_network.svg`.
//!
//! Run with `cargo run -p good --example deep_network`.

use std::{error::Error, fs};

use good::{
    DiagramBuilder,
    network::{LayerSpec, NetworkSpec, RELU, SIGMA},
};

fn main() -> Result<(), Box<dyn Error>> {
    let count_inputs = 2;

    let layers = vec![
        LayerSpec::new(6, RELU, true),
        LayerSpec::new(10, RELU, true),
        LayerSpec::new(7, RELU, true),
        LayerSpec::new(5, RELU, true),
        LayerSpec::new(9, RELU, true),
        LayerSpec::new(1, SIGMA, true),
    ];
    let network = NetworkSpec::new(count_inputs, layers);

    let svg = DiagramBuilder::default().render_svg(&network)?;
    fs::write("deep_network.svg", svg)?;

    println!(
        "Wrote deep_network.svg ({} connections)",
        network.connection_count()
    );
    Ok(())
}
