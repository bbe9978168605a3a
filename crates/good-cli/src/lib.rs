//! CLI logic for the GOOD diagram tool.
//!
//! Reads a TOML network description, renders it and writes the result.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Format};

use std::fs;

use log::info;

use good::{DiagramBuilder, GoodError};

/// Run the GOOD CLI application
///
/// This function processes the input file through the GOOD pipeline
/// and writes the rendered document to the output file.
///
/// # Errors
///
/// Returns `GoodError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors
/// - Invalid networks
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), GoodError> {
    info!(
        input_path = args.input,
        output_path = args.output,
        format:? = args.format;
        "Processing network"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let builder = DiagramBuilder::from_config(&app_config)?;
    let network = builder.parse(&source)?;
    let document = match args.format {
        Format::Svg => builder.render_svg(&network)?,
        Format::Json => builder.render_json(&network)?,
    };

    fs::write(&args.output, document)?;

    info!(output_file = args.output; "Diagram exported successfully");

    Ok(())
}
