//! JSON export of the raw scene, for consumers that do their own drawing.

use log::info;

use good_core::scene::Scene;

use super::{Error, Exporter};

/// Pretty-prints scenes as JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter;

impl Exporter for JsonExporter {
    fn export(&self, scene: &Scene) -> Result<String, Error> {
        info!("Exporting scene to JSON");
        to_json(scene)
    }
}

/// Serializes `scene` with all coordinates in layout units.
///
/// # Errors
///
/// Returns [`Error::Json`] if serialization fails.
pub fn to_json(scene: &Scene) -> Result<String, Error> {
    Ok(serde_json::to_string_pretty(scene)?)
}
