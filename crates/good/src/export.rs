//! Scene exporters.
//!
//! The layout produces a renderer-agnostic [`Scene`]; exporters turn it into
//! a document string. Writing that string anywhere is the caller's business.

pub mod json;
pub mod svg;

use good_core::scene::Scene;
use thiserror::Error;

/// A single output format for scenes.
pub trait Exporter {
    /// Renders `scene` to a complete document.
    fn export(&self, scene: &Scene) -> Result<String, Error>;
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Render error: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
