//! Visual definitions for GOOD diagram elements.
//!
//! The types here describe *what* gets drawn, in layout units, without
//! committing to any output format. The one exception is [`LayeredOutput`],
//! which z-orders already rendered SVG nodes for the SVG exporter.

mod layer;
pub mod markup;
mod node;
mod shape;
mod stroke;
mod text;

pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use node::NodeOutline;
pub use shape::{EndMarkers, Shape, ShapeKind, ShapeRole};
pub use stroke::StrokeDefinition;
pub use text::{HorizontalAnchor, Label, LabelRole, TextDefinition, VerticalAnchor};
