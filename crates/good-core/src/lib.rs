//! GOOD Core Types and Definitions
//!
//! This crate provides the renderer-agnostic building blocks for GOOD
//! ("Graph Of Ordered Dependencies") neural network diagrams. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Points, sizes and axis ranges ([`geometry`] module)
//! - **Draw**: Stroke and text definitions, the node outline, shapes and
//!   labels ([`draw`] module)
//! - **Scene**: The assembled output of a diagram build ([`scene::Scene`])

pub mod color;
pub mod draw;
pub mod geometry;
pub mod scene;
