//! Export module for visualizing genealogies in external tools.
//!
//! Supports two formats, both rendered to a `String`:
//! - **DOT**: Graphviz visualization
//! - **JSON**: D3.js and web-based tools

pub mod dot;
pub mod json;

pub use dot::{export_dot, export_dot_styled, DotOptions};
pub use json::export_json;
