//! Diagram rendering.
//!
//! Emits Graphviz DOT source for a built station graph, shells out to
//! the `dot` executable to rasterize it, and opens the result in the
//! platform image viewer. Layout is owned entirely by Graphviz.

mod dot;
mod error;
mod render;

pub use dot::dot_source;
pub use error::RenderError;
pub use render::{open_preview, render};
