//! Diagram rendering error types.

use std::path::PathBuf;
use std::process::ExitStatus;

/// Errors that can occur when rendering the diagram.
///
/// Unlike load errors, these propagate out of the entry point.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Writing the DOT source file failed
    #[error("failed to write {path}: {source}")]
    WriteDot {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The `dot` executable is not on PATH
    #[error("`dot` executable not found; is Graphviz installed?")]
    DotNotFound,

    /// Spawning `dot` failed for a reason other than absence
    #[error("failed to run `dot`: {0}")]
    Spawn(std::io::Error),

    /// `dot` ran but reported failure
    #[error("`dot` exited with {status}: {stderr}")]
    DotFailed { status: ExitStatus, stderr: String },
}
