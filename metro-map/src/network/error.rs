//! Network loader error types.

use std::path::PathBuf;

/// Errors that can occur when loading a network description file.
///
/// All three conditions are recoverable: the caller reports them and
/// proceeds with an empty network.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The input file does not exist
    #[error("file {path} does not exist")]
    Missing { path: PathBuf },

    /// Reading the file failed for a reason other than absence
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid JSON, or does not match the expected shape
    #[error("JSON parse error: {0}")]
    Malformed(#[from] serde_json::Error),
}
