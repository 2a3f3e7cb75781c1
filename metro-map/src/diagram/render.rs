//! Graphviz invocation and viewer handoff.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use super::dot::dot_source;
use super::error::RenderError;
use crate::network::StationMap;

/// Render the station graph to `<base_name>.png` via Graphviz.
///
/// Writes the DOT source to `<base_name>.gv`, then runs
/// `dot -Tpng <base_name>.gv -o <base_name>.png`. Returns the path of
/// the rendered image.
pub fn render(stations: &StationMap, base_name: &str) -> Result<PathBuf, RenderError> {
    let dot_path = PathBuf::from(format!("{base_name}.gv"));
    let png_path = PathBuf::from(format!("{base_name}.png"));

    let source = dot_source(stations);
    std::fs::write(&dot_path, source).map_err(|e| RenderError::WriteDot {
        path: dot_path.clone(),
        source: e,
    })?;
    debug!("wrote DOT source to {}", dot_path.display());

    let output = Command::new("dot")
        .arg("-Tpng")
        .arg(&dot_path)
        .arg("-o")
        .arg(&png_path)
        .output()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                RenderError::DotNotFound
            } else {
                RenderError::Spawn(e)
            }
        })?;

    if !output.status.success() {
        return Err(RenderError::DotFailed {
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    Ok(png_path)
}

/// Open the rendered image in the platform's default viewer.
///
/// The viewer is spawned and not waited on.
pub fn open_preview(path: &Path) -> std::io::Result<()> {
    #[cfg(target_os = "macos")]
    let opener = "open";
    #[cfg(target_os = "windows")]
    let opener = "explorer";
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let opener = "xdg-open";

    Command::new(opener).arg(path).spawn().map(|_| ())
}
