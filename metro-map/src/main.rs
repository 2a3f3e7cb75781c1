use metro_map::diagram::{self, RenderError};
use metro_map::network::{self, StationMap};
use tracing::{error, info, warn};

/// Input network description, read from the working directory.
const INPUT_FILE: &str = "stations.json";

/// Base name for the rendered outputs (`metro_map.gv`, `metro_map.png`).
const OUTPUT_BASE: &str = "metro_map";

fn main() -> Result<(), RenderError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // A missing or unreadable input is reported but not fatal: an
    // empty diagram is still rendered and the process exits cleanly.
    let stations = match network::load_network(INPUT_FILE) {
        Ok(stations) => stations,
        Err(e) => {
            error!("could not load {INPUT_FILE}: {e}");
            StationMap::new()
        }
    };
    info!(stations = stations.len(), "loaded network");

    let image = diagram::render(&stations, OUTPUT_BASE)?;
    info!("rendered {}", image.display());

    if let Err(e) = diagram::open_preview(&image) {
        warn!("could not open image viewer: {e}");
    }

    Ok(())
}
