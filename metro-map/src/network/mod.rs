//! Metro network model and loader.
//!
//! Provides the in-memory station graph and the JSON loader that
//! builds it. Stations are kept in an order-preserving map keyed by
//! name; edges refer to their target station by that key rather than
//! by direct reference, so the map is the single source of truth.

mod error;
mod loader;
mod station;

pub use error::LoadError;
pub use loader::{EdgeRecord, StationRecord, build_network, load_network, parse_network};
pub use station::{Neighbor, Station, StationMap};
