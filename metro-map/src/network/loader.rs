//! Network file loading and graph construction.

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::debug;

use super::error::LoadError;
use super::station::{Neighbor, Station, StationMap};

/// One entry in a station's `edge` array.
#[derive(Debug, Clone, Deserialize)]
pub struct EdgeRecord {
    /// Target station name.
    pub station: String,
    /// Distance to the target, in metres.
    pub distance: f64,
    /// Average speed over the segment.
    pub speed: f64,
    /// Travel time, in seconds.
    pub time: f64,
    /// Lines attached to this edge.
    pub line: Vec<String>,
}

/// One top-level station entry in the input document.
#[derive(Debug, Clone, Deserialize)]
pub struct StationRecord {
    /// Lines the station belongs to.
    pub lines: Vec<String>,
    /// Outgoing edges.
    pub edge: Vec<EdgeRecord>,
}

/// Load a network description file and build the station graph.
///
/// Fails with one of the three [`LoadError`] conditions; the caller is
/// expected to report the error and carry on with an empty map.
pub fn load_network(path: impl AsRef<Path>) -> Result<StationMap, LoadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            LoadError::Missing {
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Io(e)
        }
    })?;
    let records = parse_network(&text)?;
    Ok(build_network(records))
}

/// Parse the JSON document into raw station records, preserving the
/// document's key order.
pub fn parse_network(text: &str) -> Result<IndexMap<String, StationRecord>, LoadError> {
    Ok(serde_json::from_str(text)?)
}

/// Build the station graph from parsed records.
///
/// A station referenced only as an edge target is inserted as a stub
/// carrying that edge's `line` value as its lines; a later top-level
/// record for the same name overwrites the stub entry. Edges hold keys
/// into the map, so edges attached before the overwrite resolve to the
/// final entry.
pub fn build_network(records: IndexMap<String, StationRecord>) -> StationMap {
    let mut stations = StationMap::new();

    for (name, record) in records {
        let mut station = Station::new(name.clone(), record.lines);

        for edge in record.edge {
            if !stations.contains_key(&edge.station) {
                stations.insert(
                    edge.station.clone(),
                    Station::new(edge.station.clone(), edge.line.clone()),
                );
            }
            station.add_neighbor(Neighbor {
                station: edge.station,
                distance: edge.distance,
                speed: edge.speed,
                time: edge.time,
                lines: edge.line,
            });
        }

        stations.insert(name, station);
    }

    debug!(
        stations = stations.len(),
        edges = stations.values().map(|s| s.neighbors.len()).sum::<usize>(),
        "built station graph"
    );

    stations
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn station_name() -> impl Strategy<Value = String> {
        prop::sample::select(vec!["A", "B", "C", "D", "E", "F"]).prop_map(str::to_string)
    }

    fn line_set() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(
            prop::sample::select(vec!["1", "2", "3"]).prop_map(str::to_string),
            0..3,
        )
    }

    fn edge_record() -> impl Strategy<Value = EdgeRecord> {
        (
            station_name(),
            0.0..5000.0f64,
            1.0..30.0f64,
            0.0..600.0f64,
            line_set(),
        )
            .prop_map(|(station, distance, speed, time, line)| EdgeRecord {
                station,
                distance,
                speed,
                time,
                line,
            })
    }

    fn records() -> impl Strategy<Value = IndexMap<String, StationRecord>> {
        prop::collection::vec(
            (
                station_name(),
                line_set(),
                prop::collection::vec(edge_record(), 0..4),
            ),
            0..6,
        )
        .prop_map(|entries| {
            let mut map = IndexMap::new();
            for (name, lines, edge) in entries {
                map.insert(name, StationRecord { lines, edge });
            }
            map
        })
    }

    proptest! {
        /// The built map's keys are exactly the top-level names plus
        /// every edge target referenced anywhere.
        #[test]
        fn key_set_is_union_of_names_and_targets(records in records()) {
            use std::collections::HashSet;

            let expected: HashSet<String> = records
                .keys()
                .cloned()
                .chain(records.values().flat_map(|r| {
                    r.edge.iter().map(|e| e.station.clone())
                }))
                .collect();

            let map = build_network(records);
            let actual: HashSet<String> = map.keys().cloned().collect();
            prop_assert_eq!(actual, expected);
        }

        /// Every top-level record keeps exactly as many outgoing edges
        /// as its input `edge` array, in order.
        #[test]
        fn outgoing_edge_counts_match_input(records in records()) {
            let map = build_network(records.clone());
            for (name, record) in &records {
                let station = &map[name.as_str()];
                prop_assert_eq!(station.neighbors.len(), record.edge.len());
                for (neighbor, edge) in station.neighbors.iter().zip(&record.edge) {
                    prop_assert_eq!(&neighbor.station, &edge.station);
                }
            }
        }

        /// Stations never referenced as top-level records end up with
        /// no outgoing edges.
        #[test]
        fn stubs_have_no_neighbors(records in records()) {
            let map = build_network(records.clone());
            for (name, station) in &map {
                if !records.contains_key(name) {
                    prop_assert!(station.neighbors.is_empty());
                }
            }
        }
    }
}
