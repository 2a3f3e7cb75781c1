//! Station graph types.

use indexmap::IndexMap;

/// The built network: station name → station, in input document order.
///
/// This map is the arena for the whole graph. [`Neighbor`] records hold
/// keys into it, never direct references, so overwriting an entry
/// re-points every edge that targets it.
pub type StationMap = IndexMap<String, Station>;

/// A directed, attributed edge from one station to a neighbor.
///
/// Owned by the source station; refers to the target by name.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor {
    /// Key of the target station in the [`StationMap`].
    pub station: String,
    /// Distance to the neighbor, in metres. Display-only.
    pub distance: f64,
    /// Average speed over this segment. Display-only.
    pub speed: f64,
    /// Travel time to the neighbor, in seconds. Display-only.
    pub time: f64,
    /// Lines attached to this edge in the source data. May disagree
    /// with the target station's own lines; not validated.
    pub lines: Vec<String>,
}

/// A node in the metro graph, uniquely identified by name.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    /// Station name, also its key in the [`StationMap`].
    pub name: String,
    /// Lines this station belongs to, in input order.
    pub lines: Vec<String>,
    /// Outgoing edges, in input order. No merging or dedup.
    pub neighbors: Vec<Neighbor>,
}

impl Station {
    /// Create a station with no neighbors.
    pub fn new(name: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            name: name.into(),
            lines,
            neighbors: Vec::new(),
        }
    }

    /// Append a directed edge to a neighbor.
    pub fn add_neighbor(&mut self, neighbor: Neighbor) {
        self.neighbors.push(neighbor);
    }

    /// Whether this station shares at least one line with `lines`.
    ///
    /// An edge to a station sharing no line is a transfer and is
    /// rendered distinctly.
    pub fn shares_line(&self, lines: &[String]) -> bool {
        self.lines.iter().any(|l| lines.contains(l))
    }
}
