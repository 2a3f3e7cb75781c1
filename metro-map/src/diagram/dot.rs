//! DOT source emission.

use std::fmt::Write;

use crate::network::StationMap;

/// Font applied to all nodes. The input data is Chinese, so the
/// default Graphviz font would render boxes.
const NODE_FONT: &str = "Microsoft YaHei";

/// Emit DOT source for the station graph.
///
/// One node per station, labeled with its name and each of its lines;
/// one directed edge per (station, neighbor) pair in input order,
/// labeled with distance and time. Transfer edges (source and target
/// share no line) are red, same-line edges black. Parallel edges are
/// kept; a neighbor key absent from the map is treated as having no
/// lines, so such an edge comes out red.
pub fn dot_source(stations: &StationMap) -> String {
    let mut out = String::new();
    out.push_str("digraph metro_map {\n");
    let _ = writeln!(
        out,
        "    node [fontname=\"{NODE_FONT}\", shape=plaintext];"
    );

    for station in stations.values() {
        let mut label = escape_html(&station.name);
        for line in &station.lines {
            label.push_str("<BR/>");
            label.push_str(&escape_html(line));
        }
        let _ = writeln!(out, "    \"{}\" [label=<{label}>];", escape_id(&station.name));
    }

    for station in stations.values() {
        for neighbor in &station.neighbors {
            let transfer = match stations.get(neighbor.station.as_str()) {
                Some(target) => !target.shares_line(&station.lines),
                None => true,
            };
            let color = if transfer { "red" } else { "black" };
            let _ = writeln!(
                out,
                "    \"{}\" -> \"{}\" [label=<{}m<BR/>{}s>, color={color}];",
                escape_id(&station.name),
                escape_id(&neighbor.station),
                neighbor.distance,
                neighbor.time,
            );
        }
    }

    out.push_str("}\n");
    out
}

/// Escape a string for use inside an HTML-like label.
fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a string for use inside a double-quoted DOT identifier.
fn escape_id(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            _ => out.push(c),
        }
    }
    out
}
