//! Metro network diagram generator.
//!
//! Reads a JSON description of a metro network's stations and their
//! adjacency distances/speeds/times, builds an in-memory graph, and
//! renders it as a directed Graphviz diagram with transfer edges
//! (edges between stations sharing no line) drawn in red.

pub mod diagram;
pub mod network;
