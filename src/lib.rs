//! Graphkit - a small suite of classic graph algorithms.
//!
//! Given a weighted graph (nodes plus weighted edges, treated as undirected),
//! this library computes single-source shortest paths (Dijkstra, Bellman-Ford),
//! all-pairs shortest paths (Floyd-Warshall), or a minimum spanning tree
//! (Kruskal, Prim) and returns the result as a structured value.
//!
//! All five algorithms consume the same normalized graph representation, share
//! one error taxonomy and produce a [`ResultRecord`] tagged with the algorithm
//! that computed it, so callers can dispatch on heterogeneous results
//! uniformly. Every computation is a pure function of its input: no state
//! survives an invocation.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod web;

pub use algorithm::{compute, AlgorithmKind, ResultRecord};
/// Re-export main types for convenient use
pub use graph::{Edge, NodeId, UndirectedGraph};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Structurally invalid request: missing required field or an
    /// out-of-range node reference.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// Zero nodes supplied where the computation requires at least one.
    #[error("graph has no nodes")]
    EmptyGraph,

    /// Bellman-Ford only: a negative-weight cycle reachable from the source.
    /// This is an algorithmic outcome, not an input error.
    #[error("graph contains a negative weight cycle")]
    NegativeCycleDetected,
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
