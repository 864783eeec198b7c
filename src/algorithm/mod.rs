pub mod bellman_ford;
pub mod dijkstra;
pub mod floyd_warshall;
pub mod kruskal;
pub mod prim;
pub mod results;

pub use results::{
    AllPairsResult, PrimResult, ResultRecord, ShortestPathResult, SpanningTreeResult,
};

use num_traits::Float;
use std::fmt::Debug;

use crate::graph::{Edge, NodeId, UndirectedGraph};
use crate::{Error, Result};

/// The five supported computations. Used both to dispatch uniformly and as
/// the `algorithm` tag on every boundary response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmKind {
    Dijkstra,
    BellmanFord,
    FloydWarshall,
    Kruskal,
    Prim,
}

impl AlgorithmKind {
    /// Wire name of the algorithm, as it appears in response payloads.
    pub fn name(&self) -> &'static str {
        match self {
            AlgorithmKind::Dijkstra => "Dijkstra",
            AlgorithmKind::BellmanFord => "Bellman-Ford",
            AlgorithmKind::FloydWarshall => "Floyd-Warshall",
            AlgorithmKind::Kruskal => "Kruskal",
            AlgorithmKind::Prim => "Prims",
        }
    }

    /// Whether this computation needs a source node.
    pub fn needs_source(&self) -> bool {
        matches!(self, AlgorithmKind::Dijkstra | AlgorithmKind::BellmanFord)
    }
}

impl std::fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Runs one algorithm over raw graph data and returns its tagged result.
///
/// Input normalization happens here, per algorithm: the mapping-keyed four
/// get an adjacency graph built for them (Kruskal consumes the edge list
/// directly), while Prim's edges are reinterpreted as positional indices
/// into the node list. `source` is required for Dijkstra and Bellman-Ford
/// and ignored by the rest.
pub fn compute<W>(
    kind: AlgorithmKind,
    nodes: &[NodeId],
    edges: &[Edge<W>],
    source: Option<&str>,
) -> Result<ResultRecord<W>>
where
    W: Float + Debug + Copy,
{
    match kind {
        AlgorithmKind::Dijkstra => {
            let source = require_source(source)?;
            let graph = UndirectedGraph::build(nodes, edges);
            Ok(ResultRecord::Dijkstra(dijkstra::run(&graph, source)))
        }
        AlgorithmKind::BellmanFord => {
            let source = require_source(source)?;
            let graph = UndirectedGraph::build(nodes, edges);
            bellman_ford::run(&graph, source).map(ResultRecord::BellmanFord)
        }
        AlgorithmKind::FloydWarshall => {
            let graph = UndirectedGraph::build(nodes, edges);
            Ok(ResultRecord::FloydWarshall(floyd_warshall::run(&graph)))
        }
        AlgorithmKind::Kruskal => Ok(ResultRecord::Kruskal(kruskal::run(nodes, edges))),
        AlgorithmKind::Prim => {
            let indexed = positional_edges(edges)?;
            prim::run(nodes.len(), &indexed).map(ResultRecord::Prim)
        }
    }
}

fn require_source(source: Option<&str>) -> Result<&str> {
    source.ok_or_else(|| Error::MalformedInput("missing required field: source".to_string()))
}

/// Reinterprets edge endpoints as positional node indices for Prim's
/// variant. Identifiers that are not plain indices are malformed here, even
/// though the mapping-keyed algorithms would accept them.
fn positional_edges<W>(edges: &[Edge<W>]) -> Result<Vec<(usize, usize, W)>>
where
    W: Float + Debug + Copy,
{
    edges
        .iter()
        .map(|edge| {
            let u = parse_index(&edge.from)?;
            let v = parse_index(&edge.to)?;
            Ok((u, v, edge.weight))
        })
        .collect()
}

fn parse_index(id: &str) -> Result<usize> {
    id.parse::<usize>().map_err(|_| {
        Error::MalformedInput(format!("node reference '{id}' is not a positional index"))
    })
}
