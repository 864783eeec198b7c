use num_traits::Float;
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;

use crate::algorithm::AlgorithmKind;
use crate::graph::{Edge, NodeId};

/// Distances and shortest-path-tree predecessors from a single source.
///
/// Unreachable nodes are present in `distances` with a `None` value; the
/// source and unreached nodes have no `predecessors` entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathResult<W>
where
    W: Float + Debug + Copy,
{
    pub source: NodeId,
    pub distances: HashMap<NodeId, Option<W>>,
    pub predecessors: HashMap<NodeId, NodeId>,
}

impl<W> ShortestPathResult<W>
where
    W: Float + Debug + Copy,
{
    /// Walks the predecessor map back from `target` to the source and
    /// returns the path in source-to-target order, or `None` when the
    /// target was never reached.
    pub fn path_to(&self, target: &str) -> Option<Vec<NodeId>> {
        match self.distances.get(target) {
            Some(Some(_)) => {}
            _ => return None,
        }

        let mut path = vec![target.to_string()];
        let mut seen: HashSet<NodeId> = HashSet::new();
        let mut current = target.to_string();

        while current != self.source {
            if !seen.insert(current.clone()) {
                // A predecessor loop means the map is inconsistent; give up
                // rather than spin.
                return None;
            }
            match self.predecessors.get(&current) {
                Some(previous) => {
                    path.push(previous.clone());
                    current = previous.clone();
                }
                None => return None,
            }
        }

        path.reverse();
        Some(path)
    }
}

/// Dense all-pairs distances with next-hop pointers for reconstruction.
/// Rows and columns are labeled by `nodes`, in graph insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct AllPairsResult<W>
where
    W: Float + Debug + Copy,
{
    pub nodes: Vec<NodeId>,
    pub distances: Vec<Vec<Option<W>>>,
    pub next_hop: Vec<Vec<Option<usize>>>,
}

impl<W> AllPairsResult<W>
where
    W: Float + Debug + Copy,
{
    pub fn index_of(&self, node: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n == node)
    }

    /// Reconstructs the i -> j path as a sequence of node indices by
    /// following next-hop pointers. `None` when j is unreachable from i.
    pub fn path(&self, i: usize, j: usize) -> Option<Vec<usize>> {
        if i >= self.nodes.len() || j >= self.nodes.len() {
            return None;
        }
        if i == j {
            return Some(vec![i]);
        }
        self.next_hop[i][j]?;

        let mut path = vec![i];
        let mut current = i;
        while current != j {
            current = self.next_hop[current][j]?;
            path.push(current);
            if path.len() > self.nodes.len() {
                return None;
            }
        }
        Some(path)
    }
}

/// Minimum spanning tree (or forest, for disconnected input) built by
/// Kruskal: accepted edges in acceptance order plus their weight sum.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTreeResult<W>
where
    W: Float + Debug + Copy,
{
    pub total_weight: W,
    pub edges: Vec<Edge<W>>,
}

/// Minimum spanning tree built by Prim over positionally-indexed nodes:
/// accepted (parent, node) index pairs plus their weight sum. Only the
/// component reachable from index 0 is covered.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimResult<W>
where
    W: Float + Debug + Copy,
{
    pub total_weight: W,
    pub edges: Vec<(usize, usize)>,
}

/// The outcome of one algorithm invocation, tagged by algorithm.
///
/// Constructed once per invocation and handed back verbatim; nothing is
/// shared or retained between invocations.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultRecord<W>
where
    W: Float + Debug + Copy,
{
    Dijkstra(ShortestPathResult<W>),
    BellmanFord(ShortestPathResult<W>),
    FloydWarshall(AllPairsResult<W>),
    Kruskal(SpanningTreeResult<W>),
    Prim(PrimResult<W>),
}

impl<W> ResultRecord<W>
where
    W: Float + Debug + Copy,
{
    /// Which algorithm produced this record.
    pub fn algorithm(&self) -> AlgorithmKind {
        match self {
            ResultRecord::Dijkstra(_) => AlgorithmKind::Dijkstra,
            ResultRecord::BellmanFord(_) => AlgorithmKind::BellmanFord,
            ResultRecord::FloydWarshall(_) => AlgorithmKind::FloydWarshall,
            ResultRecord::Kruskal(_) => AlgorithmKind::Kruskal,
            ResultRecord::Prim(_) => AlgorithmKind::Prim,
        }
    }
}
