use num_traits::Float;
use std::collections::HashMap;
use std::fmt::Debug;

/// Opaque node identifier. Callers may use names or stringified numbers;
/// the graph does not interpret them.
pub type NodeId = String;

/// A weighted edge between two nodes. The pair is unordered: inserting an
/// edge makes it traversable in both directions.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<W> {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: W,
}

impl<W> Edge<W> {
    pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>, weight: W) -> Self {
        Edge {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }
}

/// A weighted undirected graph stored as symmetric adjacency lists.
///
/// Invariant: for every edge (a, b, w) inserted, both a -> (b, w) and
/// b -> (a, w) adjacency entries exist. A node with no incident edges still
/// appears with an empty adjacency list, so isolated nodes show up in
/// results. Parallel edges are kept as-is; the algorithms tolerate them by
/// relaxing each entry.
#[derive(Debug, Clone)]
pub struct UndirectedGraph<W>
where
    W: Float + Debug + Copy,
{
    /// Node identifiers in first-seen order. Iteration order of every
    /// algorithm is derived from this, which keeps results deterministic.
    order: Vec<NodeId>,

    /// Adjacency entries per node: node -> [(neighbor, weight)]
    adjacency: HashMap<NodeId, Vec<(NodeId, W)>>,
}

impl<W> UndirectedGraph<W>
where
    W: Float + Debug + Copy,
{
    /// Builds a graph from a node list and an edge list.
    ///
    /// Duplicate node identifiers collapse to a single node. Edge endpoints
    /// that were never declared in `nodes` are created lazily, so a sloppy
    /// edge list self-heals rather than failing.
    pub fn build(nodes: &[NodeId], edges: &[Edge<W>]) -> Self {
        let mut graph = UndirectedGraph {
            order: Vec::with_capacity(nodes.len()),
            adjacency: HashMap::with_capacity(nodes.len()),
        };

        for node in nodes {
            graph.ensure_node(node);
        }
        for edge in edges {
            graph.add_edge(edge);
        }

        graph
    }

    fn ensure_node(&mut self, id: &str) {
        if !self.adjacency.contains_key(id) {
            self.order.push(id.to_string());
            self.adjacency.insert(id.to_string(), Vec::new());
        }
    }

    fn add_edge(&mut self, edge: &Edge<W>) {
        self.ensure_node(&edge.from);
        self.ensure_node(&edge.to);

        // Both directions, so the edge reads as undirected.
        self.adjacency
            .entry(edge.from.clone())
            .or_default()
            .push((edge.to.clone(), edge.weight));
        self.adjacency
            .entry(edge.to.clone())
            .or_default()
            .push((edge.from.clone(), edge.weight));
    }

    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    /// Number of undirected edges (each stored twice internally).
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|entries| entries.len()).sum::<usize>() / 2
    }

    /// Nodes in first-seen order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> {
        self.order.iter()
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Adjacency entries of a node, in insertion order. Unknown nodes yield
    /// an empty iterator.
    pub fn neighbors(&self, id: &str) -> impl Iterator<Item = &(NodeId, W)> {
        self.adjacency.get(id).into_iter().flatten()
    }
}
