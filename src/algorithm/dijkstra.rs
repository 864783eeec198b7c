use num_traits::Float;
use ordered_float::OrderedFloat;
use std::collections::HashMap;
use std::fmt::Debug;

use crate::algorithm::ShortestPathResult;
use crate::data_structures::MinHeap;
use crate::graph::{NodeId, UndirectedGraph};

/// Dijkstra's single-source shortest paths.
///
/// Only correct for non-negative edge weights; this is a documented caveat
/// of the contract, not something the algorithm validates. With a negative
/// weight present the returned distances may be non-minimal.
///
/// The frontier is a lazy-deletion heap: a relaxation pushes a fresh entry
/// instead of decreasing a key, and stale entries are skipped when popped.
/// A source unknown to the graph is treated as an isolated node (distance 0,
/// nothing else reachable). Disconnected nodes stay at `None`.
pub fn run<W>(graph: &UndirectedGraph<W>, source: &str) -> ShortestPathResult<W>
where
    W: Float + Debug + Copy,
{
    let mut distances: HashMap<NodeId, Option<W>> =
        graph.nodes().map(|node| (node.clone(), None)).collect();
    let mut predecessors: HashMap<NodeId, NodeId> = HashMap::new();

    distances.insert(source.to_string(), Some(W::zero()));

    let mut frontier: MinHeap<NodeId, OrderedFloat<W>> = MinHeap::new();
    frontier.push(source.to_string(), OrderedFloat(W::zero()));

    while let Some((node, OrderedFloat(dist))) = frontier.pop() {
        // Stale entry from an earlier relaxation; the node was already
        // settled at a shorter distance.
        if let Some(Some(settled)) = distances.get(&node) {
            if *settled < dist {
                continue;
            }
        }

        for (neighbor, weight) in graph.neighbors(&node) {
            let candidate = dist + *weight;
            let improves = match distances.get(neighbor) {
                Some(Some(current)) => candidate < *current,
                _ => true,
            };

            if improves {
                distances.insert(neighbor.clone(), Some(candidate));
                predecessors.insert(neighbor.clone(), node.clone());
                frontier.push(neighbor.clone(), OrderedFloat(candidate));
            }
        }
    }

    ShortestPathResult {
        source: source.to_string(),
        distances,
        predecessors,
    }
}
