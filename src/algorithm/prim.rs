use num_traits::Float;
use ordered_float::OrderedFloat;
use std::fmt::Debug;

use crate::algorithm::PrimResult;
use crate::data_structures::MinHeap;
use crate::{Error, Result};

/// Prim's minimum spanning tree over positionally-indexed nodes.
///
/// Unlike the mapping-keyed algorithms this variant does not self-heal: an
/// edge referencing an index outside `0..node_count` is `MalformedInput`,
/// and zero nodes is `EmptyGraph`. Growth starts from index 0 and the
/// frontier holds (weight, node, parent) entries with lazy deletion, the
/// same stale-entry-skipping pattern as Dijkstra's.
///
/// Non-negative weights are assumed for correctness (not validated). On a
/// disconnected graph only the component containing index 0 is spanned;
/// this intentionally differs from Kruskal's whole-forest behavior.
pub fn run<W>(node_count: usize, edges: &[(usize, usize, W)]) -> Result<PrimResult<W>>
where
    W: Float + Debug + Copy,
{
    if node_count == 0 {
        return Err(Error::EmptyGraph);
    }

    let mut adjacency: Vec<Vec<(usize, W)>> = vec![Vec::new(); node_count];
    for &(u, v, weight) in edges {
        if u >= node_count || v >= node_count {
            return Err(Error::MalformedInput(format!(
                "edge ({u}, {v}) references a node outside 0..{node_count}"
            )));
        }
        adjacency[u].push((v, weight));
        adjacency[v].push((u, weight));
    }

    let mut visited = vec![false; node_count];
    let mut total_weight = W::zero();
    let mut accepted: Vec<(usize, usize)> = Vec::new();

    // Frontier entries are (node, parent) keyed by connecting edge weight;
    // the start node enters at weight 0 with no parent.
    let mut frontier: MinHeap<(usize, Option<usize>), OrderedFloat<W>> = MinHeap::new();
    frontier.push((0, None), OrderedFloat(W::zero()));

    while let Some(((node, parent), OrderedFloat(weight))) = frontier.pop() {
        if visited[node] {
            continue;
        }
        visited[node] = true;
        total_weight = total_weight + weight;

        if let Some(parent) = parent {
            accepted.push((parent, node));
        }

        for &(neighbor, edge_weight) in &adjacency[node] {
            if !visited[neighbor] {
                frontier.push((neighbor, Some(node)), OrderedFloat(edge_weight));
            }
        }
    }

    Ok(PrimResult {
        total_weight,
        edges: accepted,
    })
}
