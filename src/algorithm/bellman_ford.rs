use num_traits::Float;
use std::collections::HashMap;
use std::fmt::Debug;

use crate::algorithm::ShortestPathResult;
use crate::graph::{NodeId, UndirectedGraph};
use crate::{Error, Result};

/// Bellman-Ford single-source shortest paths with negative-cycle detection.
///
/// Relaxes every adjacency entry in |V|-1 full passes (no worklist), which
/// is necessary and sufficient on graphs without a negative cycle reachable
/// from the source. One extra pass afterwards acts as the detector: any
/// remaining strict improvement proves such a cycle, and the whole result is
/// replaced by [`Error::NegativeCycleDetected`] rather than returning
/// partial distances.
///
/// Note that because every input edge is traversable in both directions, any
/// reachable negative-weight edge already forms a negative cycle.
pub fn run<W>(graph: &UndirectedGraph<W>, source: &str) -> Result<ShortestPathResult<W>>
where
    W: Float + Debug + Copy,
{
    let mut distances: HashMap<NodeId, Option<W>> =
        graph.nodes().map(|node| (node.clone(), None)).collect();
    let mut predecessors: HashMap<NodeId, NodeId> = HashMap::new();

    distances.insert(source.to_string(), Some(W::zero()));

    let passes = graph.node_count().saturating_sub(1);
    for _ in 0..passes {
        relax_pass(graph, &mut distances, &mut predecessors);
    }

    // Detection pass: a further improvement can only come from a
    // source-reachable negative cycle.
    if relax_pass(graph, &mut distances, &mut predecessors) {
        return Err(Error::NegativeCycleDetected);
    }

    Ok(ShortestPathResult {
        source: source.to_string(),
        distances,
        predecessors,
    })
}

/// Relaxes every adjacency entry once, in deterministic graph order.
/// Returns whether any distance strictly improved.
fn relax_pass<W>(
    graph: &UndirectedGraph<W>,
    distances: &mut HashMap<NodeId, Option<W>>,
    predecessors: &mut HashMap<NodeId, NodeId>,
) -> bool
where
    W: Float + Debug + Copy,
{
    let mut improved = false;

    for u in graph.nodes() {
        let dist_u = match distances.get(u) {
            Some(Some(d)) => *d,
            _ => continue,
        };

        for (v, weight) in graph.neighbors(u) {
            let candidate = dist_u + *weight;
            let improves = match distances.get(v) {
                Some(Some(current)) => candidate < *current,
                _ => true,
            };

            if improves {
                distances.insert(v.clone(), Some(candidate));
                predecessors.insert(v.clone(), u.clone());
                improved = true;
            }
        }
    }

    improved
}
