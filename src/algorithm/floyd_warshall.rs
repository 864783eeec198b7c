use num_traits::Float;
use std::collections::HashMap;
use std::fmt::Debug;

use crate::algorithm::AllPairsResult;
use crate::graph::{NodeId, UndirectedGraph};

/// Floyd-Warshall all-pairs shortest paths.
///
/// Every node gets a dense index (graph insertion order); the n x n distance
/// matrix starts at 0 on the diagonal, the direct edge weight where an edge
/// exists and `None` elsewhere, and a parallel next-hop matrix records the
/// first step of each known path for reconstruction.
///
/// Runtime is cubic in the node count by design. Beyond a few thousand nodes
/// this component is the wrong tool; prefer repeated single-source runs.
pub fn run<W>(graph: &UndirectedGraph<W>) -> AllPairsResult<W>
where
    W: Float + Debug + Copy,
{
    let nodes: Vec<NodeId> = graph.nodes().cloned().collect();
    let n = nodes.len();
    let index: HashMap<NodeId, usize> = nodes
        .iter()
        .enumerate()
        .map(|(i, node)| (node.clone(), i))
        .collect();

    let mut dist: Vec<Vec<Option<W>>> = vec![vec![None; n]; n];
    let mut next: Vec<Vec<Option<usize>>> = vec![vec![None; n]; n];

    for i in 0..n {
        dist[i][i] = Some(W::zero());
    }

    // Direct edges. Unlike the adjacency-walking algorithms, a dense matrix
    // cannot tolerate parallel edges by relaxation: a later, heavier
    // duplicate would overwrite a lighter one, so only improvements land.
    for u in graph.nodes() {
        let i = index[u.as_str()];
        for (v, weight) in graph.neighbors(u) {
            let j = index[v.as_str()];
            let improves = match dist[i][j] {
                Some(current) => *weight < current,
                None => true,
            };
            if improves {
                dist[i][j] = Some(*weight);
                next[i][j] = Some(j);
            }
        }
    }

    for k in 0..n {
        for i in 0..n {
            let dist_ik = match dist[i][k] {
                Some(d) => d,
                None => continue,
            };
            for j in 0..n {
                let dist_kj = match dist[k][j] {
                    Some(d) => d,
                    None => continue,
                };
                let through_k = dist_ik + dist_kj;
                let improves = match dist[i][j] {
                    Some(current) => through_k < current,
                    None => true,
                };
                if improves {
                    dist[i][j] = Some(through_k);
                    next[i][j] = next[i][k];
                }
            }
        }
    }

    AllPairsResult {
        nodes,
        distances: dist,
        next_hop: next,
    }
}
