use num_traits::Float;
use ordered_float::OrderedFloat;
use std::fmt::Debug;

use crate::algorithm::SpanningTreeResult;
use crate::data_structures::DisjointSet;
use crate::graph::{Edge, NodeId};

/// Kruskal's minimum spanning tree over a raw edge list.
///
/// Edges are considered in ascending weight order with ties broken by input
/// position (stable sort), so the accepted edge sequence is deterministic.
/// An edge whose endpoints already share a component is discarded; the
/// disjoint-set forest doing that bookkeeping lives only for this call.
///
/// Disconnected input yields a minimum spanning *forest* rather than an
/// error; callers can detect it by comparing the accepted edge count with
/// node count - 1. Endpoints missing from `nodes` join lazily as singletons.
pub fn run<W>(nodes: &[NodeId], edges: &[Edge<W>]) -> SpanningTreeResult<W>
where
    W: Float + Debug + Copy,
{
    let mut forest = DisjointSet::with_nodes(nodes);

    let mut ordered: Vec<&Edge<W>> = edges.iter().collect();
    ordered.sort_by_key(|edge| OrderedFloat(edge.weight));

    let mut accepted: Vec<Edge<W>> = Vec::new();
    let mut total_weight = W::zero();

    for edge in ordered {
        if forest.union(&edge.from, &edge.to) {
            total_weight = total_weight + edge.weight;
            accepted.push(edge.clone());
        }
    }

    SpanningTreeResult {
        total_weight,
        edges: accepted,
    }
}
