use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::graph::NodeId;

/// A node identifier as it appears on the wire: callers may send strings or
/// bare numbers. Numbers normalize to their decimal string form, which is
/// also how they come back as JSON object keys in the response maps.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NodeRef {
    Index(i64),
    Name(String),
}

impl NodeRef {
    pub fn id(&self) -> NodeId {
        match self {
            NodeRef::Index(n) => n.to_string(),
            NodeRef::Name(s) => s.clone(),
        }
    }
}

/// One edge of the request payload.
#[derive(Debug, Clone, Deserialize)]
pub struct EdgeDef {
    pub from: NodeRef,
    pub to: NodeRef,
    pub weight: f64,
}

/// Request payload shared by all five algorithm routes. `source` is required
/// for Dijkstra and Bellman-Ford and ignored by the rest; `graphName` only
/// labels the history entry.
#[derive(Debug, Clone, Deserialize)]
pub struct ComputeRequest {
    #[serde(default)]
    pub nodes: Vec<NodeRef>,
    #[serde(default)]
    pub edges: Vec<EdgeDef>,
    #[serde(default)]
    pub source: Option<NodeRef>,
    #[serde(default, rename = "graphName")]
    pub graph_name: Option<String>,
}

/// Dijkstra / Bellman-Ford success payload. Unreachable nodes appear with an
/// explicit `null` distance, never an infinite float.
#[derive(Debug, Clone, Serialize)]
pub struct ShortestPathResponse {
    pub distances: BTreeMap<NodeId, Option<f64>>,
    pub previous: BTreeMap<NodeId, NodeId>,
    pub algorithm: String,
    pub source: NodeId,
    #[serde(rename = "executionTimeMs")]
    pub execution_time_ms: f64,
}

/// Floyd-Warshall success payload: the dense matrix plus the node order
/// labeling its rows and columns.
#[derive(Debug, Clone, Serialize)]
pub struct AllPairsResponse {
    pub distance_matrix: Vec<Vec<Option<f64>>>,
    pub nodes: Vec<NodeId>,
    pub algorithm: String,
    #[serde(rename = "executionTimeMs")]
    pub execution_time_ms: f64,
}

/// Kruskal success payload: accepted edges in acceptance order.
#[derive(Debug, Clone, Serialize)]
pub struct KruskalResponse {
    #[serde(rename = "totalWeight")]
    pub total_weight: f64,
    pub edges: Vec<(NodeId, NodeId, f64)>,
    pub algorithm: String,
    #[serde(rename = "executionTimeMs")]
    pub execution_time_ms: f64,
}

/// Prim success payload: accepted (parent, node) index pairs.
#[derive(Debug, Clone, Serialize)]
pub struct PrimResponse {
    #[serde(rename = "mstWeight")]
    pub mst_weight: f64,
    pub mst: Vec<[usize; 2]>,
    pub algorithm: String,
    #[serde(rename = "nodeCount")]
    pub node_count: usize,
    #[serde(rename = "edgeCount")]
    pub edge_count: usize,
    #[serde(rename = "executionTimeMs")]
    pub execution_time_ms: f64,
}

/// Failure payload; every error kind is recovered into this shape, tagged
/// with the algorithm that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct FailureResponse {
    pub error: String,
    pub algorithm: String,
}

/// The response of one algorithm invocation, serialized untagged so each
/// variant keeps its own field layout on the wire.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ComputeResponse {
    ShortestPath(ShortestPathResponse),
    AllPairs(AllPairsResponse),
    Kruskal(KruskalResponse),
    Prim(PrimResponse),
    Failure(FailureResponse),
}

/// One recorded invocation in the in-process result history.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub algorithm: String,
    #[serde(rename = "graphName")]
    pub graph_name: String,
    #[serde(rename = "nodeCount")]
    pub node_count: usize,
    #[serde(rename = "edgeCount")]
    pub edge_count: usize,
    #[serde(rename = "executionTimeMs")]
    pub execution_time_ms: f64,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    pub result: ComputeResponse,
}

/// Query parameters accepted by the history listing.
#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    #[serde(default)]
    pub algorithm: Option<String>,
}
