use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get, post},
    Router,
};
use log::{info, warn};
use std::sync::{Arc, Mutex};
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::{compute, AlgorithmKind, ResultRecord, ShortestPathResult};
use crate::graph::{Edge, NodeId};
use crate::web::models::*;

/// Shared application state: the in-process result history.
#[derive(Clone)]
pub struct AppState {
    pub history: Arc<Mutex<Vec<HistoryEntry>>>,
    pub history_limit: usize,
}

impl AppState {
    pub fn new(history_limit: usize) -> Self {
        Self {
            history: Arc::new(Mutex::new(Vec::new())),
            history_limit,
        }
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/dijkstra", post(run_dijkstra))
        .route("/api/bellman-ford", post(run_bellman_ford))
        .route("/api/floyd-warshall", post(run_floyd_warshall))
        .route("/api/kruskal", post(run_kruskal))
        .route("/api/prims", post(run_prim))
        .route("/api/results", get(list_results))
        .route("/api/results/:result_id", delete(delete_result))
        .route("/api/health", get(health_check))
}

pub async fn run_dijkstra(
    State(state): State<AppState>,
    Json(request): Json<ComputeRequest>,
) -> Json<ComputeResponse> {
    Json(execute(&state, AlgorithmKind::Dijkstra, request))
}

pub async fn run_bellman_ford(
    State(state): State<AppState>,
    Json(request): Json<ComputeRequest>,
) -> Json<ComputeResponse> {
    Json(execute(&state, AlgorithmKind::BellmanFord, request))
}

pub async fn run_floyd_warshall(
    State(state): State<AppState>,
    Json(request): Json<ComputeRequest>,
) -> Json<ComputeResponse> {
    Json(execute(&state, AlgorithmKind::FloydWarshall, request))
}

pub async fn run_kruskal(
    State(state): State<AppState>,
    Json(request): Json<ComputeRequest>,
) -> Json<ComputeResponse> {
    Json(execute(&state, AlgorithmKind::Kruskal, request))
}

pub async fn run_prim(
    State(state): State<AppState>,
    Json(request): Json<ComputeRequest>,
) -> Json<ComputeResponse> {
    Json(execute(&state, AlgorithmKind::Prim, request))
}

/// Runs one algorithm for a request and converts the outcome into its wire
/// shape. Every error kind is recovered here into a failure payload tagged
/// with the algorithm name; nothing propagates as a fault.
fn execute(state: &AppState, kind: AlgorithmKind, request: ComputeRequest) -> ComputeResponse {
    let nodes: Vec<NodeId> = request.nodes.iter().map(NodeRef::id).collect();
    let edges: Vec<Edge<f64>> = request
        .edges
        .iter()
        .map(|e| Edge::new(e.from.id(), e.to.id(), e.weight))
        .collect();
    let source = request.source.as_ref().map(NodeRef::id);

    info!(
        "running {} on {} nodes / {} edges",
        kind.name(),
        nodes.len(),
        edges.len()
    );

    let started = Instant::now();
    match compute(kind, &nodes, &edges, source.as_deref()) {
        Ok(record) => {
            let execution_time_ms = started.elapsed().as_secs_f64() * 1000.0;
            let response = to_response(record, nodes.len(), edges.len(), execution_time_ms);
            record_history(state, kind, &request, nodes.len(), edges.len(), &response);
            response
        }
        Err(err) => {
            warn!("{} failed: {}", kind.name(), err);
            ComputeResponse::Failure(FailureResponse {
                error: err.to_string(),
                algorithm: kind.name().to_string(),
            })
        }
    }
}

fn to_response(
    record: ResultRecord<f64>,
    node_count: usize,
    edge_count: usize,
    execution_time_ms: f64,
) -> ComputeResponse {
    match record {
        ResultRecord::Dijkstra(result) => ComputeResponse::ShortestPath(shortest_path_response(
            result,
            AlgorithmKind::Dijkstra,
            execution_time_ms,
        )),
        ResultRecord::BellmanFord(result) => ComputeResponse::ShortestPath(
            shortest_path_response(result, AlgorithmKind::BellmanFord, execution_time_ms),
        ),
        ResultRecord::FloydWarshall(result) => ComputeResponse::AllPairs(AllPairsResponse {
            distance_matrix: result.distances,
            nodes: result.nodes,
            algorithm: AlgorithmKind::FloydWarshall.name().to_string(),
            execution_time_ms,
        }),
        ResultRecord::Kruskal(result) => ComputeResponse::Kruskal(KruskalResponse {
            total_weight: result.total_weight,
            edges: result
                .edges
                .into_iter()
                .map(|edge| (edge.from, edge.to, edge.weight))
                .collect(),
            algorithm: AlgorithmKind::Kruskal.name().to_string(),
            execution_time_ms,
        }),
        ResultRecord::Prim(result) => ComputeResponse::Prim(PrimResponse {
            mst_weight: result.total_weight,
            mst: result
                .edges
                .iter()
                .map(|&(parent, node)| [parent, node])
                .collect(),
            algorithm: AlgorithmKind::Prim.name().to_string(),
            node_count,
            edge_count,
            execution_time_ms,
        }),
    }
}

fn shortest_path_response(
    result: ShortestPathResult<f64>,
    kind: AlgorithmKind,
    execution_time_ms: f64,
) -> ShortestPathResponse {
    ShortestPathResponse {
        distances: result.distances.into_iter().collect(),
        previous: result.predecessors.into_iter().collect(),
        algorithm: kind.name().to_string(),
        source: result.source,
        execution_time_ms,
    }
}

fn record_history(
    state: &AppState,
    kind: AlgorithmKind,
    request: &ComputeRequest,
    node_count: usize,
    edge_count: usize,
    response: &ComputeResponse,
) {
    let execution_time_ms = match response {
        ComputeResponse::ShortestPath(r) => r.execution_time_ms,
        ComputeResponse::AllPairs(r) => r.execution_time_ms,
        ComputeResponse::Kruskal(r) => r.execution_time_ms,
        ComputeResponse::Prim(r) => r.execution_time_ms,
        ComputeResponse::Failure(_) => return,
    };

    let entry = HistoryEntry {
        id: Uuid::new_v4(),
        algorithm: kind.name().to_string(),
        graph_name: request
            .graph_name
            .clone()
            .unwrap_or_else(|| "Unnamed Graph".to_string()),
        node_count,
        edge_count,
        execution_time_ms,
        created_at: chrono::Utc::now(),
        result: response.clone(),
    };

    let mut history = state.history.lock().unwrap();
    history.push(entry);
    if history.len() > state.history_limit {
        let overflow = history.len() - state.history_limit;
        history.drain(..overflow);
    }
}

/// List recorded results, newest first, optionally filtered by algorithm
/// wire name (`?algorithm=Dijkstra`; `all` or absent means everything).
pub async fn list_results(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Json<Vec<HistoryEntry>> {
    let history = state.history.lock().unwrap();
    let mut entries: Vec<HistoryEntry> = history
        .iter()
        .filter(|entry| match query.algorithm.as_deref() {
            Some(name) if name != "all" => entry.algorithm == name,
            _ => true,
        })
        .cloned()
        .collect();
    entries.reverse();
    Json(entries)
}

/// Remove one recorded result by id.
pub async fn delete_result(
    State(state): State<AppState>,
    Path(result_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    let mut history = state.history.lock().unwrap();
    let before = history.len();
    history.retain(|entry| entry.id != result_id);

    if history.len() < before {
        Ok(Json(serde_json::json!({ "deleted": result_id })))
    } else {
        Err((
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": "result not found" })),
        ))
    }
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Runs one algorithm against the given state and returns the wire
    /// payload as a JSON value.
    fn invoke(state: &AppState, kind: AlgorithmKind, body: serde_json::Value) -> serde_json::Value {
        let request: ComputeRequest = serde_json::from_value(body).unwrap();
        serde_json::to_value(execute(state, kind, request)).unwrap()
    }

    fn triangle_request(source: &str) -> serde_json::Value {
        json!({
            "nodes": ["A", "B", "C"],
            "edges": [
                {"from": "A", "to": "B", "weight": 1.0},
                {"from": "B", "to": "C", "weight": 2.0},
                {"from": "A", "to": "C", "weight": 5.0},
            ],
            "source": source,
        })
    }

    #[test]
    fn test_success_payload_is_tagged_and_null_marked() {
        let state = AppState::new(10);
        let response = invoke(
            &state,
            AlgorithmKind::Dijkstra,
            json!({
                "nodes": ["A", "B", "island"],
                "edges": [{"from": "A", "to": "B", "weight": 1.0}],
                "source": "A",
            }),
        );

        assert_eq!(response["algorithm"], "Dijkstra");
        assert_eq!(response["source"], "A");
        assert_eq!(response["distances"]["B"], 1.0);
        assert!(response["distances"]["island"].is_null());
    }

    #[test]
    fn test_prim_out_of_range_index_recovers_to_failure_payload() {
        let state = AppState::new(10);
        let response = invoke(
            &state,
            AlgorithmKind::Prim,
            json!({
                "nodes": [0, 1],
                "edges": [{"from": 0, "to": 5, "weight": 1.0}],
            }),
        );

        assert_eq!(response["algorithm"], "Prims");
        assert!(response["error"].as_str().unwrap().contains("outside"));
        assert!(response.get("mstWeight").is_none());
    }

    #[test]
    fn test_prim_empty_node_list_recovers_to_failure_payload() {
        let state = AppState::new(10);
        let response = invoke(&state, AlgorithmKind::Prim, json!({ "nodes": [] }));

        assert_eq!(response["error"], "graph has no nodes");
        assert_eq!(response["algorithm"], "Prims");
    }

    #[test]
    fn test_negative_cycle_recovers_to_failure_payload() {
        let state = AppState::new(10);
        let response = invoke(
            &state,
            AlgorithmKind::BellmanFord,
            json!({
                "nodes": ["A", "B", "C"],
                "edges": [
                    {"from": "A", "to": "B", "weight": -1.0},
                    {"from": "B", "to": "C", "weight": -1.0},
                    {"from": "C", "to": "A", "weight": -1.0},
                ],
                "source": "A",
            }),
        );

        assert_eq!(response["error"], "graph contains a negative weight cycle");
        assert_eq!(response["algorithm"], "Bellman-Ford");
    }

    #[test]
    fn test_missing_source_recovers_to_failure_payload() {
        let state = AppState::new(10);
        let response = invoke(
            &state,
            AlgorithmKind::Dijkstra,
            json!({ "nodes": ["A"], "edges": [] }),
        );

        assert_eq!(
            response["error"],
            "malformed input: missing required field: source"
        );
        assert_eq!(response["algorithm"], "Dijkstra");
    }

    #[test]
    fn test_history_records_successes_but_not_failures() {
        let state = AppState::new(10);

        invoke(
            &state,
            AlgorithmKind::Dijkstra,
            json!({
                "nodes": ["A", "B"],
                "edges": [{"from": "A", "to": "B", "weight": 1.0}],
                "source": "A",
                "graphName": "demo",
            }),
        );
        invoke(&state, AlgorithmKind::Prim, json!({ "nodes": [] }));

        let history = state.history.lock().unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].algorithm, "Dijkstra");
        assert_eq!(history[0].graph_name, "demo");
        assert_eq!(history[0].node_count, 2);
        assert_eq!(history[0].edge_count, 1);
    }

    #[test]
    fn test_history_defaults_graph_name() {
        let state = AppState::new(10);
        invoke(&state, AlgorithmKind::Kruskal, triangle_request("A"));

        let history = state.history.lock().unwrap();
        assert_eq!(history[0].graph_name, "Unnamed Graph");
    }

    #[test]
    fn test_history_evicts_oldest_past_limit() {
        let state = AppState::new(2);

        for name in ["first", "second", "third"] {
            invoke(
                &state,
                AlgorithmKind::Dijkstra,
                json!({
                    "nodes": ["A"],
                    "edges": [],
                    "source": "A",
                    "graphName": name,
                }),
            );
        }

        let history = state.history.lock().unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].graph_name, "second");
        assert_eq!(history[1].graph_name, "third");
    }

    #[tokio::test]
    async fn test_list_results_newest_first_with_filter() {
        let state = AppState::new(10);
        invoke(&state, AlgorithmKind::Dijkstra, triangle_request("A"));
        invoke(&state, AlgorithmKind::Kruskal, triangle_request("A"));

        let all = list_results(State(state.clone()), Query(HistoryQuery::default()))
            .await
            .0;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].algorithm, "Kruskal");
        assert_eq!(all[1].algorithm, "Dijkstra");

        let filtered = list_results(
            State(state.clone()),
            Query(HistoryQuery {
                algorithm: Some("Dijkstra".to_string()),
            }),
        )
        .await
        .0;
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].algorithm, "Dijkstra");

        let everything = list_results(
            State(state),
            Query(HistoryQuery {
                algorithm: Some("all".to_string()),
            }),
        )
        .await
        .0;
        assert_eq!(everything.len(), 2);
    }

    #[tokio::test]
    async fn test_delete_result_removes_entry() {
        let state = AppState::new(10);
        invoke(&state, AlgorithmKind::Kruskal, triangle_request("A"));
        let id = state.history.lock().unwrap()[0].id;

        let response = delete_result(State(state.clone()), Path(id)).await;

        assert!(response.is_ok());
        assert!(state.history.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_unknown_result_is_not_found() {
        let state = AppState::new(10);

        let response = delete_result(State(state), Path(Uuid::new_v4())).await;

        let (status, body) = response.err().unwrap();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.0["error"], "result not found");
    }
}
