use graphkit::algorithm::{bellman_ford, dijkstra};
use graphkit::graph::{Edge, NodeId, UndirectedGraph};
use graphkit::Error;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn ids(names: &[&str]) -> Vec<NodeId> {
    names.iter().map(|n| n.to_string()).collect()
}

fn triangle() -> UndirectedGraph<f64> {
    UndirectedGraph::build(
        &ids(&["A", "B", "C"]),
        &[
            Edge::new("A", "B", 1.0),
            Edge::new("B", "C", 2.0),
            Edge::new("A", "C", 5.0),
        ],
    )
}

#[test]
fn test_dijkstra_triangle_distances_and_previous() {
    let result = dijkstra::run(&triangle(), "A");

    assert_eq!(result.distances["A"], Some(0.0));
    assert_eq!(result.distances["B"], Some(1.0));
    assert_eq!(result.distances["C"], Some(3.0));

    assert_eq!(result.predecessors.get("A"), None);
    assert_eq!(result.predecessors["B"], "A");
    assert_eq!(result.predecessors["C"], "B");
}

#[test]
fn test_dijkstra_unreachable_node_stays_none() {
    let graph = UndirectedGraph::build(
        &ids(&["A", "B", "island"]),
        &[Edge::new("A", "B", 1.0)],
    );
    let result = dijkstra::run(&graph, "A");

    assert_eq!(result.distances["island"], None);
    assert_eq!(result.predecessors.get("island"), None);
}

#[test]
fn test_dijkstra_unknown_source_acts_isolated() {
    let result = dijkstra::run(&triangle(), "Z");

    assert_eq!(result.distances["Z"], Some(0.0));
    assert_eq!(result.distances["A"], None);
    assert_eq!(result.distances["B"], None);
    assert_eq!(result.distances["C"], None);
}

#[test]
fn test_dijkstra_relaxes_each_parallel_edge() {
    let graph = UndirectedGraph::build(
        &ids(&["A", "B"]),
        &[Edge::new("A", "B", 4.0), Edge::new("A", "B", 1.5)],
    );
    let result = dijkstra::run(&graph, "A");

    assert_eq!(result.distances["B"], Some(1.5));
}

#[test]
fn test_path_reconstruction_follows_predecessors() {
    let result = dijkstra::run(&triangle(), "A");

    let path = result.path_to("C").unwrap();
    assert_eq!(path, ids(&["A", "B", "C"]));
    assert_eq!(result.path_to("A").unwrap(), ids(&["A"]));
}

#[test]
fn test_path_to_unreachable_is_none() {
    let graph: UndirectedGraph<f64> = UndirectedGraph::build(&ids(&["A", "B"]), &[]);
    let result = dijkstra::run(&graph, "A");

    assert_eq!(result.path_to("B"), None);
}

#[test]
fn test_bellman_ford_matches_dijkstra_on_triangle() {
    let graph = triangle();
    let by_dijkstra = dijkstra::run(&graph, "A");
    let by_bellman = bellman_ford::run(&graph, "A").unwrap();

    assert_eq!(by_dijkstra.distances, by_bellman.distances);
    assert_eq!(by_dijkstra.predecessors, by_bellman.predecessors);
}

#[test]
fn test_bellman_ford_detects_negative_triangle() {
    let graph = UndirectedGraph::build(
        &ids(&["A", "B", "C"]),
        &[
            Edge::new("A", "B", -1.0),
            Edge::new("B", "C", -1.0),
            Edge::new("C", "A", -1.0),
        ],
    );

    assert_eq!(
        bellman_ford::run(&graph, "A"),
        Err(Error::NegativeCycleDetected)
    );
}

#[test]
fn test_bellman_ford_single_negative_edge_is_a_cycle() {
    // Undirected semantics: a negative edge can be walked back and forth,
    // so one reachable negative edge already forms a negative cycle.
    let graph = UndirectedGraph::build(
        &ids(&["A", "B", "C"]),
        &[Edge::new("A", "B", 3.0), Edge::new("B", "C", -2.0)],
    );

    assert_eq!(
        bellman_ford::run(&graph, "A"),
        Err(Error::NegativeCycleDetected)
    );
}

#[test]
fn test_bellman_ford_ignores_unreachable_negative_cycle() {
    let graph = UndirectedGraph::build(
        &ids(&["A", "B", "X", "Y", "Z"]),
        &[
            Edge::new("A", "B", 1.0),
            Edge::new("X", "Y", -1.0),
            Edge::new("Y", "Z", -1.0),
            Edge::new("Z", "X", -1.0),
        ],
    );

    let result = bellman_ford::run(&graph, "A").unwrap();
    assert_eq!(result.distances["B"], Some(1.0));
    assert_eq!(result.distances["X"], None);
    assert_eq!(result.distances["Y"], None);
    assert_eq!(result.distances["Z"], None);
}

#[test]
fn test_algorithms_agree_on_random_graphs() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..10 {
        let node_count = rng.gen_range(2..25);
        let nodes: Vec<NodeId> = (0..node_count).map(|i| i.to_string()).collect();

        let edge_count = rng.gen_range(0..node_count * 3);
        // Integer-valued weights keep float sums exact, so the two
        // algorithms must agree bit for bit.
        let edges: Vec<Edge<f64>> = (0..edge_count)
            .map(|_| {
                Edge::new(
                    rng.gen_range(0..node_count).to_string(),
                    rng.gen_range(0..node_count).to_string(),
                    rng.gen_range(1..10) as f64,
                )
            })
            .collect();

        let graph = UndirectedGraph::build(&nodes, &edges);
        let by_dijkstra = dijkstra::run(&graph, "0");
        let by_bellman = bellman_ford::run(&graph, "0").unwrap();

        assert_eq!(by_dijkstra.distances, by_bellman.distances);
    }
}

#[test]
fn test_rerun_is_bit_identical() {
    let graph = triangle();

    assert_eq!(dijkstra::run(&graph, "A"), dijkstra::run(&graph, "A"));
    assert_eq!(
        bellman_ford::run(&graph, "A").unwrap(),
        bellman_ford::run(&graph, "A").unwrap()
    );
}
