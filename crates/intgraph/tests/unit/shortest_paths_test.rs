//! Unit tests for the Dijkstra/A* shortest-path engine.

use intgraph::{
    DenseStore, EdgeWeightMap, EdgeWeights, Graph, GraphError, Kind, MapStore, PathStore,
    ShortestPaths, Vertex, WithHeuristic,
};

// Helper: graph plus weight map from a list of weighted edges over `n` vertices
fn weighted(kind: Kind, n: usize, edges: &[(Vertex, Vertex, f64)]) -> (Graph, EdgeWeightMap) {
    let mut graph = Graph::new(kind);
    for _ in 0..n {
        graph.add_vertex();
    }
    let mut weights = EdgeWeightMap::for_graph(&graph);
    for &(u, v, w) in edges {
        graph.add_edge(u, v).unwrap();
        weights.insert(u, v, w);
    }
    (graph, weights)
}

// 3x3 grid, unit weights, vertex (r, c) = 3r + c + 1
fn grid() -> (Graph, EdgeWeightMap) {
    let mut edges = Vec::new();
    for r in 0..3 {
        for c in 0..3 {
            let v = 3 * r + c + 1;
            if c < 2 {
                edges.push((v, v + 1, 1.0));
            }
            if r < 2 {
                edges.push((v, v + 3, 1.0));
            }
        }
    }
    weighted(Kind::Undirected, 9, &edges)
}

fn manhattan_to_9(v: Vertex) -> f64 {
    let (r, c) = ((v - 1) / 3, (v - 1) % 3);
    ((2 - r) + (2 - c)) as f64
}

#[test]
fn test_directed_example_scenario() {
    let (graph, weights) = weighted(
        Kind::Directed,
        3,
        &[(1, 2, 1.0), (2, 3, 1.0), (1, 3, 5.0)],
    );
    let mut paths = ShortestPaths::new(&graph, 1, DenseStore::for_graph(&graph), weights).unwrap();
    paths.compute_paths().unwrap();

    assert_eq!(paths.weight(2), 1.0);
    assert_eq!(paths.weight(3), 2.0);
    assert_eq!(paths.path_to(3), Some(vec![1, 2, 3]));
    assert_eq!(paths.source(), 1);
    assert_eq!(paths.destination(), None);
    assert_eq!(paths.path(), None);
}

#[test]
fn test_undirected_edges_relax_both_ways() {
    let (graph, weights) = weighted(
        Kind::Undirected,
        4,
        &[(2, 1, 4.0), (3, 2, 1.0), (4, 3, 1.0), (1, 4, 1.5)],
    );
    let mut paths = ShortestPaths::new(&graph, 1, MapStore::new(), weights).unwrap();
    paths.compute_paths().unwrap();

    assert_eq!(paths.weight(4), 1.5);
    assert_eq!(paths.weight(3), 2.5);
    assert_eq!(paths.weight(2), 3.5);
    assert_eq!(paths.path_to(2), Some(vec![1, 4, 3, 2]));
}

#[test]
fn test_destination_stops_search_early() {
    let (graph, weights) = weighted(
        Kind::Directed,
        4,
        &[(1, 2, 1.0), (2, 3, 1.0), (3, 4, 1.0)],
    );
    let mut paths = ShortestPaths::new(&graph, 1, DenseStore::for_graph(&graph), weights)
        .unwrap()
        .with_destination(2)
        .unwrap();
    paths.compute_paths().unwrap();

    assert_eq!(paths.path(), Some(vec![1, 2]));
    // Settling 2 ends the search before its successors are relaxed
    assert_eq!(paths.weight(3), f64::INFINITY);
    assert_eq!(paths.path_to(4), None);
}

#[test]
fn test_astar_matches_dijkstra_on_grid() {
    let (graph, weights) = grid();
    let mut dijkstra =
        ShortestPaths::new(&graph, 1, DenseStore::for_graph(&graph), weights.clone()).unwrap();
    dijkstra.compute_paths().unwrap();

    let mut astar = ShortestPaths::new(
        &graph,
        1,
        DenseStore::for_graph(&graph),
        WithHeuristic::new(weights, manhattan_to_9),
    )
    .unwrap()
    .with_destination(9)
    .unwrap();
    astar.compute_paths().unwrap();

    assert_eq!(astar.weight(9), 4.0);
    assert_eq!(astar.weight(9), dijkstra.weight(9));
    let path = astar.path().unwrap();
    assert_eq!(path.len(), 5);
    assert_eq!(path.first(), Some(&1));
    assert_eq!(path.last(), Some(&9));
}

#[test]
fn test_ties_resolve_to_smaller_vertex() {
    // Two equal routes to 4: via 2 and via 3
    let (graph, weights) = weighted(
        Kind::Directed,
        4,
        &[(1, 3, 1.0), (1, 2, 1.0), (3, 4, 1.0), (2, 4, 1.0)],
    );
    let run = || {
        let mut paths =
            ShortestPaths::new(&graph, 1, DenseStore::for_graph(&graph), weights.clone()).unwrap();
        paths.compute_paths().unwrap();
        paths.path_to(4)
    };

    assert_eq!(run(), Some(vec![1, 2, 4]));
    assert_eq!(run(), run());
}

#[test]
fn test_unreachable_vertex_keeps_sentinels() {
    let (graph, weights) = weighted(Kind::Directed, 3, &[(1, 2, 1.0)]);
    let mut paths = ShortestPaths::new(&graph, 1, MapStore::new(), weights).unwrap();
    paths.compute_paths().unwrap();

    assert_eq!(paths.weight(3), f64::INFINITY);
    assert_eq!(paths.predecessor(3), 0);
    assert!(!paths.is_reachable(3));
    assert_eq!(paths.path_to(3), None);
    assert_eq!(paths.path_to(99), None);
}

#[test]
fn test_missing_weight_is_infinite() {
    // Edge 2 -> 3 exists in the graph but has no weight
    let (mut graph, weights) = weighted(Kind::Directed, 3, &[(1, 2, 1.0)]);
    graph.add_edge(2, 3).unwrap();
    let mut paths = ShortestPaths::new(&graph, 1, MapStore::new(), weights).unwrap();
    paths.compute_paths().unwrap();

    assert!(paths.is_reachable(2));
    assert!(!paths.is_reachable(3));
}

#[test]
fn test_recompute_resets_previous_results() {
    let (graph, weights) = weighted(Kind::Directed, 2, &[(1, 2, 3.0)]);
    let mut store = MapStore::new();
    store.set_weight(2, 0.5);
    store.set_predecessor(2, 2);

    let mut paths = ShortestPaths::new(&graph, 1, store, weights).unwrap();
    paths.compute_paths().unwrap();
    paths.compute_paths().unwrap();

    let store = paths.into_store();
    assert_eq!(store.weight(2), 3.0);
    assert_eq!(store.predecessor(2), 1);
}

#[test]
fn test_closure_weights() {
    let (graph, _) = weighted(Kind::Directed, 3, &[(1, 2, 0.0), (2, 3, 0.0)]);
    let mut paths = ShortestPaths::new(&graph, 1, MapStore::new(), |u: Vertex, v: Vertex| {
        (u * v) as f64
    })
    .unwrap();
    paths.compute_paths().unwrap();

    assert_eq!(paths.weight(3), 8.0);
    assert_eq!(paths.weights().edge_weight(2, 3), 6.0);
}

#[test]
fn test_capacity_exceeded() {
    let (mut graph, weights) = weighted(Kind::Directed, 2, &[(1, 2, 1.0)]);
    let store = DenseStore::for_graph(&graph);
    graph.add_vertex();

    let mut paths = ShortestPaths::new(&graph, 1, store, weights).unwrap();
    assert_eq!(
        paths.compute_paths(),
        Err(GraphError::CapacityExceeded {
            vertex: 3,
            capacity: 3
        })
    );
}
