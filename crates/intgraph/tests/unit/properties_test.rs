//! Property tests for the graph laws and search optimality.

use intgraph::{DenseStore, EdgeWeightMap, Graph, Kind, ShortestPaths, Vertex, WithHeuristic};
use proptest::prelude::*;
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
enum Operation {
    Add,
    Remove(usize),
}

fn kind_strategy() -> impl Strategy<Value = Kind> {
    prop_oneof![Just(Kind::Directed), Just(Kind::Undirected)]
}

// Graph over vertices 1..=n with edges given as zero-based pairs
fn build(kind: Kind, n: usize, edges: &[(usize, usize, u8)]) -> (Graph, EdgeWeightMap) {
    let mut graph = Graph::new(kind);
    for _ in 0..n {
        graph.add_vertex();
    }
    let mut weights = EdgeWeightMap::for_graph(&graph);
    for &(u, v, w) in edges {
        let (u, v) = (u % n + 1, v % n + 1);
        graph.add_edge(u, v).unwrap();
        weights.insert(u, v, f64::from(w));
    }
    (graph, weights)
}

// Reference distances by Bellman-Ford relaxation over the graph's successors
fn reference_distances(graph: &Graph, weights: &EdgeWeightMap, source: Vertex) -> Vec<f64> {
    use intgraph::EdgeWeights;

    let mut dist = vec![f64::INFINITY; graph.max_vertex() + 1];
    dist[source] = 0.0;
    for _ in 0..graph.vertex_count() {
        for u in graph.vertices() {
            for v in graph.successors(u) {
                let candidate = dist[u] + weights.edge_weight(u, v);
                if candidate < dist[v] {
                    dist[v] = candidate;
                }
            }
        }
    }
    dist
}

fn graph_strategy() -> impl Strategy<Value = (Kind, usize, Vec<(usize, usize, u8)>)> {
    (
        kind_strategy(),
        1usize..9,
        proptest::collection::vec((0usize..9, 0usize..9, 0u8..10), 0..24),
    )
}

proptest! {
    #[test]
    fn test_add_returns_smallest_free_id(ops in proptest::collection::vec(
        prop_oneof![
            Just(Operation::Add),
            (0usize..12).prop_map(Operation::Remove),
        ],
        1..80
    )) {
        let mut graph = Graph::directed();
        let mut live: BTreeSet<Vertex> = BTreeSet::new();

        for op in ops {
            match op {
                Operation::Add => {
                    let expected = (1..).find(|v: &Vertex| !live.contains(v)).unwrap();
                    let vertex = graph.add_vertex();
                    prop_assert_eq!(vertex, expected);
                    live.insert(vertex);
                }
                Operation::Remove(v) => {
                    prop_assert_eq!(graph.remove_vertex(v), live.remove(&v));
                }
            }
            prop_assert_eq!(graph.vertex_count(), live.len());
            prop_assert_eq!(graph.max_vertex(), live.iter().next_back().copied().unwrap_or(0));
        }
    }

    #[test]
    fn test_edge_symmetry_follows_kind((kind, n, edges) in graph_strategy()) {
        let (graph, _) = build(kind, n, &edges);
        let added: BTreeSet<(Vertex, Vertex)> = edges
            .iter()
            .map(|&(u, v, _)| (u % n + 1, v % n + 1))
            .collect();

        for &(u, v) in &added {
            prop_assert!(graph.contains_edge(u, v));
            match kind {
                Kind::Directed => {
                    prop_assert_eq!(graph.contains_edge(v, u), added.contains(&(v, u)));
                }
                Kind::Undirected => prop_assert!(graph.contains_edge(v, u)),
            }
        }
    }

    #[test]
    fn test_add_edge_is_idempotent((kind, n, edges) in graph_strategy()) {
        let (mut graph, _) = build(kind, n, &edges);
        let count = graph.edge_count();
        for &(u, v, _) in &edges {
            let (u, v) = (u % n + 1, v % n + 1);
            let id = graph.add_edge(u, v).unwrap();
            prop_assert_eq!(id, graph.edge_id(u, v));
        }
        prop_assert_eq!(graph.edge_count(), count);
    }

    #[test]
    fn test_remove_vertex_drops_exactly_incident_edges(
        (kind, n, edges) in graph_strategy(),
        pick in 0usize..9,
    ) {
        let (mut graph, _) = build(kind, n, &edges);
        let victim = pick % n + 1;
        let before: Vec<_> = graph.edges().collect();
        let survivors: Vec<_> = before
            .iter()
            .copied()
            .filter(|&(u, v)| u != victim && v != victim)
            .collect();

        graph.remove_vertex(victim);
        prop_assert_eq!(graph.edges().collect::<Vec<_>>(), survivors);
        prop_assert!(graph.vertices().all(|v| v != victim));
    }

    #[test]
    fn test_dijkstra_matches_reference(
        (kind, n, edges) in graph_strategy(),
        pick in 0usize..9,
    ) {
        let (graph, weights) = build(kind, n, &edges);
        let source = pick % n + 1;
        let expected = reference_distances(&graph, &weights, source);

        let mut paths =
            ShortestPaths::new(&graph, source, DenseStore::for_graph(&graph), weights.clone())
                .unwrap();
        paths.compute_paths().unwrap();

        for v in graph.vertices() {
            prop_assert_eq!(paths.weight(v), expected[v]);
            match paths.path_to(v) {
                Some(path) => {
                    prop_assert_eq!(path[0], source);
                    prop_assert_eq!(*path.last().unwrap(), v);
                    let total: f64 = path
                        .windows(2)
                        .map(|step| weights.get(step[0], step[1]).unwrap())
                        .sum();
                    prop_assert_eq!(total, expected[v]);
                }
                None => prop_assert_eq!(expected[v], f64::INFINITY),
            }
        }
    }

    #[test]
    fn test_astar_finds_optimal_distance(
        (kind, n, edges) in graph_strategy(),
        picks in (0usize..9, 0usize..9),
    ) {
        let (graph, weights) = build(kind, n, &edges);
        let source = picks.0 % n + 1;
        let destination = picks.1 % n + 1;
        let expected = reference_distances(&graph, &weights, source);

        // Half the true remaining distance never overestimates it
        let mut to_destination = vec![0.0; n + 1];
        for v in graph.vertices() {
            let d = reference_distances(&graph, &weights, v)[destination];
            if d.is_finite() {
                to_destination[v] = (d / 2.0).floor();
            }
        }
        let heuristic = move |v: Vertex| to_destination[v];

        let mut paths = ShortestPaths::new(
            &graph,
            source,
            DenseStore::for_graph(&graph),
            WithHeuristic::new(weights, heuristic),
        )
        .unwrap()
        .with_destination(destination)
        .unwrap();
        paths.compute_paths().unwrap();

        prop_assert_eq!(paths.weight(destination), expected[destination]);
        prop_assert_eq!(paths.path().is_some(), expected[destination].is_finite());
    }

    #[test]
    fn test_predecessor_tree_is_deterministic((kind, n, edges) in graph_strategy()) {
        // Unit weights make ties common
        let (graph, _) = build(kind, n, &edges);
        let tree = || {
            let mut paths =
                ShortestPaths::new(&graph, 1, DenseStore::for_graph(&graph), |_: Vertex, _: Vertex| 1.0)
                    .unwrap();
            paths.compute_paths().unwrap();
            graph.vertices().map(|v| paths.predecessor(v)).collect::<Vec<_>>()
        };
        prop_assert_eq!(tree(), tree());
    }
}
