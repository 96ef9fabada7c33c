use route_paths::{
    graphs::{
        edge::LabeledEdge,
        graph_factory::GraphFactory,
        graph_functions::{path_weight, validate_path},
        Directedness, LabeledGraph,
    },
    search::{backtracking_search, SearchError},
};

fn labels(path: &route_paths::search::path::Path) -> Vec<&str> {
    path.iter().collect()
}

#[test]
fn us_cities_seattle_to_miami() {
    let graph = GraphFactory::us_cities().unwrap();
    let seattle = graph.vertex_id("Seattle").unwrap();
    let miami = graph.vertex_id("Miami").unwrap();

    let path = backtracking_search(&graph, seattle, miami).unwrap().unwrap();

    assert_eq!(path.front(), Some("Seattle"));
    assert_eq!(path.back(), Some("Miami"));
    validate_path(&graph, seattle, miami, &path).unwrap();
    assert_eq!(path_weight(&graph, &path), Some(path.weight()));
}

#[test]
fn every_pair_of_us_cities() {
    let graph = GraphFactory::us_cities().unwrap();

    for (source, _) in graph.vertices() {
        for (target, _) in graph.vertices() {
            let path = backtracking_search(&graph, source, target)
                .unwrap()
                .unwrap();
            validate_path(&graph, source, target, &path).unwrap();
        }
    }
}

#[test]
fn start_equals_target() {
    let graph = GraphFactory::us_cities().unwrap();
    let chicago = graph.vertex_id("Chicago").unwrap();

    let path = backtracking_search(&graph, chicago, chicago).unwrap().unwrap();
    assert_eq!(labels(&path), vec!["Chicago"]);
    assert_eq!(path.weight(), 0);
}

#[test]
fn newest_edge_is_tried_first() {
    let graph = GraphFactory::from_edges(&[
        LabeledEdge::bidirectional("A", "B", 1),
        LabeledEdge::bidirectional("A", "C", 1),
        LabeledEdge::bidirectional("B", "D", 1),
        LabeledEdge::bidirectional("C", "D", 1),
    ])
    .unwrap();
    let a = graph.vertex_id("A").unwrap();
    let d = graph.vertex_id("D").unwrap();

    let path = backtracking_search(&graph, a, d).unwrap().unwrap();
    assert_eq!(labels(&path), vec!["A", "C", "D"]);
}

#[test]
fn not_necessarily_shortest() {
    let graph = GraphFactory::from_edges(&[
        LabeledEdge::directed("A", "T", 1),
        LabeledEdge::directed("A", "B", 50),
        LabeledEdge::directed("B", "T", 50),
    ])
    .unwrap();
    let a = graph.vertex_id("A").unwrap();
    let t = graph.vertex_id("T").unwrap();

    let path = backtracking_search(&graph, a, t).unwrap().unwrap();
    assert_eq!(labels(&path), vec!["A", "B", "T"]);
    assert_eq!(path.weight(), 100);
}

#[test]
fn backs_out_of_dead_ends() {
    let graph = GraphFactory::from_edges(&[
        LabeledEdge::directed("A", "C", 2),
        LabeledEdge::directed("C", "T", 3),
        LabeledEdge::directed("A", "B", 1),
        LabeledEdge::directed("B", "D", 1),
        LabeledEdge::directed("D", "B", 1),
        LabeledEdge::directed("D", "A", 1),
    ])
    .unwrap();
    let a = graph.vertex_id("A").unwrap();
    let t = graph.vertex_id("T").unwrap();

    let path = backtracking_search(&graph, a, t).unwrap().unwrap();
    assert_eq!(labels(&path), vec!["A", "C", "T"]);
    assert_eq!(path.weight(), 5);
}

#[test]
fn unreachable_target_leaves_graph_unchanged() {
    let mut graph = GraphFactory::us_cities().unwrap();
    let island = graph.add_vertex("Honolulu", 0, 0).unwrap();
    let seattle = graph.vertex_id("Seattle").unwrap();
    let vertices = graph.number_of_vertices();
    let edges = graph.number_of_edges();

    assert_eq!(backtracking_search(&graph, seattle, island), Ok(None));
    assert_eq!(backtracking_search(&graph, island, seattle), Ok(None));

    assert_eq!(graph.number_of_vertices(), vertices);
    assert_eq!(graph.number_of_edges(), edges);
}

#[test]
fn directed_edges_are_one_way() {
    let mut graph = LabeledGraph::new();
    let a = graph.add_vertex("A", 0, 0).unwrap();
    let b = graph.add_vertex("B", 0, 0).unwrap();
    graph.add_edge("A", "B", 1, Directedness::Directed).unwrap();

    assert!(backtracking_search(&graph, a, b).unwrap().is_some());
    assert_eq!(backtracking_search(&graph, b, a), Ok(None));
}

#[test]
fn unknown_vertex_is_an_error() {
    let graph = GraphFactory::us_cities().unwrap();
    assert_eq!(
        backtracking_search(&graph, 0, 42),
        Err(SearchError::UnknownVertex(42))
    );
    assert_eq!(
        backtracking_search(&LabeledGraph::new(), 0, 0),
        Err(SearchError::UnknownVertex(0))
    );
}
