use route_paths::graphs::{
    edge::LabeledEdge,
    graph_factory::{GraphDescription, GraphFactory},
    Directedness, GraphError, LabeledGraph,
};

#[test]
fn add_vertex_is_idempotent() {
    let mut graph = LabeledGraph::new();
    let seattle = graph.add_vertex("Seattle", 1, 2).unwrap();
    let again = graph.add_vertex("Seattle", 7, 7).unwrap();

    assert_eq!(seattle, again);
    assert_eq!(graph.number_of_vertices(), 1);
    // the first insert wins
    assert_eq!(graph.vertex(seattle).unwrap().coordinates(), (1, 2));
    assert_eq!(graph.label(seattle), Some("Seattle"));
    assert_eq!(graph.vertex_id("Seattle"), Some(seattle));
}

#[test]
fn edge_between_missing_vertices() {
    let mut graph = LabeledGraph::new();
    graph.add_vertex("A", 0, 0).unwrap();

    let result = graph.add_edge("X", "Y", 3, Directedness::Bidirectional);
    assert_eq!(result, Err(GraphError::MissingVertex("X".to_string())));

    let result = graph.add_edge("A", "Y", 3, Directedness::Directed);
    assert_eq!(result, Err(GraphError::MissingVertex("Y".to_string())));

    assert_eq!(graph.number_of_vertices(), 1);
    assert_eq!(graph.number_of_edges(), 0);
}

#[test]
fn directed_and_bidirectional_edges() {
    let mut graph = LabeledGraph::new();
    let a = graph.add_vertex("A", 0, 0).unwrap();
    let b = graph.add_vertex("B", 0, 0).unwrap();

    graph.add_edge("A", "B", 4, Directedness::Directed).unwrap();
    assert_eq!(graph.number_of_edges(), 1);
    assert_eq!(graph.edges(b).count(), 0);

    graph.add_edge("A", "B", 9, Directedness::Bidirectional).unwrap();
    assert_eq!(graph.number_of_edges(), 3);

    let back: Vec<_> = graph.edges(b).collect();
    assert_eq!(back.len(), 1);
    assert_eq!(back[0].tail(), b);
    assert_eq!(back[0].head(), a);
    assert_eq!(back[0].weight(), 9);
}

#[test]
fn edges_are_listed_newest_first() {
    let mut graph = LabeledGraph::new();
    let a = graph.add_vertex("A", 0, 0).unwrap();
    let b = graph.add_vertex("B", 0, 0).unwrap();
    let c = graph.add_vertex("C", 0, 0).unwrap();
    let d = graph.add_vertex("D", 0, 0).unwrap();

    graph.add_edge("A", "B", 1, Directedness::Directed).unwrap();
    graph.add_edge("A", "C", 2, Directedness::Directed).unwrap();
    graph.add_edge("A", "D", 3, Directedness::Directed).unwrap();

    let heads: Vec<_> = graph.edges(a).map(|edge| edge.head()).collect();
    assert_eq!(heads, vec![d, c, b]);

    let vertex = graph.vertex(a).unwrap();
    assert_eq!(vertex.nth_edge(0).map(|edge| edge.head()), Some(d));
    assert_eq!(vertex.nth_edge(2).map(|edge| edge.head()), Some(b));
    assert!(vertex.nth_edge(3).is_none());
}

#[test]
fn unknown_vertex_has_no_edges() {
    let graph = GraphFactory::us_cities().unwrap();
    assert_eq!(graph.edges(1_000).count(), 0);
    assert!(graph.vertex(1_000).is_none());
    assert!(!graph.contains(1_000));
}

#[test]
fn clear_releases_everything() {
    let mut graph = GraphFactory::us_cities().unwrap();
    assert_eq!(graph.number_of_vertices(), 10);
    assert_eq!(graph.number_of_edges(), 22);

    graph.clear();
    assert_eq!(graph.number_of_vertices(), 0);
    assert_eq!(graph.number_of_edges(), 0);
    assert_eq!(graph.vertex_id("Seattle"), None);

    // still usable
    let a = graph.add_vertex("A", 0, 0).unwrap();
    assert_eq!(a, 0);
}

#[test]
fn graph_from_json_description() {
    let json = r#"{
        "vertices": [{ "label": "A", "x": 3, "y": 4 }],
        "edges": [
            { "source": "A", "target": "B", "weight": 5 },
            { "source": "B", "target": "C", "weight": 2, "directedness": "directed" }
        ]
    }"#;
    let description: GraphDescription = serde_json::from_str(json).unwrap();
    let graph = GraphFactory::from_description(&description).unwrap();

    assert_eq!(graph.number_of_vertices(), 3);
    // A-B both ways, B->C once
    assert_eq!(graph.number_of_edges(), 3);
    let a = graph.vertex_id("A").unwrap();
    assert_eq!(graph.vertex(a).unwrap().coordinates(), (3, 4));
    let c = graph.vertex_id("C").unwrap();
    assert_eq!(graph.edges(c).count(), 0);
}

#[test]
fn graph_from_edges() {
    let graph = GraphFactory::from_edges(&[
        LabeledEdge::directed("A", "B", 1),
        LabeledEdge::bidirectional("B", "C", 2),
    ])
    .unwrap();

    assert_eq!(graph.number_of_vertices(), 3);
    assert_eq!(graph.number_of_edges(), 3);
}
