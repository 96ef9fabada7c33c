use std::{fs::File, io::BufReader, path::Path};

use serde_derive::{Deserialize, Serialize};
use thiserror::Error;

use super::{edge::LabeledEdge, GraphError, LabeledGraph};

#[derive(Debug, Error)]
pub enum FactoryError {
    #[error("unable to read graph file: {0}")]
    Io(#[from] std::io::Error),
    #[error("unable to parse graph file: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Graph(#[from] GraphError),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VertexDescription {
    pub label: String,
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
}

/// Graph as written in a JSON file. Vertices only referenced by edges are
/// created at the origin.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GraphDescription {
    #[serde(default)]
    pub vertices: Vec<VertexDescription>,
    #[serde(default)]
    pub edges: Vec<LabeledEdge>,
}

#[derive(Clone)]
pub struct GraphFactory {}

impl GraphFactory {
    pub fn from_json_file(path: &Path) -> Result<LabeledGraph, FactoryError> {
        let reader = BufReader::new(File::open(path)?);
        let description: GraphDescription = serde_json::from_reader(reader)?;
        Ok(Self::from_description(&description)?)
    }

    pub fn from_description(description: &GraphDescription) -> Result<LabeledGraph, GraphError> {
        let mut graph = LabeledGraph::new();

        for vertex in description.vertices.iter() {
            graph.add_vertex(&vertex.label, vertex.x, vertex.y)?;
        }
        for edge in description.edges.iter() {
            graph.add_vertex(&edge.source, 0, 0)?;
            graph.add_vertex(&edge.target, 0, 0)?;
            graph.add_labeled_edge(edge)?;
        }

        Ok(graph)
    }

    pub fn from_edges(edges: &[LabeledEdge]) -> Result<LabeledGraph, GraphError> {
        Self::from_description(&GraphDescription {
            vertices: Vec::new(),
            edges: edges.to_vec(),
        })
    }

    /// Ten US cities connected by bidirectional roads, weighted in miles.
    pub fn us_cities() -> Result<LabeledGraph, GraphError> {
        Self::from_description(&us_cities_description())
    }
}

pub fn us_cities_description() -> GraphDescription {
    let vertices = [
        "San Francisco",
        "Los Angeles",
        "Las Vegas",
        "Seattle",
        "Chicago",
        "Washington",
        "New York",
        "Houston",
        "Nashville",
        "Miami",
    ]
    .iter()
    .map(|label| VertexDescription {
        label: label.to_string(),
        x: 0,
        y: 0,
    })
    .collect();

    let edges = [
        ("San Francisco", "Los Angeles", 347),
        ("San Francisco", "Las Vegas", 417),
        ("Los Angeles", "Las Vegas", 228),
        ("San Francisco", "Seattle", 680),
        ("Seattle", "Chicago", 1734),
        ("Chicago", "Washington", 594),
        ("Washington", "New York", 203),
        ("Las Vegas", "Houston", 1227),
        ("Houston", "Nashville", 666),
        ("Nashville", "Washington", 566),
        ("Nashville", "Miami", 818),
    ]
    .iter()
    .map(|&(source, target, weight)| LabeledEdge::bidirectional(source, target, weight))
    .collect();

    GraphDescription { vertices, edges }
}
