use serde_derive::{Deserialize, Serialize};
use thiserror::Error;

pub mod edge;
pub mod graph_factory;
pub mod graph_functions;
pub mod labeled_graph;
pub mod vertex;

pub use labeled_graph::LabeledGraph;

pub type VertexId = u32;
pub type Weight = u32;
// Wider than `Weight`, so no route over `u32` weights reaches the
// `Distance::MAX` sentinel used for unreached vertices.
pub type Distance = u64;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Directedness {
    Directed,
    #[default]
    Bidirectional,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("no vertex labeled '{0}' in graph")]
    MissingVertex(String),
    #[error("graph is full, cannot hold more than {0} vertices")]
    TooManyVertices(usize),
}
