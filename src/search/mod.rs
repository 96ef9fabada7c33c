use thiserror::Error;

use crate::graphs::{LabeledGraph, VertexId};

pub mod backtracking;
pub mod collections;
pub mod dijkstra;
pub mod path;

use backtracking::Backtracking;
use dijkstra::Dijkstra;
use path::Path;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("vertex {0} is not part of the graph")]
    UnknownVertex(VertexId),
    #[error("predecessor chain broken at vertex {0}")]
    BrokenPredecessorChain(VertexId),
}

/// A strategy finding a route between two vertices of a graph it borrows.
///
/// `Ok(None)` means the target can not be reached from the source, which is
/// an ordinary outcome. Errors are reserved for bad arguments and violated
/// invariants.
pub trait PathFinding: Send + Sync {
    fn find_path(&self, source: VertexId, target: VertexId) -> Result<Option<Path>, SearchError>;
}

pub(crate) fn check_request(
    graph: &LabeledGraph,
    source: VertexId,
    target: VertexId,
) -> Result<(), SearchError> {
    for vertex in [source, target] {
        if !graph.contains(vertex) {
            tracing::warn!(vertex, "search requested for unknown vertex");
            return Err(SearchError::UnknownVertex(vertex));
        }
    }
    Ok(())
}

/// First simple path found by depth first search.
pub fn backtracking_search(
    graph: &LabeledGraph,
    source: VertexId,
    target: VertexId,
) -> Result<Option<Path>, SearchError> {
    Backtracking::new(graph).find_path(source, target)
}

/// Path of minimal total weight.
pub fn dijkstra_search(
    graph: &LabeledGraph,
    source: VertexId,
    target: VertexId,
) -> Result<Option<Path>, SearchError> {
    Dijkstra::new(graph).find_path(source, target)
}
