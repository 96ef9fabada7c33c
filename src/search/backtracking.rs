use tracing::debug;

use super::{
    check_request, collections::vertex_flags::VertexFlags, path::Path, PathFinding, SearchError,
};
use crate::graphs::{Distance, LabeledGraph, VertexId, Weight};

/// Depth first search returning the first route it runs into. Edges are tried
/// newest first, so the result depends on the order the graph was built in
/// and is not necessarily the shortest one.
///
/// A vertex is skipped only while it is on the current route. Once the search
/// has backed out of it, it may be visited again through another branch.
#[derive(Clone)]
pub struct Backtracking<'a> {
    graph: &'a LabeledGraph,
}

struct Frame {
    vertex: VertexId,
    next_edge: usize,
    distance: Distance,
}

impl<'a> PathFinding for Backtracking<'a> {
    fn find_path(&self, source: VertexId, target: VertexId) -> Result<Option<Path>, SearchError> {
        check_request(self.graph, source, target)?;

        let mut route = Route::new(self.graph);
        route.enter(source, 0)?;
        if source == target {
            return Ok(Some(route.into_path()));
        }

        // Frames mirror the vertices on the path, the last one is the tail.
        while let Some(frame) = route.stack.last_mut() {
            let next_edge = self
                .graph
                .vertex(frame.vertex)
                .and_then(|vertex| vertex.nth_edge(frame.next_edge))
                .map(|edge| (edge.head(), edge.weight()));
            frame.next_edge += 1;

            match next_edge {
                Some((head, _)) if route.on_path.get(head) => continue,
                Some((head, weight)) => {
                    route.enter(head, weight)?;
                    if head == target {
                        return Ok(Some(route.into_path()));
                    }
                }
                None => route.leave(),
            }
        }

        Ok(None)
    }
}

impl<'a> Backtracking<'a> {
    pub fn new(graph: &'a LabeledGraph) -> Backtracking<'a> {
        Backtracking { graph }
    }
}

/// The current candidate route: labels, a membership flag per vertex and the
/// explicit stack replacing recursion.
struct Route<'a> {
    graph: &'a LabeledGraph,
    path: Path,
    on_path: VertexFlags,
    stack: Vec<Frame>,
}

impl<'a> Route<'a> {
    fn new(graph: &'a LabeledGraph) -> Self {
        Route {
            graph,
            path: Path::new(),
            on_path: VertexFlags::new(graph.number_of_vertices()),
            stack: Vec::new(),
        }
    }

    fn enter(&mut self, vertex: VertexId, weight: Weight) -> Result<(), SearchError> {
        let label = self
            .graph
            .label(vertex)
            .ok_or(SearchError::UnknownVertex(vertex))?;
        debug!(vertex = label, "checking");

        let distance = self
            .stack
            .last()
            .map_or(0, |frame| frame.distance.saturating_add(Distance::from(weight)));

        self.path.push_back(label);
        self.on_path.set(vertex);
        self.stack.push(Frame {
            vertex,
            next_edge: 0,
            distance,
        });

        Ok(())
    }

    fn leave(&mut self) {
        if let Some(frame) = self.stack.pop() {
            self.path.pop_back();
            self.on_path.unset(frame.vertex);
        }
    }

    fn into_path(mut self) -> Path {
        let distance = self.stack.last().map_or(0, |frame| frame.distance);
        self.path.set_weight(distance);
        self.path
    }
}
