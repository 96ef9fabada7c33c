use clap::ValueEnum;
use tracing::debug;

use super::{
    check_request,
    collections::{
        dijkstra_data::DijkstraData,
        vertex_distance_queue::{BinaryHeapQueue, SortedWorkingSet, VertexDistanceQueue},
        vertex_flags::VertexFlags,
    },
    path::Path,
    PathFinding, SearchError,
};
use crate::graphs::{Distance, LabeledGraph, VertexId};

/// Which working set orders the vertices by tentative distance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum QueueKind {
    /// Every vertex, re-sorted before each selection.
    #[default]
    Sorted,
    /// Binary heap with lazy deletion.
    Heap,
}

/// Shortest path by total edge weight. Weights are unsigned, so every input
/// graph is valid.
///
/// An edge leading straight back to the vertex the current one was reached
/// from is never relaxed. Ties between routes of equal weight go to the one
/// relaxed first.
///
/// Distances are summed in `Distance`, which is wider than `Weight`. A sum
/// that would overflow it is no improvement.
#[derive(Clone)]
pub struct Dijkstra<'a> {
    graph: &'a LabeledGraph,
    queue: QueueKind,
}

impl<'a> PathFinding for Dijkstra<'a> {
    fn find_path(&self, source: VertexId, target: VertexId) -> Result<Option<Path>, SearchError> {
        let data = self.get_data(source, target)?;
        data.get_path(self.graph, target)
    }
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a LabeledGraph) -> Dijkstra<'a> {
        Dijkstra {
            graph,
            queue: QueueKind::default(),
        }
    }

    pub fn with_queue(graph: &'a LabeledGraph, queue: QueueKind) -> Dijkstra<'a> {
        Dijkstra { graph, queue }
    }

    pub fn shortest_distance(
        &self,
        source: VertexId,
        target: VertexId,
    ) -> Result<Option<Distance>, SearchError> {
        let distance = self.get_data(source, target)?.get_distance(target);
        Ok((distance != Distance::MAX).then_some(distance))
    }

    /// Runs the search until `target` is selected or no reachable vertex is
    /// left.
    pub fn get_data(&self, source: VertexId, target: VertexId) -> Result<DijkstraData, SearchError> {
        check_request(self.graph, source, target)?;

        let number_of_vertices = self.graph.number_of_vertices();
        let mut data = DijkstraData::new(number_of_vertices, source);
        let mut expanded = VertexFlags::new(number_of_vertices);
        let mut queue: Box<dyn VertexDistanceQueue> = match self.queue {
            QueueKind::Sorted => Box::new(SortedWorkingSet::new(number_of_vertices, source)),
            QueueKind::Heap => Box::new(BinaryHeapQueue::new(source)),
        };

        while let Some((tail, _)) = queue.pop() {
            if expanded.set(tail) {
                continue;
            }

            let distance_tail = data.get_distance(tail);
            debug!(
                vertex = self.graph.label(tail),
                source = self.graph.label(source),
                distance = distance_tail,
                "checking"
            );

            if tail == target {
                break;
            }
            // Everything left in the queue is unreachable.
            if distance_tail == Distance::MAX {
                break;
            }

            let predecessor = data.get_predecessor(tail);
            for edge in self.graph.edges(tail) {
                if Some(edge.head()) == predecessor {
                    continue;
                }
                if let Some(distance_head) = data.relax(tail, edge.head(), edge.weight()) {
                    queue.insert(edge.head(), distance_head);
                }
            }
        }

        Ok(data)
    }
}
