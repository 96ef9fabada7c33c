use crate::{
    graphs::{Distance, LabeledGraph, VertexId, Weight},
    search::{path::Path, SearchError},
};

/// Tentative distance and predecessor of every vertex during one Dijkstra
/// search. Lives only as long as the search call.
pub struct DijkstraData {
    predecessors: Vec<Option<VertexId>>,
    distances: Vec<Distance>,
}

impl DijkstraData {
    pub fn new(number_of_vertices: u32, source: VertexId) -> Self {
        let mut data = DijkstraData {
            predecessors: vec![None; number_of_vertices as usize],
            distances: vec![Distance::MAX; number_of_vertices as usize],
        };
        data.distances[source as usize] = 0;
        data
    }

    pub fn get_predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.predecessors[vertex as usize]
    }

    pub fn get_distance(&self, vertex: VertexId) -> Distance {
        self.distances[vertex as usize]
    }

    /// Offers `tail -> head` with the given edge weight as a route to `head`.
    /// Returns the new distance of `head` if it improved. A sum that would
    /// overflow is no improvement.
    pub fn relax(&mut self, tail: VertexId, head: VertexId, weight: Weight) -> Option<Distance> {
        let alternative_distance = self
            .get_distance(tail)
            .checked_add(Distance::from(weight))?;
        if alternative_distance >= self.get_distance(head) {
            return None;
        }

        self.distances[head as usize] = alternative_distance;
        self.predecessors[head as usize] = Some(tail);
        Some(alternative_distance)
    }

    /// Builds the path to `target` by following predecessors back to the
    /// source. Returns `None` if the target was never reached.
    pub fn get_path(
        &self,
        graph: &LabeledGraph,
        target: VertexId,
    ) -> Result<Option<Path>, SearchError> {
        let distance = self.get_distance(target);
        if distance == Distance::MAX {
            return Ok(None);
        }

        let mut path = Path::with_weight(distance);
        let mut vertex = target;
        loop {
            let label = graph
                .label(vertex)
                .ok_or(SearchError::BrokenPredecessorChain(vertex))?;
            path.push_front(label);

            // A chain longer than the graph has vertices must contain a cycle.
            if path.len() > self.distances.len() {
                return Err(SearchError::BrokenPredecessorChain(vertex));
            }

            match self.get_predecessor(vertex) {
                Some(predecessor) => vertex = predecessor,
                None => break,
            }
        }

        Ok(Some(path))
    }
}
