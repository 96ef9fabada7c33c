use ahash::{HashMap, HashMapExt};
use tracing::warn;

use super::{
    edge::{LabeledEdge, WeightedEdge},
    vertex::Vertex,
    Directedness, GraphError, VertexId, Weight,
};

/// Arena owning every vertex of a graph. Vertices are addressed by their
/// position, edges store the position of their head, so no vertex ever
/// refers to another one directly.
///
/// Labels are unique. The graph is only mutated while it is built; searches
/// borrow it immutably.
#[derive(Clone, Debug, Default)]
pub struct LabeledGraph {
    vertices: Vec<Vertex>,
    ids: HashMap<String, VertexId>,
}

impl LabeledGraph {
    pub fn new() -> LabeledGraph {
        LabeledGraph {
            vertices: Vec::new(),
            ids: HashMap::new(),
        }
    }

    /// Adds a vertex and returns its id. If a vertex with the same label
    /// already exists its id is returned and the graph is left untouched.
    pub fn add_vertex(&mut self, label: &str, x: i32, y: i32) -> Result<VertexId, GraphError> {
        if let Some(&vertex) = self.ids.get(label) {
            return Ok(vertex);
        }

        let vertex = VertexId::try_from(self.vertices.len())
            .ok()
            .filter(|&vertex| vertex != VertexId::MAX)
            .ok_or(GraphError::TooManyVertices(VertexId::MAX as usize))?;

        self.vertices.push(Vertex::new(label, x, y));
        self.ids.insert(label.to_string(), vertex);

        Ok(vertex)
    }

    /// Connects two existing vertices. A bidirectional edge is stored as two
    /// directed edges of equal weight. Nothing is inserted if either endpoint
    /// is missing.
    pub fn add_edge(
        &mut self,
        source: &str,
        target: &str,
        weight: Weight,
        directedness: Directedness,
    ) -> Result<(), GraphError> {
        let tail = self.require(source)?;
        let head = self.require(target)?;

        self.vertices[tail as usize].push_edge(head, weight);
        if directedness == Directedness::Bidirectional {
            self.vertices[head as usize].push_edge(tail, weight);
        }

        Ok(())
    }

    pub fn add_labeled_edge(&mut self, edge: &LabeledEdge) -> Result<(), GraphError> {
        self.add_edge(&edge.source, &edge.target, edge.weight, edge.directedness)
    }

    /// Releases all vertices and their edges. The graph can be reused
    /// afterwards.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.ids.clear();
    }

    pub fn number_of_vertices(&self) -> u32 {
        self.vertices.len() as u32
    }

    pub fn number_of_edges(&self) -> u32 {
        self.vertices
            .iter()
            .map(|vertex| vertex.number_of_edges() as u32)
            .sum::<u32>()
    }

    pub fn contains(&self, vertex: VertexId) -> bool {
        (vertex as usize) < self.vertices.len()
    }

    pub fn vertex(&self, vertex: VertexId) -> Option<&Vertex> {
        self.vertices.get(vertex as usize)
    }

    pub fn vertex_id(&self, label: &str) -> Option<VertexId> {
        self.ids.get(label).copied()
    }

    pub fn label(&self, vertex: VertexId) -> Option<&str> {
        self.vertex(vertex).map(Vertex::label)
    }

    pub fn vertices(&self) -> impl ExactSizeIterator<Item = (VertexId, &Vertex)> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .map(|(vertex, data)| (vertex as VertexId, data))
    }

    /// Outgoing edges of `tail`, most recently added first. Unknown vertices
    /// have no edges.
    pub fn edges(&self, tail: VertexId) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.vertex(tail)
            .into_iter()
            .flat_map(move |vertex| vertex.edges().map(move |edge| edge.set_tail(tail)))
    }

    fn require(&self, label: &str) -> Result<VertexId, GraphError> {
        self.vertex_id(label).ok_or_else(|| {
            warn!(label, "edge endpoint missing, graph left unchanged");
            GraphError::MissingVertex(label.to_string())
        })
    }
}
