use super::{edge::TaillessEdge, VertexId, Weight};

/// A named location. The coordinates are carried along but never looked at
/// by the searches.
#[derive(Clone, Debug)]
pub struct Vertex {
    label: String,
    x: i32,
    y: i32,
    // Insertion order. Readers that want the newest edge first iterate in
    // reverse.
    edges: Vec<TaillessEdge>,
}

impl Vertex {
    pub fn new(label: &str, x: i32, y: i32) -> Vertex {
        Vertex {
            label: label.to_string(),
            x,
            y,
            edges: Vec::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn coordinates(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn number_of_edges(&self) -> usize {
        self.edges.len()
    }

    /// Outgoing edges, most recently added first.
    pub fn edges(&self) -> impl ExactSizeIterator<Item = &TaillessEdge> + '_ {
        self.edges.iter().rev()
    }

    /// The outgoing edge at `index` in newest-first order.
    pub fn nth_edge(&self, index: usize) -> Option<&TaillessEdge> {
        let position = self.edges.len().checked_sub(index + 1)?;
        self.edges.get(position)
    }

    pub(super) fn push_edge(&mut self, head: VertexId, weight: Weight) {
        self.edges.push(TaillessEdge::new(head, weight));
    }
}
