use crate::graphs::VertexId;

/// One boolean per vertex of a graph, indexed by vertex id.
pub struct VertexFlags {
    flags: Vec<bool>,
}

impl VertexFlags {
    pub fn new(number_of_vertices: u32) -> Self {
        VertexFlags {
            flags: vec![false; number_of_vertices as usize],
        }
    }

    /// Sets the flag of `vertex` and returns whether it was already set.
    pub fn set(&mut self, vertex: VertexId) -> bool {
        let was_set = self.flags[vertex as usize];
        self.flags[vertex as usize] = true;
        was_set
    }

    pub fn unset(&mut self, vertex: VertexId) {
        self.flags[vertex as usize] = false;
    }

    pub fn get(&self, vertex: VertexId) -> bool {
        self.flags[vertex as usize]
    }
}
