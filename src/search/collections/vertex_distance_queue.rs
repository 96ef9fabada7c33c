use std::{cmp::Reverse, collections::BinaryHeap};

use crate::graphs::{Distance, VertexId};

/// A priority queue handing out vertices by ascending tentative distance.
///
/// Implementations may or may not support decreasing the key of a queued
/// vertex; callers must therefore be able to cope with a vertex being popped
/// more than once.
pub trait VertexDistanceQueue {
    /// Records a (new, smaller) tentative distance for `vertex`.
    fn insert(&mut self, vertex: VertexId, distance: Distance);

    /// Removes and returns the vertex with the smallest distance, or none if
    /// every vertex has been handed out.
    fn pop(&mut self) -> Option<(VertexId, Distance)>;
}

/// Working set holding every vertex of the graph, unreached ones at
/// `Distance::MAX`. Before each selection the unprocessed tail is re-sorted
/// with a stable sort, so vertices of equal distance keep their relative
/// order.
pub struct SortedWorkingSet {
    entries: Vec<(VertexId, Distance)>,
    head: usize,
}

impl SortedWorkingSet {
    pub fn new(number_of_vertices: u32, source: VertexId) -> Self {
        let entries = (0..number_of_vertices)
            .map(|vertex| {
                let distance = if vertex == source { 0 } else { Distance::MAX };
                (vertex, distance)
            })
            .collect();

        SortedWorkingSet { entries, head: 0 }
    }
}

impl VertexDistanceQueue for SortedWorkingSet {
    fn insert(&mut self, vertex: VertexId, distance: Distance) {
        // Processed entries in front of head are final and not searched.
        if let Some(entry) = self.entries[self.head..]
            .iter_mut()
            .find(|(other, _)| *other == vertex)
        {
            entry.1 = distance;
        }
    }

    fn pop(&mut self) -> Option<(VertexId, Distance)> {
        self.entries[self.head..].sort_by_key(|&(_, distance)| distance);

        let entry = *self.entries.get(self.head)?;
        self.head += 1;

        Some(entry)
    }
}

/// Binary heap without decrease key. Stale entries stay in the heap and are
/// popped again later.
pub struct BinaryHeapQueue {
    heap: BinaryHeap<Reverse<(Distance, VertexId)>>,
}

impl BinaryHeapQueue {
    pub fn new(source: VertexId) -> Self {
        let mut heap = BinaryHeap::new();
        heap.push(Reverse((0, source)));
        BinaryHeapQueue { heap }
    }
}

impl VertexDistanceQueue for BinaryHeapQueue {
    fn insert(&mut self, vertex: VertexId, distance: Distance) {
        self.heap.push(Reverse((distance, vertex)));
    }

    fn pop(&mut self) -> Option<(VertexId, Distance)> {
        let Reverse((distance, vertex)) = self.heap.pop()?;

        Some((vertex, distance))
    }
}
