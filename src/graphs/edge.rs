use serde_derive::{Deserialize, Serialize};

use super::{Directedness, VertexId, Weight};

/// An outgoing edge as stored in the adjacency list of its tail vertex.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaillessEdge {
    head: VertexId,
    weight: Weight,
}

impl TaillessEdge {
    pub fn new(head: VertexId, weight: Weight) -> TaillessEdge {
        TaillessEdge { head, weight }
    }

    pub fn head(&self) -> VertexId {
        self.head
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn set_tail(&self, tail: VertexId) -> WeightedEdge {
        WeightedEdge {
            tail,
            head: self.head,
            weight: self.weight,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct WeightedEdge {
    tail: VertexId,
    head: VertexId,
    weight: Weight,
}

impl WeightedEdge {
    pub fn tail(&self) -> VertexId {
        self.tail
    }

    pub fn head(&self) -> VertexId {
        self.head
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }
}

/// An edge between two vertices named by label, e.g. as read from a graph
/// description file.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LabeledEdge {
    pub source: String,
    pub target: String,
    pub weight: Weight,
    #[serde(default)]
    pub directedness: Directedness,
}

impl LabeledEdge {
    pub fn bidirectional(source: &str, target: &str, weight: Weight) -> LabeledEdge {
        LabeledEdge {
            source: source.to_string(),
            target: target.to_string(),
            weight,
            directedness: Directedness::Bidirectional,
        }
    }

    pub fn directed(source: &str, target: &str, weight: Weight) -> LabeledEdge {
        LabeledEdge {
            source: source.to_string(),
            target: target.to_string(),
            weight,
            directedness: Directedness::Directed,
        }
    }
}
