use clap::ValueEnum;
use graphs::LabeledGraph;
use search::{
    backtracking::Backtracking,
    dijkstra::{Dijkstra, QueueKind},
    PathFinding,
};

pub mod graphs;
pub mod search;
pub mod utility;

#[derive(Debug, ValueEnum, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Backtracking,
    Dijkstra,
}

pub fn path_finder(
    graph: &LabeledGraph,
    algorithm: Algorithm,
    queue: QueueKind,
) -> Box<dyn PathFinding + '_> {
    match algorithm {
        Algorithm::Backtracking => Box::new(Backtracking::new(graph)),
        Algorithm::Dijkstra => Box::new(Dijkstra::with_queue(graph, queue)),
    }
}
