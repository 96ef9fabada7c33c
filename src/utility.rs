use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};
use rand::prelude::*;

use crate::{
    graphs::{Directedness, GraphError, LabeledGraph, VertexId, Weight},
    search::{path::Path, PathFinding, SearchError},
};

pub fn get_progressbar(job_name: &str, len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    bar.set_message(job_name.to_string());
    if let Ok(style) =
        ProgressStyle::with_template(" {msg} {wide_bar} {pos}/{len} estimated remaining: {eta_precise}")
    {
        bar.set_style(style);
    }
    bar
}

/// Random graph with vertices labeled `v0`, `v1`, ... and `number_of_edges`
/// edges between random distinct vertices, each of them bidirectional with
/// probability `bidirectional_ratio`.
pub fn random_graph<R: Rng>(
    rng: &mut R,
    number_of_vertices: u32,
    number_of_edges: u32,
    max_weight: Weight,
    bidirectional_ratio: f64,
) -> Result<LabeledGraph, GraphError> {
    let mut graph = LabeledGraph::new();
    for vertex in 0..number_of_vertices {
        graph.add_vertex(&format!("v{}", vertex), rng.gen(), rng.gen())?;
    }
    if number_of_vertices < 2 {
        return Ok(graph);
    }

    for _ in 0..number_of_edges {
        let tail = rng.gen_range(0..number_of_vertices);
        let head = rng.gen_range(0..number_of_vertices);
        if tail == head {
            continue;
        }
        let directedness = if rng.gen_bool(bidirectional_ratio) {
            Directedness::Bidirectional
        } else {
            Directedness::Directed
        };
        graph.add_edge(
            &format!("v{}", tail),
            &format!("v{}", head),
            rng.gen_range(0..=max_weight),
            directedness,
        )?;
    }

    Ok(graph)
}

pub fn random_requests<R: Rng>(
    rng: &mut R,
    graph: &LabeledGraph,
    number_of_requests: u32,
) -> Vec<(VertexId, VertexId)> {
    let number_of_vertices = graph.number_of_vertices();
    if number_of_vertices == 0 {
        return Vec::new();
    }

    (0..number_of_requests)
        .map(|_| {
            (
                rng.gen_range(0..number_of_vertices),
                rng.gen_range(0..number_of_vertices),
            )
        })
        .collect()
}

pub fn timed_find_path(
    path_finder: &dyn PathFinding,
    source: VertexId,
    target: VertexId,
) -> (Result<Option<Path>, SearchError>, Duration) {
    let start = Instant::now();
    let path = path_finder.find_path(source, target);
    (path, start.elapsed())
}

pub fn average_duration(durations: &[Duration]) -> Duration {
    if durations.is_empty() {
        return Duration::ZERO;
    }
    durations.iter().sum::<Duration>() / durations.len() as u32
}
