use std::{error::Error, time::Duration};

use clap::Parser;
use indicatif::ParallelProgressIterator;
use rand::{rngs::StdRng, SeedableRng};
use rayon::prelude::*;
use route_paths::{
    graphs::graph_functions::validate_path,
    search::{
        backtracking::Backtracking,
        dijkstra::{Dijkstra, QueueKind},
    },
    utility::{average_duration, get_progressbar, random_graph, random_requests, timed_find_path},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Runs both searches on random requests over a random graph and checks
/// that they agree on reachability and produce valid paths. Backtracking
/// enumerates simple paths, keep graphs small.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 16)]
    vertices: u32,
    #[arg(short, long, default_value_t = 28)]
    edges: u32,
    #[arg(short, long, default_value_t = 1_000)]
    requests: u32,
    #[arg(long, default_value_t = 100)]
    max_weight: u32,
    #[arg(long, default_value_t = 0.5)]
    bidirectional_ratio: f64,
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

struct Timings {
    backtracking: Duration,
    sorted: Duration,
    heap: Duration,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mut rng = StdRng::seed_from_u64(args.seed);

    let graph = random_graph(
        &mut rng,
        args.vertices,
        args.edges,
        args.max_weight,
        args.bidirectional_ratio,
    )?;
    let requests = random_requests(&mut rng, &graph, args.requests);
    info!(
        vertices = graph.number_of_vertices(),
        edges = graph.number_of_edges(),
        requests = requests.len(),
        "generated graph"
    );

    let backtracking = Backtracking::new(&graph);
    let sorted = Dijkstra::with_queue(&graph, QueueKind::Sorted);
    let heap = Dijkstra::with_queue(&graph, QueueKind::Heap);

    let bar = get_progressbar("comparing searches", requests.len() as u64);
    let timings = requests
        .par_iter()
        .progress_with(bar)
        .map(|&(source, target)| -> Result<Timings, String> {
            let (backtracking_path, backtracking_time) =
                timed_find_path(&backtracking, source, target);
            let (sorted_path, sorted_time) = timed_find_path(&sorted, source, target);
            let (heap_path, heap_time) = timed_find_path(&heap, source, target);

            let backtracking_path = backtracking_path.map_err(|err| err.to_string())?;
            let sorted_path = sorted_path.map_err(|err| err.to_string())?;
            let heap_path = heap_path.map_err(|err| err.to_string())?;

            match (&backtracking_path, &sorted_path, &heap_path) {
                (Some(backtracking_path), Some(sorted_path), Some(heap_path)) => {
                    for path in [backtracking_path, sorted_path, heap_path] {
                        validate_path(&graph, source, target, path)?;
                    }
                    if sorted_path.weight() != heap_path.weight() {
                        return Err(format!(
                            "dijkstra weights differ for {} -> {}: {} vs {}",
                            source,
                            target,
                            sorted_path.weight(),
                            heap_path.weight()
                        ));
                    }
                }
                (None, None, None) => {}
                _ => {
                    return Err(format!(
                        "searches disagree on reachability of {} from {}",
                        target, source
                    ))
                }
            }

            Ok(Timings {
                backtracking: backtracking_time,
                sorted: sorted_time,
                heap: heap_time,
            })
        })
        .collect::<Result<Vec<_>, String>>()?;

    let average = |select: fn(&Timings) -> Duration| {
        average_duration(&timings.iter().map(select).collect::<Vec<_>>())
    };
    println!("{:<15} {:?}", "backtracking", average(|timing: &Timings| timing.backtracking));
    println!("{:<15} {:?}", "dijkstra", average(|timing: &Timings| timing.sorted));
    println!("{:<15} {:?}", "dijkstra heap", average(|timing: &Timings| timing.heap));

    Ok(())
}
