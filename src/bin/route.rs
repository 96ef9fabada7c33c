use std::{error::Error, path::PathBuf, process::ExitCode};

use clap::Parser;
use route_paths::{
    graphs::graph_factory::GraphFactory, path_finder, search::dijkstra::QueueKind, Algorithm,
};
use tracing_subscriber::EnvFilter;

/// Finds a route between two named locations. Without a graph file the
/// built-in map of ten US cities is searched.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Graph description in .json format
    #[arg(short, long)]
    graph: Option<PathBuf>,
    #[arg(short, long)]
    start: String,
    #[arg(short, long)]
    target: String,
    #[arg(short, long, value_enum, default_value_t = Algorithm::Dijkstra)]
    algorithm: Algorithm,
    /// Working set used by dijkstra
    #[arg(short, long, value_enum, default_value_t = QueueKind::Sorted)]
    queue: QueueKind,
    /// Print the path as json
    #[arg(short, long)]
    json: bool,
}

fn main() -> Result<ExitCode, Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let graph = match &args.graph {
        Some(path) => GraphFactory::from_json_file(path)?,
        None => GraphFactory::us_cities()?,
    };

    let start = graph
        .vertex_id(&args.start)
        .ok_or_else(|| format!("no vertex labeled '{}'", args.start))?;
    let target = graph
        .vertex_id(&args.target)
        .ok_or_else(|| format!("no vertex labeled '{}'", args.target))?;

    let path_finder = path_finder(&graph, args.algorithm, args.queue);
    let Some(path) = path_finder.find_path(start, target)? else {
        eprintln!("Failed to retrieve path");
        return Ok(ExitCode::FAILURE);
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&path)?);
    } else {
        println!("Path found:");
        path.iter().for_each(|label| println!(" {}", label));
        println!("Total weight: {}", path.weight());
    }

    Ok(ExitCode::SUCCESS)
}
