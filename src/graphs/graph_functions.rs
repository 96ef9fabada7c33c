use itertools::Itertools;

use super::{Distance, LabeledGraph, VertexId, Weight};
use crate::search::path::Path;

/// Check if a path is a valid simple route from `source` to `target`.
pub fn validate_path(
    graph: &LabeledGraph,
    source: VertexId,
    target: VertexId,
    path: &Path,
) -> Result<(), String> {
    let source_label = graph
        .label(source)
        .ok_or_else(|| format!("source {} not in graph", source))?;
    let target_label = graph
        .label(target)
        .ok_or_else(|| format!("target {} not in graph", target))?;

    // Ensure fist and last vertex of path are source and target of request.
    if path.front() != Some(source_label) {
        return Err("first vertex of path is not source of request".to_string());
    }
    if path.back() != Some(target_label) {
        return Err("last vertex of path is not target of request".to_string());
    }

    if !path.iter().all_unique() {
        return Err("path visits a vertex twice".to_string());
    }

    let vertices = path
        .iter()
        .map(|label| {
            graph
                .vertex_id(label)
                .ok_or_else(|| format!("vertex {} not in graph", label))
        })
        .collect::<Result<Vec<_>, _>>()?;

    // check if there is an edge between consecutive path vertices and that
    // the recorded weight can be achieved with them.
    let mut lightest: Distance = 0;
    let mut heaviest: Distance = 0;
    for (tail, head) in vertices.iter().copied().tuple_windows() {
        let weights = edge_weights(graph, tail, head);
        let (Some(min), Some(max)) = (weights.iter().min(), weights.iter().max()) else {
            return Err(format!(
                "no edge between {} and {} found",
                graph.label(tail).unwrap_or_default(),
                graph.label(head).unwrap_or_default()
            ));
        };
        lightest = lightest.saturating_add(Distance::from(*min));
        heaviest = heaviest.saturating_add(Distance::from(*max));
    }

    if path.weight() < lightest || path.weight() > heaviest {
        return Err("wrong path weight".to_string());
    }

    Ok(())
}

/// Weight of a path when always taking the lightest edge between consecutive
/// vertices. `None` if a vertex is unknown or two consecutive vertices are
/// not connected.
pub fn path_weight(graph: &LabeledGraph, path: &Path) -> Option<Distance> {
    path.iter()
        .map(|label| graph.vertex_id(label))
        .collect::<Option<Vec<_>>>()?
        .into_iter()
        .tuple_windows()
        .map(|(tail, head)| edge_weights(graph, tail, head).into_iter().min())
        .try_fold(0 as Distance, |total, weight| {
            Some(total.saturating_add(Distance::from(weight?)))
        })
}

/// Weights of all edges from `tail` to `head`.
pub fn edge_weights(graph: &LabeledGraph, tail: VertexId, head: VertexId) -> Vec<Weight> {
    graph
        .edges(tail)
        .filter(|edge| edge.head() == head)
        .map(|edge| edge.weight())
        .collect()
}
