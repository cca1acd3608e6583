use std::collections::HashMap;

use tracing::{debug, trace};

use crate::entity::Node;
use crate::error::{GraphError, Result};
use crate::graph::Graph;
use crate::id::{EdgeId, NodeId};

/// A minimum-weight path, as the ordered edges from start to end.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath {
    edges: Vec<EdgeId>,
    total_weight: f64,
}

impl ShortestPath {
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    pub fn into_edges(self) -> Vec<EdgeId> {
        self.edges
    }

    /// Sum of the edge weights along the path.
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Hop count.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// True for the trivial path from a node to itself.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Per-call working state for one node.
#[derive(Debug, Clone, Copy)]
struct Scratch {
    distance: f64,
    visited: bool,
    /// Edge that produced the current best distance, and the node it came from.
    best_incoming: Option<(EdgeId, NodeId)>,
}

impl Scratch {
    const UNREACHED: Scratch = Scratch {
        distance: f64::INFINITY,
        visited: false,
        best_incoming: None,
    };
}

/// Dijkstra shortest path from `start` to `end`.
///
/// `weight(from, to)` must return a non-negative weight for stepping between
/// two adjacent nodes. Directed graphs step along `from → to`; undirected
/// graphs step to the opposite endpoint of each incident edge.
///
/// Returns `Ok(None)` when `end` is unreachable, and an empty path when
/// `start == end`. Fails with `NodeNotFound` if either endpoint is missing,
/// or `InvalidWeight` if the callback yields a negative or NaN weight.
///
/// All working state is private to the call; node attributes and meta are
/// never touched, so concurrent reads of the same graph do not interfere.
pub fn shortest_path<W>(
    graph: &Graph,
    start: impl Into<NodeId>,
    end: impl Into<NodeId>,
    mut weight: W,
) -> Result<Option<ShortestPath>>
where
    W: FnMut(&Node, &Node) -> f64,
{
    let start = start.into();
    let end = end.into();
    for id in [start, end] {
        if !graph.has_node(id) {
            return Err(GraphError::NodeNotFound(id));
        }
    }

    let mut scratch: HashMap<NodeId, Scratch> = graph
        .node_ids()
        .iter()
        .map(|&id| (id, Scratch::UNREACHED))
        .collect();
    if let Some(s) = scratch.get_mut(&start) {
        s.distance = 0.0;
    }

    // Working set in ascending id order; extraction is a linear scan.
    let mut unvisited: Vec<NodeId> = graph.node_ids().to_vec();

    while let Some(current) = pop_min(&mut unvisited, &scratch) {
        let current_distance = scratch[&current].distance;
        if current_distance == f64::INFINITY {
            debug!(%start, %end, "no path: remaining nodes unreachable");
            return Ok(None);
        }
        if let Some(s) = scratch.get_mut(&current) {
            s.visited = true;
        }
        if current == end {
            break;
        }

        let current_node = graph_node(graph, current)?;
        for (edge, neighbor) in graph.neighbors(current)? {
            if scratch.get(&neighbor).map_or(true, |s| s.visited) {
                continue;
            }

            let step = weight(current_node, graph_node(graph, neighbor)?);
            if step.is_nan() || step < 0.0 {
                return Err(GraphError::InvalidWeight {
                    from: current,
                    to: neighbor,
                    weight: step,
                });
            }

            let total = current_distance + step;
            if let Some(s) = scratch.get_mut(&neighbor) {
                if total < s.distance {
                    trace!(edge = %edge.id(), %neighbor, distance = total, "relaxed");
                    s.distance = total;
                    s.best_incoming = Some((edge.id(), current));
                }
            }
        }
    }

    let path = reconstruct_path(&scratch, start, end);
    debug!(%start, %end, hops = path.len(), weight = path.total_weight, "shortest path found");
    Ok(Some(path))
}

/// Shortest path with a search heuristic.
///
/// The heuristic is accepted so callers can already pass one, but it does not
/// influence the search yet: the result is identical to [`shortest_path`].
// TODO: order the frontier by distance + heuristic(node, end) (A*).
pub fn shortest_path_with_heuristic<W, H>(
    graph: &Graph,
    start: impl Into<NodeId>,
    end: impl Into<NodeId>,
    weight: W,
    _heuristic: H,
) -> Result<Option<ShortestPath>>
where
    W: FnMut(&Node, &Node) -> f64,
    H: FnMut(&Node, &Node) -> f64,
{
    shortest_path(graph, start, end, weight)
}

impl Graph {
    /// See [`shortest_path`].
    pub fn shortest_path<W>(
        &self,
        start: impl Into<NodeId>,
        end: impl Into<NodeId>,
        weight: W,
    ) -> Result<Option<ShortestPath>>
    where
        W: FnMut(&Node, &Node) -> f64,
    {
        shortest_path(self, start, end, weight)
    }
}

fn graph_node(graph: &Graph, id: NodeId) -> Result<&Node> {
    graph.node(id).ok_or(GraphError::NodeNotFound(id))
}

/// Remove and return the unvisited node with the smallest distance. Ties go
/// to the first one in scan order.
fn pop_min(unvisited: &mut Vec<NodeId>, scratch: &HashMap<NodeId, Scratch>) -> Option<NodeId> {
    if unvisited.is_empty() {
        return None;
    }

    let mut min_index = 0;
    let mut min_distance = f64::INFINITY;
    for (i, id) in unvisited.iter().enumerate() {
        let distance = scratch[id].distance;
        if distance < min_distance {
            min_distance = distance;
            min_index = i;
        }
    }

    Some(unvisited.remove(min_index))
}

/// Walk best-incoming edges back from `end` to `start`.
fn reconstruct_path(
    scratch: &HashMap<NodeId, Scratch>,
    start: NodeId,
    end: NodeId,
) -> ShortestPath {
    let mut edges = Vec::new();
    let mut current = end;

    while current != start {
        match scratch[&current].best_incoming {
            Some((edge, previous)) => {
                edges.push(edge);
                current = previous;
            }
            None => break,
        }
    }

    edges.reverse();
    ShortestPath {
        edges,
        total_weight: scratch[&end].distance,
    }
}
