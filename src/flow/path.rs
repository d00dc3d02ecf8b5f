use std::collections::VecDeque;

use petgraph::graph::{EdgeIndex, NodeIndex};

use crate::error::Result;
use crate::flow::network::FlowNetwork;

/// One augmenting path from source to sink. Consecutive vertices share an
/// edge, so `vertices` is always one longer than `edges`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AugmentingPath {
    pub vertices: Vec<NodeIndex>,
    pub edges: Vec<EdgeIndex>,
}

/// Finds a source-to-sink path through residual-positive edges, or `None`
/// once the network is saturated.
///
/// BFS over the residual graph: an edge is traversable toward a candidate
/// vertex when its residual capacity in that direction is positive.
/// Adjacency is examined in insertion order, so the shortest-hop path
/// found is the same on every run.
pub fn find_augmenting_path(network: &FlowNetwork) -> Result<Option<AugmentingPath>> {
    let mut next_edge: Vec<Option<EdgeIndex>> = vec![None; network.vertex_count()];
    let mut visited = vec![false; network.vertex_count()];
    let mut queue = VecDeque::new();

    visited[network.source().index()] = true;
    queue.push_back(network.source());

    while let Some(vertex) = queue.pop_front() {
        for edge in network.adjacent(vertex)? {
            let next = network.other(edge, vertex)?;
            if visited[next.index()] || !network.residual_toward(edge, next)?.is_positive() {
                continue;
            }
            next_edge[next.index()] = Some(edge);
            if next == network.sink() {
                return Ok(Some(reconstruct(network, &next_edge)?));
            }
            visited[next.index()] = true;
            queue.push_back(next);
        }
    }

    Ok(None)
}

/// Walks the parent pointers backward from the sink, then reverses into a
/// source-to-sink path.
fn reconstruct(network: &FlowNetwork, next_edge: &[Option<EdgeIndex>]) -> Result<AugmentingPath> {
    let mut vertex = network.sink();
    let mut vertices = vec![vertex];
    let mut edges = vec![];

    while let Some(edge) = next_edge[vertex.index()] {
        vertex = network.other(edge, vertex)?;
        vertices.push(vertex);
        edges.push(edge);
    }

    vertices.reverse();
    edges.reverse();
    Ok(AugmentingPath { vertices, edges })
}
