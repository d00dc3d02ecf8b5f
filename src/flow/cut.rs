use std::collections::VecDeque;

use petgraph::graph::{EdgeIndex, NodeIndex};

use crate::error::{FlowError, Result};
use crate::flow::edge::Capacity;
use crate::flow::network::FlowNetwork;

/// The minimum cut of a saturated network: the vertices still residually
/// reachable from the source, the rest, and the crossing edges oriented
/// from the reachable side. `capacity` is the total capacity of the
/// crossing edges, which equals the maximum flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinCut {
    pub source_side: Vec<NodeIndex>,
    pub sink_side: Vec<NodeIndex>,
    pub edges: Vec<EdgeIndex>,
    pub capacity: u64,
}

/// Extracts the minimum cut after [`max_flow`](crate::max_flow) has run.
///
/// One more BFS with the solver's traversability rule computes the set of
/// vertices still connected to the source in the residual graph; the cut
/// is every edge leaving that set. Pure read of the network state, so
/// re-extraction returns the identical cut.
pub fn min_cut(network: &FlowNetwork) -> Result<MinCut> {
    let mut reachable = vec![false; network.vertex_count()];
    let mut queue = VecDeque::new();

    reachable[network.source().index()] = true;
    queue.push_back(network.source());

    while let Some(vertex) = queue.pop_front() {
        for edge in network.adjacent(vertex)? {
            let next = network.other(edge, vertex)?;
            if !reachable[next.index()] && network.residual_toward(edge, next)?.is_positive() {
                reachable[next.index()] = true;
                queue.push_back(next);
            }
        }
    }

    if reachable[network.sink().index()] {
        return Err(FlowError::SinkStillReachable);
    }

    let mut edges = vec![];
    let mut capacity = 0u64;
    for edge in network.edges() {
        let (from, to) = network.endpoints(edge)?;
        if reachable[from.index()] && !reachable[to.index()] {
            match network.edge_state(edge)?.capacity() {
                Capacity::Finite(c) => capacity += c,
                // an infinite crossing edge would have kept its far
                // endpoint reachable
                Capacity::Infinite => return Err(FlowError::InfiniteCutEdge(edge.index())),
            }
            edges.push(edge);
        }
    }

    let (source_side, sink_side): (Vec<_>, Vec<_>) = (0..network.vertex_count())
        .map(NodeIndex::new)
        .partition(|vertex| reachable[vertex.index()]);

    Ok(MinCut {
        source_side,
        sink_side,
        edges,
        capacity,
    })
}

#[cfg(test)]
mod tests {
    use petgraph::graph::NodeIndex;

    use crate::error::FlowError;
    use crate::flow::cut::min_cut;
    use crate::flow::edge::Capacity;
    use crate::flow::network::FlowNetwork;
    use crate::flow::solver::max_flow;

    fn vertex(index: usize) -> NodeIndex {
        NodeIndex::new(index)
    }

    #[test]
    fn chain_cut_is_the_narrow_edge() {
        let mut network = FlowNetwork::new(3).unwrap();
        network
            .add_edge(vertex(0), vertex(1), Capacity::Finite(5))
            .unwrap();
        let narrow = network
            .add_edge(vertex(1), vertex(2), Capacity::Finite(3))
            .unwrap();

        let flow = max_flow(&mut network).unwrap();
        let cut = min_cut(&network).unwrap();

        assert_eq!(cut.edges, vec![narrow]);
        assert_eq!(cut.capacity, 3);
        assert_eq!(cut.capacity, flow);
        assert_eq!(cut.source_side, vec![vertex(0), vertex(1)]);
        assert_eq!(cut.sink_side, vec![vertex(2)]);
    }

    #[test]
    fn parallel_edges_are_both_cut() {
        let mut network = FlowNetwork::new(2).unwrap();
        let a = network
            .add_edge(vertex(0), vertex(1), Capacity::Finite(4))
            .unwrap();
        let b = network
            .add_edge(vertex(0), vertex(1), Capacity::Finite(6))
            .unwrap();

        max_flow(&mut network).unwrap();
        let cut = min_cut(&network).unwrap();

        assert_eq!(cut.edges, vec![a, b]);
        assert_eq!(cut.capacity, 10);
    }

    #[test]
    fn unsolved_network_is_rejected() {
        let mut network = FlowNetwork::new(3).unwrap();
        network
            .add_edge(vertex(0), vertex(1), Capacity::Finite(5))
            .unwrap();
        network
            .add_edge(vertex(1), vertex(2), Capacity::Finite(3))
            .unwrap();

        let err = min_cut(&network).unwrap_err();
        assert!(matches!(err, FlowError::SinkStillReachable));
    }

    #[test]
    fn re_extraction_returns_the_identical_cut() {
        let mut network = FlowNetwork::new(4).unwrap();
        network
            .add_edge(vertex(0), vertex(1), Capacity::Finite(3))
            .unwrap();
        network
            .add_edge(vertex(0), vertex(2), Capacity::Finite(2))
            .unwrap();
        network
            .add_edge(vertex(1), vertex(3), Capacity::Finite(2))
            .unwrap();
        network
            .add_edge(vertex(2), vertex(3), Capacity::Finite(4))
            .unwrap();

        max_flow(&mut network).unwrap();
        assert_eq!(min_cut(&network).unwrap(), min_cut(&network).unwrap());
    }

    #[test]
    fn infinite_edges_stay_on_one_side() {
        let mut network = FlowNetwork::new(4).unwrap();
        network
            .add_edge(vertex(0), vertex(1), Capacity::Infinite)
            .unwrap();
        let bridge = network
            .add_edge(vertex(1), vertex(2), Capacity::Finite(2))
            .unwrap();
        network
            .add_edge(vertex(2), vertex(3), Capacity::Infinite)
            .unwrap();

        let flow = max_flow(&mut network).unwrap();
        let cut = min_cut(&network).unwrap();

        assert_eq!(flow, 2);
        assert_eq!(cut.edges, vec![bridge]);
        assert_eq!(cut.source_side, vec![vertex(0), vertex(1)]);
    }
}
