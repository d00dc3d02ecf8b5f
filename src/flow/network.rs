use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use crate::error::{FlowError, Result};
use crate::flow::edge::{Capacity, EdgeState, Orientation};

/// A capacitated s–t flow network.
///
/// Edges live in one undirected arena and appear in both endpoints'
/// adjacency, while flow direction is always derived from the stored
/// `from -> to` orientation plus the query vertex. Vertex 0 is the source
/// terminal, the highest-indexed vertex the sink terminal.
#[derive(Debug, Clone)]
pub struct FlowNetwork {
    graph: UnGraph<(), EdgeState>,
    source: NodeIndex,
    sink: NodeIndex,
}

/// Per-edge flow view for external consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeFlow {
    pub from: NodeIndex,
    pub to: NodeIndex,
    pub used: u64,
    pub capacity: Capacity,
}

impl FlowNetwork {
    /// Creates a network with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Result<Self> {
        if vertex_count < 2 {
            return Err(FlowError::TooFewVertices(vertex_count));
        }
        let mut graph = UnGraph::with_capacity(vertex_count, 0);
        for _ in 0..vertex_count {
            graph.add_node(());
        }
        Ok(Self {
            graph,
            source: NodeIndex::new(0),
            sink: NodeIndex::new(vertex_count - 1),
        })
    }

    pub fn source(&self) -> NodeIndex {
        self.source
    }

    pub fn sink(&self) -> NodeIndex {
        self.sink
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Adds an edge of the given capacity with no flow routed yet.
    /// Parallel edges are allowed, self-loops are not.
    pub fn add_edge(
        &mut self,
        from: NodeIndex,
        to: NodeIndex,
        capacity: Capacity,
    ) -> Result<EdgeIndex> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        if from == to {
            return Err(FlowError::SelfLoop(from.index()));
        }
        Ok(self.graph.add_edge(from, to, EdgeState::new(capacity)))
    }

    /// The stored `(from, to)` orientation of an edge.
    pub fn endpoints(&self, edge: EdgeIndex) -> Result<(NodeIndex, NodeIndex)> {
        self.graph
            .edge_endpoints(edge)
            .ok_or(FlowError::UnknownEdge(edge.index()))
    }

    /// The endpoint of `edge` opposite to `vertex`.
    pub fn other(&self, edge: EdgeIndex, vertex: NodeIndex) -> Result<NodeIndex> {
        let (from, to) = self.endpoints(edge)?;
        if vertex == from {
            Ok(to)
        } else if vertex == to {
            Ok(from)
        } else {
            Err(FlowError::NotAnEndpoint {
                vertex: vertex.index(),
                edge: edge.index(),
            })
        }
    }

    /// Residual capacity oriented so that pushing flow moves toward
    /// `toward`.
    pub fn residual_toward(&self, edge: EdgeIndex, toward: NodeIndex) -> Result<Capacity> {
        let orientation = self.orient(edge, toward)?;
        Ok(self.state(edge)?.residual(orientation))
    }

    /// Routes `amount` additional flow out of `from_vertex` across `edge`:
    /// forward usage when `from_vertex` is the stored from, cancellation
    /// when it is the stored to.
    pub fn push(&mut self, edge: EdgeIndex, from_vertex: NodeIndex, amount: u64) -> Result<()> {
        let toward = self.other(edge, from_vertex)?;
        let orientation = self.orient(edge, toward)?;
        let state = self
            .graph
            .edge_weight_mut(edge)
            .ok_or(FlowError::UnknownEdge(edge.index()))?;
        state.push(orientation, amount)
    }

    pub fn edge_state(&self, edge: EdgeIndex) -> Result<&EdgeState> {
        self.state(edge)
    }

    /// Edges incident to `vertex`, in insertion order. The search's
    /// tie-breaking is order-sensitive, so this must stay deterministic.
    pub fn adjacent(&self, vertex: NodeIndex) -> Result<Vec<EdgeIndex>> {
        self.check_vertex(vertex)?;
        let mut edges: Vec<EdgeIndex> = self.graph.edges(vertex).map(|edge| edge.id()).collect();
        // petgraph walks adjacency chains newest-first; edge indices
        // recover insertion order
        edges.sort_unstable_by_key(|edge| edge.index());
        Ok(edges)
    }

    /// Every edge exactly once, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeIndex> + '_ {
        self.graph.edge_indices()
    }

    /// Per-edge `(from, to, used, capacity)` for visualization or other
    /// downstream consumers.
    pub fn flows(&self) -> impl Iterator<Item = EdgeFlow> + '_ {
        self.graph.edge_references().map(|edge| EdgeFlow {
            from: edge.source(),
            to: edge.target(),
            used: edge.weight().used(),
            capacity: edge.weight().capacity(),
        })
    }

    fn check_vertex(&self, vertex: NodeIndex) -> Result<()> {
        if vertex.index() >= self.graph.node_count() {
            return Err(FlowError::VertexOutOfRange {
                vertex: vertex.index(),
                vertex_count: self.graph.node_count(),
            });
        }
        Ok(())
    }

    fn state(&self, edge: EdgeIndex) -> Result<&EdgeState> {
        self.graph
            .edge_weight(edge)
            .ok_or(FlowError::UnknownEdge(edge.index()))
    }

    fn orient(&self, edge: EdgeIndex, toward: NodeIndex) -> Result<Orientation> {
        let (from, to) = self.endpoints(edge)?;
        if toward == to {
            Ok(Orientation::Forward)
        } else if toward == from {
            Ok(Orientation::Backward)
        } else {
            Err(FlowError::NotAnEndpoint {
                vertex: toward.index(),
                edge: edge.index(),
            })
        }
    }
}
