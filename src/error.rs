//! Error types for flow-network construction and solving.

use thiserror::Error;

use crate::flow::Capacity;

/// Result type for flow-network operations.
pub type Result<T> = std::result::Result<T, FlowError>;

/// Errors raised while building or solving a flow network.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    /// A network needs a source and a sink.
    #[error("network needs at least two vertices, got {0}")]
    TooFewVertices(usize),

    /// Vertex index outside the range fixed at construction.
    #[error("vertex {vertex} out of range for a network of {vertex_count} vertices")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    /// Self-loops carry no flow and are rejected.
    #[error("self-loop requested on vertex {0}")]
    SelfLoop(usize),

    /// Edge index that does not belong to this network.
    #[error("unknown edge index {0}")]
    UnknownEdge(usize),

    /// The vertex given for an edge operation is neither endpoint.
    #[error("vertex {vertex} is not an endpoint of edge {edge}")]
    NotAnEndpoint { vertex: usize, edge: usize },

    /// Pushing forward would exceed the edge capacity.
    #[error("pushing {amount} would exceed capacity {capacity} (used {used})")]
    PushExceedsCapacity {
        amount: u64,
        used: u64,
        capacity: Capacity,
    },

    /// Pushing backward would cancel more flow than is routed.
    #[error("pushing {amount} back would drop used flow {used} below zero")]
    PushBelowZero { amount: u64, used: u64 },

    /// The grid has no cells.
    #[error("grid has no cells")]
    EmptyGrid,

    /// Grid rows must all have the same length.
    #[error("grid rows have unequal lengths")]
    RaggedGrid,

    /// An augmenting path produced a zero bottleneck; the residual check
    /// admitted a saturated edge.
    #[error("augmenting path produced a zero bottleneck")]
    ZeroBottleneck,

    /// Source and sink are joined by infinite-capacity edges only.
    #[error("maximum flow is unbounded: found an all-infinite augmenting path")]
    UnboundedFlow,

    /// The sink is still residually reachable after saturation.
    #[error("sink still reachable after saturation")]
    SinkStillReachable,

    /// An infinite-capacity edge can never cross a finite cut.
    #[error("infinite-capacity edge {0} crossed the minimum cut")]
    InfiniteCutEdge(usize),
}
