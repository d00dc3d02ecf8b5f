use tracing::{debug, trace};

use crate::error::{FlowError, Result};
use crate::flow::edge::Capacity;
use crate::flow::network::FlowNetwork;
use crate::flow::path::find_augmenting_path;

/// Saturates the network: repeatedly finds a shortest augmenting path and
/// pushes its bottleneck along it until no residual path remains. Returns
/// the total flow routed from source to sink.
///
/// Terminates because capacities are integers and every round pushes at
/// least one unit; the shortest-path search bounds the round count.
pub fn max_flow(network: &mut FlowNetwork) -> Result<u64> {
    let mut total = 0u64;
    let mut rounds = 0usize;

    while let Some(path) = find_augmenting_path(network)? {
        let mut bottleneck = Capacity::Infinite;
        for (&edge, &toward) in path.edges.iter().zip(&path.vertices[1..]) {
            bottleneck = bottleneck.min(network.residual_toward(edge, toward)?);
        }

        let amount = match bottleneck {
            // the path finder only admits residual-positive edges
            Capacity::Finite(0) => return Err(FlowError::ZeroBottleneck),
            Capacity::Infinite => return Err(FlowError::UnboundedFlow),
            Capacity::Finite(amount) => amount,
        };

        for (&edge, &from) in path.edges.iter().zip(&path.vertices) {
            network.push(edge, from, amount)?;
        }

        total += amount;
        rounds += 1;
        trace!(round = rounds, pushed = amount, hops = path.edges.len(), "augmented");
    }

    debug!(total, rounds, "network saturated");
    Ok(total)
}
