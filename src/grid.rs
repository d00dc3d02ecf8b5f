use itertools::iproduct;
use petgraph::graph::NodeIndex;
use tracing::debug;

use crate::error::{FlowError, Result};
use crate::flow::{Capacity, FlowNetwork};

/// The vertex holding grid cell `(row, col)` in a network built by
/// [`build_from_grid`]. Row-major: cells follow the source terminal and
/// precede the sink terminal.
pub fn cell_vertex(cols: usize, row: usize, col: usize) -> NodeIndex {
    NodeIndex::new(1 + row * cols + col)
}

/// Builds the segmentation network for a rectangular grid of interest
/// values: one vertex per cell, the source feeding the first row, the
/// last row draining into the sink, and 4-connected neighbor edges in
/// both directions.
///
/// The capacity formulas stay with the caller: `source_capacity` maps a
/// first-row value, `sink_capacity` a last-row value, and
/// `neighbor_capacity` an ordered pair of adjacent values to an edge
/// capacity. Typically one of the three returns [`Capacity::Infinite`]
/// for structural edges.
pub fn build_from_grid<S, T, N>(
    values: &[Vec<u64>],
    source_capacity: S,
    sink_capacity: T,
    neighbor_capacity: N,
) -> Result<FlowNetwork>
where
    S: Fn(u64) -> Capacity,
    T: Fn(u64) -> Capacity,
    N: Fn(u64, u64) -> Capacity,
{
    let rows = values.len();
    if rows == 0 || values[0].is_empty() {
        return Err(FlowError::EmptyGrid);
    }
    let cols = values[0].len();
    if values.iter().any(|row| row.len() != cols) {
        return Err(FlowError::RaggedGrid);
    }

    let mut network = FlowNetwork::new(rows * cols + 2)?;
    let source = network.source();
    let sink = network.sink();

    for col in 0..cols {
        network.add_edge(
            source,
            cell_vertex(cols, 0, col),
            source_capacity(values[0][col]),
        )?;
    }

    for (row, col) in iproduct!(0..rows, 0..cols) {
        let here = values[row][col];
        let cell = cell_vertex(cols, row, col);
        if col + 1 < cols {
            let right = values[row][col + 1];
            let neighbor = cell_vertex(cols, row, col + 1);
            network.add_edge(cell, neighbor, neighbor_capacity(here, right))?;
            network.add_edge(neighbor, cell, neighbor_capacity(right, here))?;
        }
        if row + 1 < rows {
            let below = values[row + 1][col];
            let neighbor = cell_vertex(cols, row + 1, col);
            network.add_edge(cell, neighbor, neighbor_capacity(here, below))?;
            network.add_edge(neighbor, cell, neighbor_capacity(below, here))?;
        }
    }

    for col in 0..cols {
        network.add_edge(
            cell_vertex(cols, rows - 1, col),
            sink,
            sink_capacity(values[rows - 1][col]),
        )?;
    }

    debug!(rows, cols, edges = network.edge_count(), "grid network built");
    Ok(network)
}
