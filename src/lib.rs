//! Minimum s–t cut solver for pixel-grid segmentation networks.
//!
//! A 2-D grid of interest values becomes a capacitated flow network with
//! one vertex per pixel plus a source and a sink terminal. Repeated BFS
//! augmenting paths saturate the network; a residual reachability scan
//! then yields the minimum cut separating foreground from background.

mod error;
mod flow;
mod grid;

pub use petgraph::graph::{EdgeIndex, NodeIndex};

pub use error::{FlowError, Result};
pub use flow::{
    find_augmenting_path, max_flow, min_cut, AugmentingPath, Capacity, EdgeFlow, EdgeState,
    FlowNetwork, MinCut,
};
pub use grid::{build_from_grid, cell_vertex};
