mod cut;
mod edge;
mod network;
mod path;
mod solver;

pub use cut::{min_cut, MinCut};
pub use edge::{Capacity, EdgeState};
pub use network::{EdgeFlow, FlowNetwork};
pub use path::{find_augmenting_path, AugmentingPath};
pub use solver::max_flow;
