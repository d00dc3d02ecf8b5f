//! Property-based tests: the solver's invariants must hold for every
//! small grid, not just the hand-picked scenarios.

use grid_mincut::{
    build_from_grid, find_augmenting_path, max_flow, min_cut, Capacity, FlowNetwork, NodeIndex,
};
use proptest::prelude::*;

// Strategy for small rectangular grids of interest values.
fn grid_strategy() -> impl Strategy<Value = Vec<Vec<u64>>> {
    (1usize..4, 1usize..4).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(prop::collection::vec(0u64..50, cols), rows)
    })
}

fn solve(values: &[Vec<u64>]) -> (FlowNetwork, u64) {
    let mut network = build_from_grid(values, Capacity::Finite, Capacity::Finite, |_, _| {
        Capacity::Infinite
    })
    .unwrap();
    let flow = max_flow(&mut network).unwrap();
    (network, flow)
}

proptest! {
    #[test]
    fn flow_equals_cut_capacity(values in grid_strategy()) {
        let (network, flow) = solve(&values);
        let cut = min_cut(&network).unwrap();
        prop_assert_eq!(flow, cut.capacity);
    }

    #[test]
    fn flow_is_conserved_and_bounded(values in grid_strategy()) {
        let (network, _) = solve(&values);

        for edge in network.flows() {
            if let Capacity::Finite(capacity) = edge.capacity {
                prop_assert!(edge.used <= capacity);
            }
        }

        for index in 1..network.vertex_count() - 1 {
            let vertex = NodeIndex::new(index);
            let inflow: u64 = network
                .flows()
                .filter(|edge| edge.to == vertex)
                .map(|edge| edge.used)
                .sum();
            let outflow: u64 = network
                .flows()
                .filter(|edge| edge.from == vertex)
                .map(|edge| edge.used)
                .sum();
            prop_assert_eq!(inflow, outflow);
        }
    }

    #[test]
    fn saturation_is_complete(values in grid_strategy()) {
        let (network, _) = solve(&values);
        prop_assert!(find_augmenting_path(&network).unwrap().is_none());
    }

    #[test]
    fn flow_matches_the_weaker_terminal_rank(values in grid_strategy()) {
        // infinite neighbor edges merge the interior into one blob, so the
        // only binding cuts are the two terminal ranks
        let (_, flow) = solve(&values);
        let source_rank: u64 = values[0].iter().sum();
        let sink_rank: u64 = values[values.len() - 1].iter().sum();
        prop_assert_eq!(flow, source_rank.min(sink_rank));
    }
}
