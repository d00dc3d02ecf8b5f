use grid_mincut::{build_from_grid, max_flow, min_cut, Capacity};

fn main() -> grid_mincut::Result<()> {
    tracing_subscriber::fmt::init();

    // Interest values for a small image strip: the first row is anchored
    // to the foreground, the last row's values say how strongly each
    // pixel binds to the background.
    let interest = vec![vec![12, 4, 9], vec![6, 3, 8], vec![2, 10, 5]];

    let mut network = build_from_grid(
        &interest,
        |_| Capacity::Infinite,
        Capacity::Finite,
        |from, _| Capacity::Finite(from),
    )?;

    let flow = max_flow(&mut network)?;
    let cut = min_cut(&network)?;

    println!("digraph G{{");
    for edge in network.flows() {
        println!(
            "{} -> {} [label=\"{}/{}\"];",
            edge.from.index(),
            edge.to.index(),
            edge.used,
            edge.capacity
        );
    }
    println!("}}");

    println!("max flow: {flow}");
    println!(
        "cut edges: {:?}",
        cut.edges.iter().map(|edge| edge.index()).collect::<Vec<_>>()
    );
    Ok(())
}
