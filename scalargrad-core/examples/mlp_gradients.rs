//! # Gradients Through a Small MLP
//!
//! This example walks through the core workflow of `scalargrad-core`:
//! 1.  **Building an MLP** with a seeded RNG so the run is reproducible.
//! 2.  **Forward pass** over a single 3-feature sample.
//! 3.  **`zero_grad` + `backward`** to populate every parameter gradient.
//! 4.  **Graph snapshot** to inspect the recorded expression graph.
//!
//! Run it with:
//! `cargo run --example mlp_gradients`

use rand::rngs::StdRng;
use rand::SeedableRng;

use scalargrad_core::nn::{Mlp, Module};
use scalargrad_core::{Graph, ScalarGradError};

fn main() -> Result<(), ScalarGradError> {
    env_logger::init();

    let graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(42);

    // 3 inputs -> two hidden tanh layers of 4 -> 1 output.
    let mlp = Mlp::new(&graph, 3, &[4, 4, 1], &mut rng);
    println!("MLP built with {} parameters", mlp.parameters().len());

    let input = vec![graph.value(2.0), graph.value(3.0), graph.value(-1.0)];
    let output = mlp.forward(&input)?;
    println!("forward([2.0, 3.0, -1.0]) = {}", output[0].data());

    mlp.zero_grad();
    output[0].backward();

    for (i, parameter) in mlp.parameters().iter().enumerate() {
        println!(
            "param {:2} ({}): value = {:+.6}, grad = {:+.6}",
            i,
            parameter.label().unwrap_or_default(),
            parameter.data(),
            parameter.grad(),
        );
    }

    let snapshot = output[0].snapshot();
    println!(
        "expression graph: {} nodes, {} edges",
        snapshot.nodes.len(),
        snapshot.edges.len()
    );

    Ok(())
}
