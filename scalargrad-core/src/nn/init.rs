use rand::Rng;

use crate::graph::Graph;
use crate::value::Value;

/// Creates a trainable leaf parameter initialised uniformly in [-1, 1).
///
/// The generator is injected by the caller so construction is reproducible
/// under a seeded RNG.
pub fn uniform<R: Rng + ?Sized>(graph: &Graph, rng: &mut R, label: &str) -> Value {
    graph.value_with_label(rng.gen_range(-1.0..1.0), label)
}
