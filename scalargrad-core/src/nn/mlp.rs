use rand::Rng;

use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::nn::layer::Layer;
use crate::nn::module::Module;
use crate::value::Value;

/// A multi-layer perceptron: a stack of fully connected tanh layers.
///
/// `Mlp::new(&graph, 3, &[4, 4, 1], ..)` builds the layer chain
/// 3 -> 4 -> 4 -> 1.
#[derive(Debug)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    pub fn new<R: Rng + ?Sized>(
        graph: &Graph,
        in_features: usize,
        layer_sizes: &[usize],
        rng: &mut R,
    ) -> Self {
        let mut arities = Vec::with_capacity(layer_sizes.len() + 1);
        arities.push(in_features);
        arities.extend_from_slice(layer_sizes);
        let layers = arities
            .windows(2)
            .map(|pair| Layer::new(graph, pair[0], pair[1], rng))
            .collect();
        Mlp { layers }
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }
}

impl Module for Mlp {
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        let mut activations = input.to_vec();
        for layer in &self.layers {
            activations = layer.forward(&activations)?;
        }
        Ok(activations)
    }

    fn parameters(&self) -> Vec<Value> {
        self.layers
            .iter()
            .flat_map(|layer| layer.parameters())
            .collect()
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
