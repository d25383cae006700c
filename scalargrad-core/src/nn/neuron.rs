use rand::Rng;

use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::nn::init;
use crate::nn::module::Module;
use crate::ops::arithmetic::{add, mul};
use crate::value::Value;

/// A single tanh neuron: `tanh(sum(w_i * x_i) + b)`.
///
/// Weights and bias are leaf nodes created at construction time; every
/// forward pass appends a fresh weighted-sum subgraph on top of them.
#[derive(Debug)]
pub struct Neuron {
    weights: Vec<Value>,
    bias: Value,
}

impl Neuron {
    /// Creates a neuron with `in_features` weights and one bias, all drawn
    /// uniformly from [-1, 1) using the provided generator.
    pub fn new<R: Rng + ?Sized>(graph: &Graph, in_features: usize, rng: &mut R) -> Self {
        let weights = (0..in_features)
            .map(|_| init::uniform(graph, rng, "weight"))
            .collect();
        let bias = init::uniform(graph, rng, "bias");
        Neuron { weights, bias }
    }

    /// The weighted sum plus bias, squashed through tanh.
    pub fn activate(&self, input: &[Value]) -> Result<Value, ScalarGradError> {
        if input.len() != self.weights.len() {
            return Err(ScalarGradError::ArityMismatch {
                expected: self.weights.len(),
                actual: input.len(),
                operation: "Neuron::forward".to_string(),
            });
        }
        let mut sum = self.bias.clone();
        for (weight, x) in self.weights.iter().zip(input) {
            sum = add(&sum, &mul(weight, x)?)?;
        }
        Ok(sum.tanh())
    }
}

impl Module for Neuron {
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        Ok(vec![self.activate(input)?])
    }

    fn parameters(&self) -> Vec<Value> {
        let mut parameters = self.weights.clone();
        parameters.push(self.bias.clone());
        parameters
    }
}
