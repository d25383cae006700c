use rand::Rng;

use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::nn::module::Module;
use crate::nn::neuron::Neuron;
use crate::value::Value;

/// A fully connected layer of independent tanh neurons sharing one input.
#[derive(Debug)]
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    pub fn new<R: Rng + ?Sized>(
        graph: &Graph,
        in_features: usize,
        out_features: usize,
        rng: &mut R,
    ) -> Self {
        let neurons = (0..out_features)
            .map(|_| Neuron::new(graph, in_features, rng))
            .collect();
        Layer { neurons }
    }

    pub fn out_features(&self) -> usize {
        self.neurons.len()
    }
}

impl Module for Layer {
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        self.neurons
            .iter()
            .map(|neuron| neuron.activate(input))
            .collect()
    }

    fn parameters(&self) -> Vec<Value> {
        self.neurons
            .iter()
            .flat_map(|neuron| neuron.parameters())
            .collect()
    }
}
