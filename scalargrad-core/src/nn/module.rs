use crate::error::ScalarGradError;
use crate::value::Value;

/// The base trait for all neural network modules (neurons, layers,
/// containers).
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass, building a fresh subgraph of nodes on every
    /// invocation.
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, ScalarGradError>;

    /// Returns all trainable leaf parameters of the module, order preserved
    /// across calls.
    fn parameters(&self) -> Vec<Value>;

    /// Sets every parameter's gradient accumulator to 0.
    ///
    /// Must be called before each new backward pass to avoid cross-pass
    /// gradient contamination; gradients otherwise persist across
    /// forward+backward cycles.
    fn zero_grad(&self) {
        for parameter in self.parameters() {
            parameter.zero_grad();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nn::Neuron;
    use crate::Graph;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_zero_grad_default_impl() {
        let graph = Graph::new();
        let mut rng = StdRng::seed_from_u64(7);
        let neuron = Neuron::new(&graph, 2, &mut rng);

        let input = vec![graph.value(1.0), graph.value(-1.0)];
        let output = neuron.forward(&input).unwrap();
        output[0].backward();
        assert!(neuron.parameters().iter().any(|p| p.grad() != 0.0));

        neuron.zero_grad();
        assert!(neuron.parameters().iter().all(|p| p.grad() == 0.0));
    }
}
