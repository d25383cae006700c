use crate::graph::Op;
use crate::ops::apply_unary_op;
use crate::value::Value;

// --- Forward Operation ---

impl Value {
    /// Rectified Linear Unit: `max(0, x)`.
    ///
    /// The derivative is 0 at and below zero (strict `>` comparison), a
    /// convention preserved for numeric comparability with other autodiff
    /// systems.
    pub fn relu(&self) -> Value {
        apply_unary_op(self, |x| if x < 0.0 { 0.0 } else { x }, Op::Relu)
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use crate::autograd::check_grad;
    use crate::Graph;

    #[test]
    fn test_relu_forward() {
        let graph = Graph::new();
        assert_eq!(graph.value(-2.0).relu().data(), 0.0);
        assert_eq!(graph.value(0.0).relu().data(), 0.0);
        assert_eq!(graph.value(3.5).relu().data(), 3.5);
        assert_eq!(graph.value(1.0).relu().op_symbol(), Some("ReLU"));
    }

    #[test]
    fn test_relu_backward_positive() {
        let graph = Graph::new();
        let x = graph.value(2.0);
        let y = x.relu();
        y.backward();
        assert_eq!(x.grad(), 1.0);
    }

    #[test]
    fn test_relu_backward_negative() {
        let graph = Graph::new();
        let x = graph.value(-2.0);
        let y = x.relu();
        y.backward();
        assert_eq!(x.grad(), 0.0);
    }

    #[test]
    fn test_relu_gradient_is_zero_at_threshold() {
        let graph = Graph::new();
        let x = graph.value(0.0);
        let y = x.relu();
        y.backward();
        assert_eq!(x.grad(), 0.0);
    }

    #[test]
    fn test_relu_backward_chain() {
        // y = relu(x * 2) * 3
        let graph = Graph::new();
        let x = graph.value(1.5);
        let y = &(&x * 2.0).relu() * 3.0;
        y.backward();
        assert_eq!(y.data(), 9.0);
        assert_eq!(x.grad(), 6.0);
    }

    #[test]
    fn test_relu_matches_finite_difference_near_boundary() {
        // just above and just below zero, with a step that stays on one side
        check_grad(|inputs| Ok(inputs[0].relu()), &[1e-3], 1e-4, 1e-6).unwrap();
        check_grad(|inputs| Ok(inputs[0].relu()), &[-1e-3], 1e-4, 1e-6).unwrap();
    }
}
