use crate::graph::Op;
use crate::ops::apply_unary_op;
use crate::value::Value;

/// Negative-side slope used by [`Value::leaky_relu`].
pub const DEFAULT_LEAKY_SLOPE: f64 = 0.01;

// --- Forward Operation ---

impl Value {
    /// Leaky ReLU with the default slope of 0.01.
    pub fn leaky_relu(&self) -> Value {
        self.leaky_relu_with_slope(DEFAULT_LEAKY_SLOPE)
    }

    /// `x` for positive inputs, `alpha * x` otherwise. Unlike [`Value::relu`]
    /// the gradient at and below zero is `alpha`, not 0.
    pub fn leaky_relu_with_slope(&self, alpha: f64) -> Value {
        apply_unary_op(
            self,
            |x| if x > 0.0 { x } else { alpha * x },
            |id| Op::LeakyRelu(id, alpha),
        )
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::DEFAULT_LEAKY_SLOPE;
    use crate::autograd::check_grad;
    use crate::Graph;
    use approx::assert_relative_eq;

    #[test]
    fn test_leaky_relu_forward() {
        let graph = Graph::new();
        assert_eq!(graph.value(3.0).leaky_relu().data(), 3.0);
        assert_relative_eq!(
            graph.value(-3.0).leaky_relu().data(),
            -0.03,
            max_relative = 1e-12
        );
        assert_eq!(graph.value(1.0).leaky_relu().op_symbol(), Some("leakyRelu"));
    }

    #[test]
    fn test_leaky_relu_custom_slope() {
        let graph = Graph::new();
        let x = graph.value(-2.0);
        let y = x.leaky_relu_with_slope(0.1);
        assert_relative_eq!(y.data(), -0.2, max_relative = 1e-12);
        y.backward();
        assert_relative_eq!(x.grad(), 0.1, max_relative = 1e-12);
    }

    #[test]
    fn test_leaky_relu_backward_both_sides() {
        let graph = Graph::new();
        let pos = graph.value(2.0);
        pos.leaky_relu().backward();
        assert_eq!(pos.grad(), 1.0);

        let neg = graph.value(-2.0);
        neg.leaky_relu().backward();
        assert_eq!(neg.grad(), DEFAULT_LEAKY_SLOPE);
    }

    #[test]
    fn test_leaky_relu_slope_applies_at_threshold() {
        let graph = Graph::new();
        let x = graph.value(0.0);
        let y = x.leaky_relu();
        y.backward();
        assert_eq!(x.grad(), DEFAULT_LEAKY_SLOPE);
    }

    #[test]
    fn test_leaky_relu_matches_finite_difference_near_boundary() {
        check_grad(|inputs| Ok(inputs[0].leaky_relu()), &[1e-3], 1e-4, 1e-6).unwrap();
        check_grad(|inputs| Ok(inputs[0].leaky_relu()), &[-1e-3], 1e-4, 1e-6).unwrap();
    }
}
