use crate::graph::Op;
use crate::ops::apply_unary_op;
use crate::value::Value;

// --- Forward Operation ---

impl Value {
    /// Hyperbolic tangent, computed as `(e^2x - 1) / (e^2x + 1)`. During
    /// backward the operand receives `1 - tanh(x)^2` times the upstream
    /// gradient; the backward rule reuses this node's own forward value.
    pub fn tanh(&self) -> Value {
        apply_unary_op(
            self,
            |x| ((2.0 * x).exp() - 1.0) / ((2.0 * x).exp() + 1.0),
            Op::Tanh,
        )
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use crate::autograd::check_grad;
    use crate::Graph;
    use approx::assert_relative_eq;

    #[test]
    fn test_tanh_forward() {
        let graph = Graph::new();
        let a = graph.value(0.5);
        let t = a.tanh();
        assert_relative_eq!(t.data(), 0.46211715726000974, max_relative = 1e-12);
        assert_eq!(t.op_symbol(), Some("tanh"));

        let zero = graph.value(0.0).tanh();
        assert_eq!(zero.data(), 0.0);
    }

    #[test]
    fn test_tanh_backward() {
        let graph = Graph::new();
        let a = graph.value(0.5);
        let t = a.tanh();
        t.backward();
        // d(tanh x)/dx = 1 - tanh(x)^2
        assert_relative_eq!(a.grad(), 0.7864477329659274, max_relative = 1e-9);

        let b = graph.value(0.0);
        let tb = b.tanh();
        tb.backward();
        assert_relative_eq!(b.grad(), 1.0, max_relative = 1e-12);
    }

    #[test]
    fn test_tanh_saturates() {
        let graph = Graph::new();
        let a = graph.value(20.0);
        let t = a.tanh();
        assert_relative_eq!(t.data(), 1.0, max_relative = 1e-12);
    }

    #[test]
    fn test_tanh_matches_finite_difference() {
        check_grad(|inputs| Ok(inputs[0].tanh()), &[0.4], 1e-6, 1e-6).unwrap();
        check_grad(|inputs| Ok(inputs[0].tanh()), &[-1.2], 1e-6, 1e-6).unwrap();
    }
}
