// scalargrad-core/src/ops/arithmetic/pow.rs

use crate::graph::Op;
use crate::ops::apply_unary_op;
use crate::value::Value;

// --- Forward Operation ---

/// Raises `base` to a real constant exponent. During backward the operand
/// receives `exponent * base^(exponent-1)` times the upstream gradient.
///
/// Follows native `f64::powf` semantics: a negative base with a fractional
/// exponent yields NaN rather than an error.
pub fn pow(base: &Value, exponent: f64) -> Value {
    apply_unary_op(base, |x| x.powf(exponent), |id| Op::Pow(id, exponent))
}

impl Value {
    pub fn pow(&self, exponent: f64) -> Value {
        pow(self, exponent)
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autograd::check_grad;
    use crate::Graph;

    #[test]
    fn test_pow_forward() {
        let graph = Graph::new();
        let a = graph.value(2.0);
        let b = a.pow(3.0);
        assert_eq!(b.data(), 8.0);
        assert_eq!(b.op_symbol(), Some("^"));
        assert_eq!(b.operands(), vec![a]);
    }

    #[test]
    fn test_pow_backward() {
        let graph = Graph::new();
        let a = graph.value(2.0);
        let b = a.pow(3.0);
        b.backward();
        // d(x^3)/dx = 3x^2 = 12
        assert_eq!(a.grad(), 12.0);
    }

    #[test]
    fn test_pow_reciprocal() {
        let graph = Graph::new();
        let a = graph.value(4.0);
        let b = a.pow(-1.0);
        assert_eq!(b.data(), 0.25);
        b.backward();
        // d(x^-1)/dx = -x^-2 = -1/16
        assert_eq!(a.grad(), -0.0625);
    }

    #[test]
    fn test_pow_negative_base_fractional_exponent_is_nan() {
        let graph = Graph::new();
        let a = graph.value(-8.0);
        let b = a.pow(0.5);
        assert!(b.data().is_nan());
    }

    #[test]
    fn test_pow_matches_finite_difference() {
        check_grad(|inputs| Ok(inputs[0].pow(2.5)), &[1.7], 1e-6, 1e-6).unwrap();
        check_grad(|inputs| Ok(inputs[0].pow(-2.0)), &[0.8], 1e-6, 1e-5).unwrap();
    }
}
