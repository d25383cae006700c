// scalargrad-core/src/ops/arithmetic/mul.rs

use std::ops::Mul;

use crate::error::ScalarGradError;
use crate::graph::Op;
use crate::ops::apply_binary_op;
use crate::value::Value;

// --- Forward Operation ---

/// Multiplies two values. During backward each operand receives the other
/// operand's value times the upstream gradient.
pub fn mul(a: &Value, b: &Value) -> Result<Value, ScalarGradError> {
    apply_binary_op(a, b, |x, y| x * y, Op::Mul, "mul")
}

// --- Operator impls (panic on graph mismatch) ---

impl Mul for &Value {
    type Output = Value;

    fn mul(self, rhs: &Value) -> Value {
        mul(self, rhs).unwrap_or_else(|e| panic!("Value multiplication failed: {e}"))
    }
}

impl Mul for Value {
    type Output = Value;

    fn mul(self, rhs: Value) -> Value {
        &self * &rhs
    }
}

impl Mul<&Value> for Value {
    type Output = Value;

    fn mul(self, rhs: &Value) -> Value {
        &self * rhs
    }
}

impl Mul<Value> for &Value {
    type Output = Value;

    fn mul(self, rhs: Value) -> Value {
        self * &rhs
    }
}

impl Mul<f64> for &Value {
    type Output = Value;

    fn mul(self, rhs: f64) -> Value {
        self * &self.graph().value(rhs)
    }
}

impl Mul<f64> for Value {
    type Output = Value;

    fn mul(self, rhs: f64) -> Value {
        &self * rhs
    }
}

impl Mul<&Value> for f64 {
    type Output = Value;

    fn mul(self, rhs: &Value) -> Value {
        &rhs.graph().value(self) * rhs
    }
}

impl Mul<Value> for f64 {
    type Output = Value;

    fn mul(self, rhs: Value) -> Value {
        self * &rhs
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autograd::check_grad;
    use crate::Graph;

    #[test]
    fn test_mul_forward() {
        let graph = Graph::new();
        let a = graph.value(2.0);
        let b = graph.value(-3.0);
        let c = mul(&a, &b).unwrap();
        assert_eq!(c.data(), -6.0);
        assert_eq!(c.op_symbol(), Some("*"));
    }

    #[test]
    fn test_mul_backward() {
        let graph = Graph::new();
        let a = graph.value(2.0);
        let b = graph.value(-3.0);
        let c = &a * &b;
        c.backward();
        assert_eq!(a.grad(), -3.0);
        assert_eq!(b.grad(), 2.0);
    }

    #[test]
    fn test_mul_scalar_promotion_both_sides() {
        let graph = Graph::new();
        let a = graph.value(2.0);
        let left = 4.0 * &a;
        let right = &a * 4.0;
        assert_eq!(left.data(), 8.0);
        assert_eq!(right.data(), 8.0);
    }

    #[test]
    fn test_mul_square_fan_out() {
        let graph = Graph::new();
        let x = graph.value(3.0);
        let y = &x * &x;
        y.backward();
        // d(x*x)/dx = 2x, the sum of both paths
        assert_eq!(x.grad(), 6.0);
    }

    #[test]
    fn test_mul_matches_finite_difference() {
        check_grad(
            |inputs| mul(&inputs[0], &inputs[1]),
            &[1.5, -2.5],
            1e-6,
            1e-6,
        )
        .unwrap();
    }
}
