// scalargrad-core/src/ops/arithmetic/sub.rs

use std::ops::Sub;

use crate::error::ScalarGradError;
use crate::graph::Op;
use crate::ops::apply_binary_op;
use crate::value::Value;

// --- Forward Operation ---

/// Subtracts `b` from `a`. During backward the upstream gradient flows
/// unchanged into `a` and negated into `b`.
pub fn sub(a: &Value, b: &Value) -> Result<Value, ScalarGradError> {
    apply_binary_op(a, b, |x, y| x - y, Op::Sub, "sub")
}

// --- Operator impls (panic on graph mismatch) ---

impl Sub for &Value {
    type Output = Value;

    fn sub(self, rhs: &Value) -> Value {
        sub(self, rhs).unwrap_or_else(|e| panic!("Value subtraction failed: {e}"))
    }
}

impl Sub for Value {
    type Output = Value;

    fn sub(self, rhs: Value) -> Value {
        &self - &rhs
    }
}

impl Sub<&Value> for Value {
    type Output = Value;

    fn sub(self, rhs: &Value) -> Value {
        &self - rhs
    }
}

impl Sub<Value> for &Value {
    type Output = Value;

    fn sub(self, rhs: Value) -> Value {
        self - &rhs
    }
}

impl Sub<f64> for &Value {
    type Output = Value;

    fn sub(self, rhs: f64) -> Value {
        self - &self.graph().value(rhs)
    }
}

impl Sub<f64> for Value {
    type Output = Value;

    fn sub(self, rhs: f64) -> Value {
        &self - rhs
    }
}

// --- Tests ---
