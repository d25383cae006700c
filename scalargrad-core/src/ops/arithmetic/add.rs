// scalargrad-core/src/ops/arithmetic/add.rs

use std::ops::Add;

use crate::error::ScalarGradError;
use crate::graph::Op;
use crate::ops::apply_binary_op;
use crate::value::Value;

// --- Forward Operation ---

/// Adds two values. During backward the upstream gradient flows unchanged
/// into both operands.
pub fn add(a: &Value, b: &Value) -> Result<Value, ScalarGradError> {
    apply_binary_op(a, b, |x, y| x + y, Op::Add, "add")
}

// --- Operator impls (panic on graph mismatch) ---

impl Add for &Value {
    type Output = Value;

    fn add(self, rhs: &Value) -> Value {
        add(self, rhs).unwrap_or_else(|e| panic!("Value addition failed: {e}"))
    }
}

impl Add for Value {
    type Output = Value;

    fn add(self, rhs: Value) -> Value {
        &self + &rhs
    }
}

impl Add<&Value> for Value {
    type Output = Value;

    fn add(self, rhs: &Value) -> Value {
        &self + rhs
    }
}

impl Add<Value> for &Value {
    type Output = Value;

    fn add(self, rhs: Value) -> Value {
        self + &rhs
    }
}

impl Add<f64> for &Value {
    type Output = Value;

    fn add(self, rhs: f64) -> Value {
        self + &self.graph().value(rhs)
    }
}

impl Add<f64> for Value {
    type Output = Value;

    fn add(self, rhs: f64) -> Value {
        &self + rhs
    }
}

impl Add<&Value> for f64 {
    type Output = Value;

    fn add(self, rhs: &Value) -> Value {
        &rhs.graph().value(self) + rhs
    }
}

impl Add<Value> for f64 {
    type Output = Value;

    fn add(self, rhs: Value) -> Value {
        self + &rhs
    }
}

// --- Tests ---
