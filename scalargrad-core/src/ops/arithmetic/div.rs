// scalargrad-core/src/ops/arithmetic/div.rs

use std::ops::Div;

use crate::error::ScalarGradError;
use crate::value::Value;

// --- Forward Operation ---

/// Divides `a` by `b`, expressed as `a * b^-1`; the gradient rules follow
/// from `mul` and `pow` with no formula of their own. Division by zero
/// yields infinity per native float semantics.
pub fn div(a: &Value, b: &Value) -> Result<Value, ScalarGradError> {
    if !a.graph().same_graph(b.graph()) {
        return Err(ScalarGradError::GraphMismatch {
            operation: "div".to_string(),
        });
    }
    Ok(a * &b.pow(-1.0))
}

// --- Operator impls (panic on graph mismatch) ---

impl Div for &Value {
    type Output = Value;

    fn div(self, rhs: &Value) -> Value {
        div(self, rhs).unwrap_or_else(|e| panic!("Value division failed: {e}"))
    }
}

impl Div for Value {
    type Output = Value;

    fn div(self, rhs: Value) -> Value {
        &self / &rhs
    }
}

impl Div<&Value> for Value {
    type Output = Value;

    fn div(self, rhs: &Value) -> Value {
        &self / rhs
    }
}

impl Div<Value> for &Value {
    type Output = Value;

    fn div(self, rhs: Value) -> Value {
        self / &rhs
    }
}

impl Div<f64> for &Value {
    type Output = Value;

    fn div(self, rhs: f64) -> Value {
        self / &self.graph().value(rhs)
    }
}

impl Div<f64> for Value {
    type Output = Value;

    fn div(self, rhs: f64) -> Value {
        &self / rhs
    }
}

// --- Tests ---
