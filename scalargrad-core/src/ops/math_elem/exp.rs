use crate::graph::Op;
use crate::ops::apply_unary_op;
use crate::value::Value;

// --- Forward Operation ---

impl Value {
    /// `e^x`. During backward the operand receives this node's own forward
    /// value times the upstream gradient.
    pub fn exp(&self) -> Value {
        apply_unary_op(self, f64::exp, Op::Exp)
    }
}

// --- Tests ---
