// scalargrad-core/src/ops/arithmetic/neg.rs

use std::ops::Neg;

use crate::value::Value;

// --- Forward Operation ---

/// Negation, expressed as multiplication by a constant -1 leaf; the gradient
/// rule follows from `mul` with no formula of its own.
pub fn neg(a: &Value) -> Value {
    a * -1.0
}

impl Neg for &Value {
    type Output = Value;

    fn neg(self) -> Value {
        neg(self)
    }
}

impl Neg for Value {
    type Output = Value;

    fn neg(self) -> Value {
        neg(&self)
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Graph;

    #[test]
    fn test_neg_forward() {
        let graph = Graph::new();
        let a = graph.value(2.5);
        let b = -&a;
        assert_eq!(b.data(), -2.5);
        // composed from mul, not a dedicated operator
        assert_eq!(b.op_symbol(), Some("*"));
        let operands = b.operands();
        assert_eq!(operands[0], a);
        assert_eq!(operands[1].data(), -1.0);
    }

    #[test]
    fn test_neg_backward() {
        let graph = Graph::new();
        let a = graph.value(2.5);
        let b = neg(&a);
        b.backward();
        assert_eq!(a.grad(), -1.0);
    }
}
