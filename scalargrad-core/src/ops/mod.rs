//! # Scalar Operations Module (`ops`)
//!
//! Every operator records a new node in the owning graph: the forward value
//! is computed immediately, the operand ids and operator kind are stored so
//! the backward engine can apply the matching derivative rule later.
//!
//! ## Structure:
//!
//! - [`arithmetic`]: add, sub, mul, neg, div, pow.
//! - [`activation`]: tanh, relu, leaky_relu.
//! - [`math_elem`]: element-wise math functions (exp).
//!
//! Binary operators come as fallible functions (`Result`, erroring when the
//! operands live in different graphs) plus `std::ops` impls that wrap them
//! and panic with the error message. A bare `f64` beside a commutative
//! operator (either side) or on the right of `-`/`/` is promoted to an
//! unlabelled leaf. Unary operators cannot fail and are plain `Value`
//! methods.

pub mod activation;
pub mod arithmetic;
pub mod math_elem;

use crate::error::ScalarGradError;
use crate::graph::{NodeData, NodeId, Op};
use crate::value::Value;

/// Records a unary operation: computes the forward value and appends the new
/// node to the input's graph.
pub(crate) fn apply_unary_op<F, B>(a: &Value, forward: F, build_op: B) -> Value
where
    F: FnOnce(f64) -> f64,
    B: FnOnce(NodeId) -> Op,
{
    let value = forward(a.data());
    let id = a.graph.push(NodeData::new(value, build_op(a.id)));
    Value {
        graph: a.graph.clone(),
        id,
    }
}

/// Records a binary operation after verifying both operands share a graph.
pub(crate) fn apply_binary_op<F, B>(
    a: &Value,
    b: &Value,
    forward: F,
    build_op: B,
    op_name: &str,
) -> Result<Value, ScalarGradError>
where
    F: FnOnce(f64, f64) -> f64,
    B: FnOnce(NodeId, NodeId) -> Op,
{
    if !a.graph.same_graph(&b.graph) {
        return Err(ScalarGradError::GraphMismatch {
            operation: op_name.to_string(),
        });
    }
    let value = forward(a.data(), b.data());
    let id = a.graph.push(NodeData::new(value, build_op(a.id, b.id)));
    Ok(Value {
        graph: a.graph.clone(),
        id,
    })
}
