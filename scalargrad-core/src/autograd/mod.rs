//! The backward engine: topological linearization of the computation graph
//! and the reverse pass applying each operator's chain-rule contribution.

pub mod grad_check;

pub use grad_check::{check_grad, GradCheckError};

use crate::graph::{Graph, NodeData, NodeId, Op};

/// Runs the backward pass from `root`.
///
/// Topologically sorts every node reachable from `root` through operand
/// edges (operands before dependents), seeds `root`'s gradient to 1.0, then
/// walks the order in reverse dispatching each node's local-derivative rule.
/// A node's own gradient is fully accumulated before it propagates to its
/// operands, so every gradient is final exactly once it is read. O(V+E),
/// single pass.
pub(crate) fn run_backward(graph: &Graph, root: NodeId) {
    let mut nodes = graph.nodes_mut();

    let mut visited = vec![false; nodes.len()];
    let mut order = Vec::new();
    build_topo(&nodes, root, &mut visited, &mut order);
    log::debug!(
        "backward: processing {} nodes in reverse topological order",
        order.len()
    );

    nodes[root].grad = 1.0;
    for &id in order.iter().rev() {
        backward_step(&mut nodes, id);
    }
}

/// Depth-first post-order walk. The visited bitmap guarantees each node is
/// pushed exactly once even when reached via multiple paths (fan-out).
fn build_topo(nodes: &[NodeData], id: NodeId, visited: &mut [bool], order: &mut Vec<NodeId>) {
    if visited[id] {
        return;
    }
    visited[id] = true;
    for operand in nodes[id].op.operands() {
        build_topo(nodes, operand, visited, order);
    }
    order.push(id);
}

/// Adds the gradient-weighted local derivative of node `id` into each of its
/// operands. Contributions are always accumulated with `+=`, never assigned,
/// so a node reused in several places sums the gradients of all paths.
fn backward_step(nodes: &mut [NodeData], id: NodeId) {
    let grad = nodes[id].grad;
    let out = nodes[id].value;
    let op = nodes[id].op;
    match op {
        Op::Leaf => {}
        Op::Add(a, b) => {
            nodes[a].grad += grad;
            nodes[b].grad += grad;
        }
        Op::Sub(a, b) => {
            nodes[a].grad += grad;
            nodes[b].grad += -grad;
        }
        Op::Mul(a, b) => {
            let (value_a, value_b) = (nodes[a].value, nodes[b].value);
            nodes[a].grad += value_b * grad;
            nodes[b].grad += value_a * grad;
        }
        Op::Pow(a, exponent) => {
            let base = nodes[a].value;
            nodes[a].grad += exponent * base.powf(exponent - 1.0) * grad;
        }
        Op::Exp(a) => {
            nodes[a].grad += out * grad;
        }
        Op::Tanh(a) => {
            nodes[a].grad += (1.0 - out * out) * grad;
        }
        Op::Relu(a) => {
            // derivative is 0 at and below the threshold (strict comparison)
            if nodes[a].value > 0.0 {
                nodes[a].grad += grad;
            }
        }
        Op::LeakyRelu(a, alpha) => {
            let slope = if nodes[a].value > 0.0 { 1.0 } else { alpha };
            nodes[a].grad += slope * grad;
        }
    }
}
