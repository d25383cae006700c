//! Read-only graph export for external rendering collaborators.
//!
//! A renderer (graphviz, plotting, ...) needs node identity, label, value,
//! gradient, operator tag and the operand edges; this module hands all of it
//! over as plain data so the core stays free of rendering dependencies.

use crate::graph::{NodeData, NodeId};
use crate::value::Value;

/// One node of an exported graph.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeInfo {
    pub id: NodeId,
    pub data: f64,
    pub grad: f64,
    pub label: Option<String>,
    pub op_symbol: Option<&'static str>,
}

/// The nodes and `(operand, dependent)` edges reachable from one output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphSnapshot {
    pub nodes: Vec<NodeInfo>,
    pub edges: Vec<(NodeId, NodeId)>,
}

impl Value {
    /// Collects every node and edge reachable from this value through
    /// operand edges. Each node appears exactly once even under fan-out.
    pub fn snapshot(&self) -> GraphSnapshot {
        let nodes = self.graph.nodes();
        let mut snapshot = GraphSnapshot::default();
        let mut visited = vec![false; nodes.len()];
        collect(&nodes, self.id, &mut visited, &mut snapshot);
        snapshot
    }
}

fn collect(nodes: &[NodeData], id: NodeId, visited: &mut [bool], out: &mut GraphSnapshot) {
    if visited[id] {
        return;
    }
    visited[id] = true;
    let node = &nodes[id];
    out.nodes.push(NodeInfo {
        id,
        data: node.value,
        grad: node.grad,
        label: node.label.clone(),
        op_symbol: node.op.symbol(),
    });
    for operand in node.op.operands() {
        out.edges.push((operand, id));
        collect(nodes, operand, visited, out);
    }
}
