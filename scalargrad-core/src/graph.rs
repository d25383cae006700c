use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use crate::value::Value;

/// Index of a node inside its graph's arena.
pub type NodeId = usize;

/// The operation that produced a node, carrying the operand indices plus any
/// constant its derivative rule needs.
///
/// Replaces per-node backward closures with one tagged variant per operator;
/// the gradient contribution of each variant is applied by a single dispatch
/// in [`crate::autograd`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Op {
    Leaf,
    Add(NodeId, NodeId),
    Sub(NodeId, NodeId),
    Mul(NodeId, NodeId),
    Pow(NodeId, f64),
    Exp(NodeId),
    Tanh(NodeId),
    Relu(NodeId),
    LeakyRelu(NodeId, f64),
}

impl Op {
    /// Operand ids in the order they were consumed (empty for leaves).
    pub(crate) fn operands(&self) -> Vec<NodeId> {
        match *self {
            Op::Leaf => Vec::new(),
            Op::Add(a, b) | Op::Sub(a, b) | Op::Mul(a, b) => vec![a, b],
            Op::Pow(a, _) | Op::Exp(a) | Op::Tanh(a) | Op::Relu(a) | Op::LeakyRelu(a, _) => {
                vec![a]
            }
        }
    }

    /// Diagnostic symbol of the producing operator (`None` for leaves).
    pub(crate) fn symbol(&self) -> Option<&'static str> {
        match self {
            Op::Leaf => None,
            Op::Add(..) => Some("+"),
            Op::Sub(..) => Some("-"),
            Op::Mul(..) => Some("*"),
            Op::Pow(..) => Some("^"),
            Op::Exp(..) => Some("exp"),
            Op::Tanh(..) => Some("tanh"),
            Op::Relu(..) => Some("ReLU"),
            Op::LeakyRelu(..) => Some("leakyRelu"),
        }
    }
}

/// Storage for a single differentiable scalar.
///
/// `value` is fixed at construction; only `grad` mutates, and only during a
/// backward pass or an explicit gradient reset.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NodeData {
    pub(crate) value: f64,
    pub(crate) grad: f64,
    pub(crate) label: Option<String>,
    pub(crate) op: Op,
}

impl NodeData {
    pub(crate) fn new(value: f64, op: Op) -> Self {
        NodeData {
            value,
            grad: 0.0,
            label: None,
            op,
        }
    }
}

/// Append-only arena of computation-graph nodes.
///
/// Operands are stored as indices into the arena, so the graph is acyclic by
/// construction: a node can only reference nodes appended before it. `Graph`
/// is a cheap handle; clones share the same storage.
#[derive(Clone, Default)]
pub struct Graph {
    pub(crate) nodes: Rc<RefCell<Vec<NodeData>>>,
}

impl Graph {
    pub fn new() -> Self {
        Graph::default()
    }

    /// Creates a leaf node holding `data`.
    pub fn value(&self, data: f64) -> Value {
        self.push_leaf(data, None)
    }

    /// Creates a labelled leaf node. The label is cosmetic and has no effect
    /// on computation.
    pub fn value_with_label(&self, data: f64, label: &str) -> Value {
        self.push_leaf(data, Some(label.to_string()))
    }

    /// Number of nodes appended to the arena so far.
    pub fn len(&self) -> usize {
        self.nodes.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.borrow().is_empty()
    }

    fn push_leaf(&self, data: f64, label: Option<String>) -> Value {
        let id = self.push(NodeData {
            value: data,
            grad: 0.0,
            label,
            op: Op::Leaf,
        });
        Value {
            graph: self.clone(),
            id,
        }
    }

    pub(crate) fn push(&self, node: NodeData) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(node);
        nodes.len() - 1
    }

    pub(crate) fn nodes(&self) -> Ref<'_, Vec<NodeData>> {
        self.nodes.borrow()
    }

    pub(crate) fn nodes_mut(&self) -> RefMut<'_, Vec<NodeData>> {
        self.nodes.borrow_mut()
    }

    /// Two handles are the same graph iff they share the same arena.
    pub(crate) fn same_graph(&self, other: &Graph) -> bool {
        Rc::ptr_eq(&self.nodes, &other.nodes)
    }
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("nodes", &self.len())
            .finish()
    }
}
