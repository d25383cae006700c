use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::graph::{Graph, NodeId};

/// The public, user-facing handle to a differentiable scalar.
///
/// A `Value` is a cheap `(graph, index)` pair into the graph's arena; cloning
/// it never copies node storage, and two clones refer to the same node. The
/// forward value is computed eagerly at construction and never changes
/// afterwards; the gradient accumulator starts at 0 and is only written by
/// [`Value::backward`] or reset by [`Value::zero_grad`].
pub struct Value {
    pub(crate) graph: Graph,
    pub(crate) id: NodeId,
}

impl Value {
    /// The forward-computed value of this node.
    pub fn data(&self) -> f64 {
        self.graph.nodes()[self.id].value
    }

    /// The accumulated gradient `d(output)/d(self)`, meaningful after a
    /// backward pass on some output node.
    pub fn grad(&self) -> f64 {
        self.graph.nodes()[self.id].grad
    }

    /// Resets the gradient accumulator to 0.
    ///
    /// Gradients are never reset implicitly: reusing a graph fragment for a
    /// second backward pass without zeroing first accumulates on top of the
    /// previous pass.
    pub fn zero_grad(&self) {
        self.graph.nodes_mut()[self.id].grad = 0.0;
    }

    pub fn label(&self) -> Option<String> {
        self.graph.nodes()[self.id].label.clone()
    }

    /// Attaches a cosmetic label, e.g. for graph rendering.
    pub fn set_label(&self, label: &str) {
        self.graph.nodes_mut()[self.id].label = Some(label.to_string());
    }

    /// Symbol of the operator that produced this node (`None` for leaves).
    pub fn op_symbol(&self) -> Option<&'static str> {
        self.graph.nodes()[self.id].op.symbol()
    }

    /// Whether this node is a leaf (an input or a trainable parameter).
    pub fn is_leaf(&self) -> bool {
        self.op_symbol().is_none()
    }

    /// The nodes this node was derived from, in the order they were consumed.
    pub fn operands(&self) -> Vec<Value> {
        let ids = self.graph.nodes()[self.id].op.operands();
        ids.into_iter()
            .map(|id| Value {
                graph: self.graph.clone(),
                id,
            })
            .collect()
    }

    /// Arena index of this node, stable for the lifetime of the graph.
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Computes gradients of `self` with respect to every node reachable
    /// through operand edges.
    ///
    /// Seeds `self.grad` to 1.0, then walks the ancestors once in reverse
    /// topological order, accumulating each operator's local-derivative
    /// contribution into its operands. Gradients of other nodes are not reset
    /// beforehand; see [`Value::zero_grad`].
    pub fn backward(&self) {
        crate::autograd::run_backward(&self.graph, self.id);
    }
}

impl Clone for Value {
    fn clone(&self) -> Self {
        Value {
            graph: self.graph.clone(),
            id: self.id,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Value")
            .field("data", &self.data())
            .field("grad", &self.grad())
            .field("label", &self.label())
            .field("op", &self.op_symbol())
            .finish()
    }
}

/// Equality is identity: two `Value`s are equal only if they are the same
/// node of the same graph, consistent with `Hash`.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.graph.same_graph(&other.graph) && self.id == other.id
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Rc::as_ptr(&self.graph.nodes).hash(state);
        self.id.hash(state);
    }
}
