//! Reverse-mode automatic differentiation over scalar values.
//!
//! Arithmetic on [`Value`] handles builds a computation graph eagerly; calling
//! [`Value::backward`] on an output node runs a single reverse topological
//! traversal that accumulates `d(output)/d(node)` into every upstream node.
//! The `nn` module layers a small feed-forward network (neuron / layer / MLP)
//! on top of the same operator set.
//!
//! ```
//! use scalargrad_core::Graph;
//!
//! let graph = Graph::new();
//! let a = graph.value_with_label(2.0, "a");
//! let b = graph.value(-3.0);
//! let c = &(&a * &b) + 10.0;
//! c.backward();
//!
//! assert_eq!(c.data(), 4.0);
//! assert_eq!(a.grad(), -3.0);
//! assert_eq!(b.grad(), 2.0);
//! ```

pub mod autograd;
pub mod error;
pub mod graph;
pub mod nn;
pub mod ops;
pub mod snapshot;
pub mod value;

pub use error::ScalarGradError;
pub use graph::{Graph, NodeId};
pub use snapshot::{GraphSnapshot, NodeInfo};
pub use value::Value;
