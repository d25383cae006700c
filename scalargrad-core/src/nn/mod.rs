//! Feed-forward network composition built purely on the public operator set:
//! neuron, layer and multi-layer perceptron, plus parameter initialization.

pub mod init;
pub mod layer;
pub mod mlp;
pub mod module;
pub mod neuron;

pub use layer::Layer;
pub use mlp::Mlp;
pub use module::Module;
pub use neuron::Neuron;
