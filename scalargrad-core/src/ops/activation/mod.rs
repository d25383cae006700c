pub mod leaky_relu;
pub mod relu;
pub mod tanh;

pub use leaky_relu::DEFAULT_LEAKY_SLOPE;
