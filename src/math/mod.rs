//! Dense strided tensor type and the operations defined on it.
//!
//! `Tensor` owns a flat row-major `Vec<f64>`; its shape, strides and size
//! are fixed at construction. Every transforming operation returns a new,
//! independently owned tensor.
pub mod ops;
pub mod shape;
pub mod tensor;

pub use tensor::Tensor;
