//! ndtensor: a dense, row-major, strided N-dimensional container of `f64`.
//!
//! The crate provides the `Tensor` type with multi-index access, elementwise
//! arithmetic, matrix multiplication, transpose and slicing, together with
//! the payload types a transport layer reads and writes verbatim.
//!
//! Everything is in-memory and synchronous. No module performs network I/O;
//! encoding a payload to the wire is left to the caller.
pub mod config;
pub mod error;
pub mod math;
pub mod payload;
pub mod utils;

pub use error::{TensorError, TensorResult};
pub use math::Tensor;
