use std::error::Error;
use std::fmt;

pub type TensorResult<T> = Result<T, TensorError>;

/// Failure kinds reported by tensor construction and operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TensorError {
    /// Shape is empty or contains a zero dimension.
    InvalidShape(Vec<usize>),
    /// Data length differs from the shape's product, or two shapes differ.
    ShapeMismatch { expected: Vec<usize>, got: Vec<usize> },
    /// Operand or index count has the wrong rank.
    RankMismatch { expected: usize, got: usize },
    /// A coordinate is past the end of its axis.
    IndexOutOfRange { axis: usize, index: usize, len: usize },
    /// Inner dimensions of a matrix product disagree.
    DimensionMismatch { left: usize, right: usize },
    /// Axis does not exist.
    InvalidDimension { dimension: usize, rank: usize },
    /// Slice range is empty or runs past the axis.
    InvalidRange { start: usize, end: usize, len: usize },
}

impl fmt::Display for TensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TensorError::InvalidShape(shape) => {
                write!(f, "invalid shape {:?}: dimensions must be non-empty and positive", shape)
            }
            TensorError::ShapeMismatch { expected, got } => {
                write!(f, "shape mismatch: expected {:?}, got {:?}", expected, got)
            }
            TensorError::RankMismatch { expected, got } => {
                write!(f, "rank mismatch: expected {}, got {}", expected, got)
            }
            TensorError::IndexOutOfRange { axis, index, len } => write!(
                f,
                "index {} out of range for axis {} of length {}",
                index, axis, len
            ),
            TensorError::DimensionMismatch { left, right } => write!(
                f,
                "matrix dimensions don't match for multiplication: {} vs {}",
                left, right
            ),
            TensorError::InvalidDimension { dimension, rank } => {
                write!(f, "invalid dimension {} for tensor of rank {}", dimension, rank)
            }
            TensorError::InvalidRange { start, end, len } => write!(
                f,
                "invalid slice range {}..{} for axis of length {}",
                start, end, len
            ),
        }
    }
}

impl Error for TensorError {}
