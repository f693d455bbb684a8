//! Arithmetic and shape operations on `Tensor`.
//!
//! None of these mutate their operands. Shapes must match exactly where two
//! tensors meet; there is no broadcasting.
use std::ops::{Add, Mul};

use crate::error::{TensorError, TensorResult};
use crate::math::tensor::Tensor;

impl Tensor {
    fn require_rank(&self, rank: usize) -> TensorResult<()> {
        if self.rank() != rank {
            return Err(TensorError::RankMismatch {
                expected: rank,
                got: self.rank(),
            });
        }
        Ok(())
    }

    /// Elementwise sum of two tensors of identical shape.
    pub fn add(&self, other: &Tensor) -> TensorResult<Tensor> {
        if self.shape() != other.shape() {
            return Err(TensorError::ShapeMismatch {
                expected: self.shape().to_vec(),
                got: other.shape().to_vec(),
            });
        }
        let data = self
            .data()
            .iter()
            .zip(other.data())
            .map(|(a, b)| a + b)
            .collect();
        Ok(Tensor::from_parts(self.shape().to_vec(), data))
    }

    /// Scale every element by `scalar`.
    pub fn multiply(&self, scalar: f64) -> Tensor {
        let data = self.data().iter().map(|v| v * scalar).collect();
        Tensor::from_parts(self.shape().to_vec(), data)
    }

    /// Matrix product of two rank-2 tensors.
    ///
    /// Plain triple loop with left-to-right accumulation in `f64`.
    pub fn matmul(&self, other: &Tensor) -> TensorResult<Tensor> {
        self.require_rank(2)?;
        other.require_rank(2)?;

        let (rows, common) = (self.shape()[0], self.shape()[1]);
        let cols = other.shape()[1];
        if common != other.shape()[0] {
            return Err(TensorError::DimensionMismatch {
                left: common,
                right: other.shape()[0],
            });
        }
        log::trace!("matmul {:?} x {:?}", self.shape(), other.shape());

        let lhs = self.data();
        let rhs = other.data();
        let mut out = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                let mut sum = 0.0;
                for k in 0..common {
                    sum += lhs[i * common + k] * rhs[k * cols + j];
                }
                out.push(sum);
            }
        }
        Ok(Tensor::from_parts(vec![rows, cols], out))
    }

    /// Swap the two axes of a rank-2 tensor.
    pub fn transpose(&self) -> TensorResult<Tensor> {
        self.require_rank(2)?;

        let (rows, cols) = (self.shape()[0], self.shape()[1]);
        log::trace!("transpose {:?}", self.shape());

        let src = self.data();
        let mut out = Vec::with_capacity(rows * cols);
        for j in 0..cols {
            for i in 0..rows {
                out.push(src[i * cols + j]);
            }
        }
        Ok(Tensor::from_parts(vec![cols, rows], out))
    }

    /// Select the half-open range `start..end` along `dimension`, keeping
    /// every other axis whole.
    pub fn slice(&self, dimension: usize, start: usize, end: usize) -> TensorResult<Tensor> {
        if dimension >= self.rank() {
            return Err(TensorError::InvalidDimension {
                dimension,
                rank: self.rank(),
            });
        }
        let len = self.shape()[dimension];
        if end > len || start >= end {
            return Err(TensorError::InvalidRange { start, end, len });
        }
        log::trace!("slice {:?} axis {} [{}..{})", self.shape(), dimension, start, end);

        // Each outer block holds `len` contiguous runs of `inner` elements.
        let inner = self.strides()[dimension];
        let block = len * inner;
        let mut out = Vec::with_capacity(self.size() / len * (end - start));
        for chunk in self.data().chunks(block) {
            out.extend_from_slice(&chunk[start * inner..end * inner]);
        }

        let mut shape = self.shape().to_vec();
        shape[dimension] = end - start;
        Ok(Tensor::from_parts(shape, out))
    }
}

impl<'a, 'b> Add<&'b Tensor> for &'a Tensor {
    type Output = TensorResult<Tensor>;

    fn add(self, rhs: &'b Tensor) -> Self::Output {
        Tensor::add(self, rhs)
    }
}

impl<'a> Mul<f64> for &'a Tensor {
    type Output = Tensor;

    fn mul(self, rhs: f64) -> Self::Output {
        self.multiply(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_middle_axis_of_rank3() {
        let data: Vec<f64> = (0..24).map(|v| v as f64).collect();
        let t = Tensor::from_shape_vec(&[2, 3, 4], &data).unwrap();
        let s = t.slice(1, 1, 3).unwrap();
        assert_eq!(s.shape(), &[2, 2, 4]);
        for i in 0..2 {
            for j in 0..2 {
                for k in 0..4 {
                    assert_eq!(s.get(&[i, j, k]).unwrap(), t.get(&[i, j + 1, k]).unwrap());
                }
            }
        }
    }

    #[test]
    fn slice_last_axis_of_matrix() {
        let t = Tensor::from_shape_vec(&[2, 4], &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]).unwrap();
        let s = t.slice(1, 1, 3).unwrap();
        assert_eq!(s.shape(), &[2, 2]);
        assert_eq!(s.data(), &[2.0, 3.0, 6.0, 7.0]);
    }

    #[test]
    fn transpose_moves_elements() {
        let t = Tensor::from_shape_vec(&[2, 3], &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let tt = t.transpose().unwrap();
        assert_eq!(tt.shape(), &[3, 2]);
        assert_eq!(tt.data(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    }

    #[test]
    fn operator_sugar_delegates() {
        let t = Tensor::ones(&[2, 2]).unwrap();
        let sum = (&t + &t).unwrap();
        assert_eq!(sum, &t * 2.0);
    }
}
