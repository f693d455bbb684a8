//! Shape and stride helpers for row-major storage.

use crate::error::{TensorError, TensorResult};

/// Check that `shape` is non-empty with every dimension positive, and return
/// the number of elements it describes.
///
/// A shape whose element count overflows `usize` is rejected as invalid.
pub fn validate(shape: &[usize]) -> TensorResult<usize> {
    if shape.is_empty() || shape.iter().any(|&dim| dim == 0) {
        return Err(TensorError::InvalidShape(shape.to_vec()));
    }
    shape
        .iter()
        .try_fold(1usize, |acc, &dim| acc.checked_mul(dim))
        .ok_or_else(|| TensorError::InvalidShape(shape.to_vec()))
}

/// Row-major (C order) strides: `strides[i]` is the product of `shape[i+1..]`.
pub fn contiguous_strides(shape: &[usize]) -> Vec<usize> {
    let ndim = shape.len();
    if ndim == 0 {
        return Vec::new();
    }

    let mut strides = vec![1usize; ndim];
    for i in (0..ndim - 1).rev() {
        strides[i] = strides[i + 1] * shape[i + 1];
    }
    strides
}

/// Flat offset of a multi-index, checking rank and per-axis bounds.
pub fn offset(shape: &[usize], strides: &[usize], indices: &[usize]) -> TensorResult<usize> {
    if indices.len() != shape.len() {
        return Err(TensorError::RankMismatch {
            expected: shape.len(),
            got: indices.len(),
        });
    }

    let mut flat = 0;
    for (axis, ((&index, &len), &stride)) in indices.iter().zip(shape).zip(strides).enumerate() {
        if index >= len {
            return Err(TensorError::IndexOutOfRange { axis, index, len });
        }
        flat += index * stride;
    }
    Ok(flat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strides_are_row_major() {
        assert_eq!(contiguous_strides(&[2, 3, 4]), vec![12, 4, 1]);
        assert_eq!(contiguous_strides(&[5]), vec![1]);
        assert_eq!(contiguous_strides(&[]), Vec::<usize>::new());
    }

    #[test]
    fn validate_rejects_empty_and_zero_dims() {
        assert_eq!(validate(&[]), Err(TensorError::InvalidShape(vec![])));
        assert_eq!(validate(&[3, 0]), Err(TensorError::InvalidShape(vec![3, 0])));
        assert_eq!(validate(&[2, 3, 4]), Ok(24));
    }

    #[test]
    fn validate_rejects_overflowing_size() {
        let shape = [1usize << 63, 2];
        assert_eq!(validate(&shape), Err(TensorError::InvalidShape(shape.to_vec())));
        assert_eq!(validate(&[usize::MAX]), Ok(usize::MAX));
    }

    #[test]
    fn offset_matches_row_major_position() {
        let shape = [2, 3, 4];
        let strides = contiguous_strides(&shape);
        let mut expected = 0;
        for i in 0..2 {
            for j in 0..3 {
                for k in 0..4 {
                    assert_eq!(offset(&shape, &strides, &[i, j, k]), Ok(expected));
                    expected += 1;
                }
            }
        }
    }

    #[test]
    fn offset_checks_rank_and_bounds() {
        let shape = [2, 3];
        let strides = contiguous_strides(&shape);
        assert_eq!(
            offset(&shape, &strides, &[1]),
            Err(TensorError::RankMismatch { expected: 2, got: 1 })
        );
        assert_eq!(
            offset(&shape, &strides, &[1, 3]),
            Err(TensorError::IndexOutOfRange { axis: 1, index: 3, len: 3 })
        );
    }
}
