use std::fmt;
use std::hash::{Hash, Hasher};

use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};

use crate::config::{TensorConfig, DEFAULT_PRECISION};
use crate::error::{TensorError, TensorResult};
use crate::math::shape;

/// Dense row-major tensor of `f64` values.
///
/// Shape, strides and size are computed once at construction and never
/// change. Element values can be mutated through `set` and `fill`; all other
/// operations produce a new tensor.
#[derive(Clone, Debug)]
pub struct Tensor {
    data: Vec<f64>,
    shape: Vec<usize>,
    strides: Vec<usize>,
    size: usize,
}

impl Tensor {
    /// Zero-filled tensor of the given shape.
    pub fn new(shape: &[usize]) -> TensorResult<Self> {
        let size = shape::validate(shape)?;
        Ok(Self {
            data: vec![0.0; size],
            shape: shape.to_vec(),
            strides: shape::contiguous_strides(shape),
            size,
        })
    }

    /// Tensor of the given shape holding a copy of `data` in row-major order.
    pub fn from_shape_vec(shape: &[usize], data: &[f64]) -> TensorResult<Self> {
        let size = shape::validate(shape)?;
        if data.len() != size {
            // lengths compared as 1-d shapes
            return Err(TensorError::ShapeMismatch {
                expected: vec![size],
                got: vec![data.len()],
            });
        }
        Ok(Self {
            data: data.to_vec(),
            shape: shape.to_vec(),
            strides: shape::contiguous_strides(shape),
            size,
        })
    }

    /// Same as `new`, kept for symmetry with `ones`.
    pub fn zeros(shape: &[usize]) -> TensorResult<Self> {
        Self::new(shape)
    }

    pub fn ones(shape: &[usize]) -> TensorResult<Self> {
        let mut tensor = Self::new(shape)?;
        tensor.fill(1.0);
        Ok(tensor)
    }

    /// Uniform [0, 1) samples drawn from the caller's generator.
    pub fn random_with<R>(shape: &[usize], rng: &mut R) -> TensorResult<Self>
    where
        R: Rng + ?Sized,
    {
        let mut tensor = Self::new(shape)?;
        for value in tensor.data.iter_mut() {
            *value = rng.gen::<f64>();
        }
        Ok(tensor)
    }

    /// Uniform [0, 1) samples from the thread-local generator.
    pub fn random(shape: &[usize]) -> TensorResult<Self> {
        let mut rng = thread_rng();
        Self::random_with(shape, &mut rng)
    }

    /// Uniform [0, 1) samples from a generator seeded with `seed`.
    pub fn random_seeded(shape: &[usize], seed: u64) -> TensorResult<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::random_with(shape, &mut rng)
    }

    /// Internal constructor for results whose shape is already known valid.
    pub(crate) fn from_parts(shape: Vec<usize>, data: Vec<f64>) -> Self {
        let strides = shape::contiguous_strides(&shape);
        let size = data.len();
        debug_assert_eq!(size, shape.iter().product::<usize>());
        Self {
            data,
            shape,
            strides,
            size,
        }
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Number of dimensions.
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Read-only view of the flat row-major storage.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.data.clone()
    }

    /// Flat storage offset of a multi-index.
    pub fn index(&self, indices: &[usize]) -> TensorResult<usize> {
        shape::offset(&self.shape, &self.strides, indices)
    }

    pub fn get(&self, indices: &[usize]) -> TensorResult<f64> {
        let offset = self.index(indices)?;
        Ok(self.data[offset])
    }

    pub fn set(&mut self, value: f64, indices: &[usize]) -> TensorResult<()> {
        let offset = self.index(indices)?;
        self.data[offset] = value;
        Ok(())
    }

    /// Overwrite every element with `value`.
    pub fn fill(&mut self, value: f64) {
        self.data.iter_mut().for_each(|v| *v = value);
    }

    /// Textual form using the config's `precision`.
    pub fn to_string_with_config(&self, config: &TensorConfig) -> String {
        self.to_string_with_precision(config.precision)
    }

    /// Textual form with `precision` decimals in the rank-2 grid.
    ///
    /// Rank 1 prints the flat values, rank 2 prints one row per line and
    /// higher ranks print the flat values under a `Data:` label. This is a
    /// debug aid with no parsing counterpart.
    pub fn to_string_with_precision(&self, precision: usize) -> String {
        let mut out = format!("Tensor(shape={:?})\n", self.shape);
        match self.rank() {
            1 => out.push_str(&format!("{:?}", self.data)),
            2 => {
                out.push_str("Matrix:\n");
                let cols = self.shape[1];
                for row in self.data.chunks(cols) {
                    let cells: Vec<String> = row
                        .iter()
                        .map(|v| format!("{:.*}", precision, v))
                        .collect();
                    out.push_str(&format!("[{}]\n", cells.join(", ")));
                }
            }
            _ => out.push_str(&format!("Data: {:?}", self.data)),
        }
        out
    }
}

impl PartialEq for Tensor {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape && self.data == other.data
    }
}

impl Hash for Tensor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.shape.hash(state);
        for &value in &self.data {
            // 0.0 == -0.0, so both must hash alike
            let bits = if value == 0.0 { 0u64 } else { value.to_bits() };
            bits.hash(state);
        }
    }
}

impl fmt::Display for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with_precision(DEFAULT_PRECISION))
    }
}
