//! Wire-level representation of a tensor.
//!
//! A payload carries `shape`, flat row-major `data`, and two informational
//! labels, `dtype` and `name`. Transport code serializes these structs as
//! they are; converting to a `Tensor` is where the shape/data invariants
//! get enforced.

use serde::{Deserialize, Serialize};

use crate::config::{TensorConfig, DEFAULT_DTYPE, DEFAULT_NAME, DEFAULT_PRECISION};
use crate::error::TensorError;
use crate::math::Tensor;
use crate::utils::logging::preview;

fn default_dtype() -> String {
    DEFAULT_DTYPE.to_string()
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct TensorPayload {
    pub shape: Vec<usize>,
    pub data: Vec<f64>,
    #[serde(default = "default_dtype")]
    pub dtype: String,
    #[serde(default = "default_name")]
    pub name: String,
}

impl TensorPayload {
    pub fn new(shape: Vec<usize>, data: Vec<f64>) -> Self {
        Self {
            shape,
            data,
            dtype: default_dtype(),
            name: default_name(),
        }
    }

    /// Payload labelled with the config's `dtype` and `name`.
    pub fn from_config(shape: Vec<usize>, data: Vec<f64>, config: &TensorConfig) -> Self {
        Self {
            shape,
            data,
            dtype: config.dtype.clone(),
            name: config.name.clone(),
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_dtype(mut self, dtype: &str) -> Self {
        self.dtype = dtype.to_string();
        self
    }

    /// Transport-level check: both `shape` and `data` are non-empty.
    ///
    /// This is weaker than what `Tensor` requires; a valid payload can still
    /// fail conversion if `data.len()` differs from the shape's product.
    pub fn is_valid(&self) -> bool {
        !self.shape.is_empty() && !self.data.is_empty()
    }

    pub fn summary(&self) -> PayloadSummary {
        PayloadSummary {
            shape: self.shape.clone(),
            elements: self.data.len(),
            dtype: self.dtype.clone(),
            name: self.name.clone(),
        }
    }
}

/// What a receiver reports back after accepting a payload.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct PayloadSummary {
    pub shape: Vec<usize>,
    pub elements: usize,
    pub dtype: String,
    pub name: String,
}

/// A payload together with a free-form metadata string.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct TaggedPayload {
    pub tensor: TensorPayload,
    #[serde(default)]
    pub metadata: String,
}

impl TaggedPayload {
    pub fn new(tensor: TensorPayload, metadata: &str) -> Self {
        Self {
            tensor,
            metadata: metadata.to_string(),
        }
    }
}

impl From<&Tensor> for TensorPayload {
    fn from(tensor: &Tensor) -> Self {
        TensorPayload::new(tensor.shape().to_vec(), tensor.to_vec())
    }
}

impl TryFrom<&TensorPayload> for Tensor {
    type Error = TensorError;

    fn try_from(payload: &TensorPayload) -> Result<Self, Self::Error> {
        if payload.dtype != DEFAULT_DTYPE {
            log::warn!(
                "Payload '{}' labelled dtype '{}'; values are read as {}",
                payload.name,
                payload.dtype,
                DEFAULT_DTYPE
            );
        }
        let tensor = Tensor::from_shape_vec(&payload.shape, &payload.data)?;
        log::debug!(
            "Decoded payload '{}' into {}",
            payload.name,
            preview(&tensor, DEFAULT_PRECISION, 8)
        );
        Ok(tensor)
    }
}

impl TryFrom<TensorPayload> for Tensor {
    type Error = TensorError;

    fn try_from(payload: TensorPayload) -> Result<Self, Self::Error> {
        Tensor::try_from(&payload)
    }
}
