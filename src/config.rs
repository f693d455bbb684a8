use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

pub const DEFAULT_DTYPE: &str = "float64";
pub const DEFAULT_NAME: &str = "tensor";
pub const DEFAULT_PRECISION: usize = 4;

/// Defaults applied when building payloads, printing and sampling tensors.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TensorConfig {
    /// Element type label written into payloads. Informational only.
    pub dtype: String,
    /// Name label written into payloads.
    pub name: String,
    /// Decimals used for matrix rows in the textual form.
    pub precision: usize,
    /// Seed for `random` factories; `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for TensorConfig {
    fn default() -> Self {
        Self {
            dtype: DEFAULT_DTYPE.to_string(),
            name: DEFAULT_NAME.to_string(),
            precision: DEFAULT_PRECISION,
            seed: None,
        }
    }
}

impl TensorConfig {
    pub fn new(dtype: &str, name: &str) -> Self {
        Self {
            dtype: dtype.to_string(),
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse tensor config JSON")
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        serde_json::from_reader(reader).context("Failed to parse tensor config JSON")
    }

    /// Load a config from a JSON file. Missing fields take their defaults.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(&path).with_context(|| {
            format!("Failed to open tensor config: {}", path.as_ref().display())
        })?;
        let config = Self::from_reader(BufReader::new(file))?;
        log::debug!("Loaded tensor config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Generator for the random factories, seeded when `seed` is set.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
