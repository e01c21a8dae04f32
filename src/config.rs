//! Run configuration: which order to build, optional noise, where to export

use crate::error::{QamError, QamResult};
use crate::noise::NoiseConfig;
use crate::qam::ModulationOrder;
use crate::utils::consts::DEFAULT_OUTPUT_DIR;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    pub order: ModulationOrder,
    #[serde(default)]
    pub noise: Option<NoiseConfig>,
    /// Seed for the noise RNG, OS entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl RunConfig {
    pub fn new(order: ModulationOrder) -> Self {
        Self {
            order,
            noise: None,
            seed: None,
            output_dir: default_output_dir(),
        }
    }

    pub fn with_noise(mut self, noise: NoiseConfig) -> Self {
        self.noise = Some(noise);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Load a JSON run description, e.g.
    /// `{"order": 64, "noise": {"intensity": 0.5, "scope": "phase"}, "seed": 7}`
    pub fn from_json_file(path: &Path) -> QamResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| QamError::Config(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_json_str(&text)?;
        info!("Loaded run configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_json_str(text: &str) -> QamResult<Self> {
        let config: RunConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> QamResult<()> {
        match &self.noise {
            Some(noise) => noise.validate(),
            None => Ok(()),
        }
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
