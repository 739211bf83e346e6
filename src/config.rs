use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Engine-wide settings threaded through graph construction and playback.
///
/// Every field has a default, so a config file only needs the values it
/// wants to change:
///
/// ```ignore
/// { "sampleRate": 48000, "seed": 7 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Samples per second.
    pub sample_rate: u32,
    /// Initial size of every generator's output buffer.
    pub block_size: usize,
    /// Frames rendered per chunk by the playback scheduler.
    pub control_rate: usize,
    /// Audio the scheduler keeps queued ahead of the device, in milliseconds.
    pub min_latency_ms: u32,
    /// Interval between scheduler fills, in milliseconds.
    pub write_interval_ms: u64,
    /// Seed for stochastic generators. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44_100,
            block_size: crate::MAX_BLOCK_SIZE,
            control_rate: 64,
            min_latency_ms: 250,
            write_interval_ms: 100,
            seed: None,
        }
    }
}

impl EngineConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_rate == 0 {
            return Err(ConfigError::ZeroSampleRate);
        }
        if self.block_size == 0 {
            return Err(ConfigError::ZeroBlockSize);
        }
        if self.control_rate == 0 {
            return Err(ConfigError::ZeroControlRate);
        }
        Ok(())
    }

    /// Frames the scheduler keeps ahead of the playback position.
    pub fn pre_buffer_frames(&self) -> u64 {
        self.sample_rate as u64 * self.min_latency_ms as u64 / 1000
    }

    /// Seed for the node at arena index `node`, so seeded generators in one
    /// graph each get their own stream.
    pub fn node_seed(&self, node: usize) -> Option<u64> {
        self.seed.map(|seed| splitmix64(seed ^ splitmix64(node as u64)))
    }
}

/// SplitMix64 finalizer: spreads nearby inputs over the whole range.
fn splitmix64(x: u64) -> u64 {
    let mut z = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
