use std::env;

use anyhow::{Context, Result};

/// Cosmetic analysis delay applied before scoring, in milliseconds.
pub const DEFAULT_ANALYSIS_DELAY_MS: u64 = 1500;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Everything
/// has a default — the tool works with no configuration at all.
pub struct Config {
    /// Simulated analysis latency shown behind the spinner
    /// (VENEER_ANALYSIS_DELAY_MS, 0 disables).
    pub analysis_delay_ms: u64,
    /// Fixed seed for the synthetic data generator (VENEER_SEED).
    /// The --seed CLI flag takes precedence when both are set.
    pub seed: Option<u64>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let analysis_delay_ms = match env::var("VENEER_ANALYSIS_DELAY_MS") {
            Ok(raw) => raw
                .parse()
                .context("VENEER_ANALYSIS_DELAY_MS must be a non-negative integer")?,
            Err(_) => DEFAULT_ANALYSIS_DELAY_MS,
        };

        let seed = match env::var("VENEER_SEED") {
            Ok(raw) => Some(
                raw.parse()
                    .context("VENEER_SEED must be a non-negative integer")?,
            ),
            Err(_) => None,
        };

        Ok(Self {
            analysis_delay_ms,
            seed,
        })
    }
}
