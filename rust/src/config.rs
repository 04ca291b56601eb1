//! Run-wide settings
//!
//! Nothing is read from the command line or from files; the driver binary
//! builds a [`BenchConfig`] in code and derives every scenario from it.

use crate::datagen::DataGen;
use crate::driver::{Scenario, DEFAULT_ITERATIONS};

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    pub iterations: usize,
    pub validate: bool,
    /// Fill payloads with random values instead of zeros
    pub randomize: bool,
    /// Fixed seed for reproducible payloads; entropy when `None`
    pub seed: Option<u64>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            validate: false,
            randomize: false,
            seed: None,
        }
    }
}

impl BenchConfig {
    pub fn scenario(&self, name: impl Into<String>) -> Scenario {
        Scenario::new(name)
            .iterations(self.iterations)
            .validate(self.validate)
    }

    pub fn data_gen(&self) -> DataGen {
        match self.seed {
            Some(seed) => DataGen::seeded(seed),
            None => DataGen::from_entropy(),
        }
    }
}
