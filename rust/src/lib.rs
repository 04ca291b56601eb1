//! # archive-bench
//!
//! Serialization micro-benchmark harness. A payload is saved and loaded
//! repeatedly with a baseline and a candidate strategy; the averaged times,
//! encoded sizes and candidate/baseline ratios are reported.
//!
//! ```rust
//! use archive_bench::{BincodeStrategy, CompactStrategy, Comparison, Scenario};
//!
//! let data = vec![0.0f64; 1024];
//! let comparison = Comparison::new(BincodeStrategy, CompactStrategy);
//! let report = comparison
//!     .run(&Scenario::new("Vector(double) size 1024").validate(true), &data)
//!     .unwrap();
//!
//! assert_eq!(report.baseline.size_bytes, 8 + 1024 * 8);
//! assert_eq!(report.candidate.size_bytes, 3 + 1024 * 8);
//! println!("{report}");
//! ```

pub mod config;
pub mod datagen;
pub mod driver;
pub mod error;
pub mod fixtures;
pub mod report;
pub mod runner;
pub mod strategy;

pub use config::BenchConfig;
pub use datagen::DataGen;
pub use driver::{run_scenario, Comparison, Scenario};
pub use error::{BenchError, Result};
pub use fixtures::{PodChild, PodStruct};
pub use report::ScenarioReport;
pub use strategy::{BincodeStrategy, CompactStrategy, Strategy};

#[cfg(feature = "checksum")]
pub use strategy::Checksummed;
#[cfg(feature = "compression")]
pub use strategy::Compressed;
