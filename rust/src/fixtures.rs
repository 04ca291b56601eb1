//! Payload records used by the benchmark scenarios

use serde::{Deserialize, Serialize};

/// Length of [`PodChild::v`] when default constructed
pub const CHILD_SEQUENCE_LEN: usize = 1024;

/// Flat record of four primitive fields
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug, Default)]
pub struct PodStruct {
    pub a: i32,
    pub b: i64,
    pub c: f32,
    pub d: f64,
}

/// [`PodStruct`] plus a variable-length float sequence.
///
/// The base record is embedded rather than flattened: both strategies are
/// non self-describing, and the embedded layout encodes to the same bytes
/// as writing the base fields inline.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct PodChild {
    pub base: PodStruct,
    pub v: Vec<f32>,
}

impl Default for PodChild {
    fn default() -> Self {
        Self {
            base: PodStruct::default(),
            v: vec![0.0; CHILD_SEQUENCE_LEN],
        }
    }
}
