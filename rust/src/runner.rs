//! Timed save/load of a single value
//!
//! Everything inside the strategy call is timed, including whatever buffer
//! setup the strategy performs. Errors are returned untouched so a failing
//! strategy aborts the scenario that called it.

use std::time::{Duration, Instant};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::Result;
use crate::strategy::Strategy;

/// Encode `value` once with `strategy`, returning the bytes and the elapsed
/// wall-clock time.
#[inline]
pub fn measure_save<S, T>(value: &T, strategy: &S) -> Result<(Vec<u8>, Duration)>
where
    S: Strategy,
    T: Serialize + ?Sized,
{
    let start = Instant::now();
    let bytes = strategy.save(value)?;
    let elapsed = start.elapsed();
    Ok((bytes, elapsed))
}

/// Decode `bytes` once with `strategy`, returning the value and the elapsed
/// wall-clock time.
#[inline]
pub fn measure_load<S, T>(bytes: &[u8], strategy: &S) -> Result<(T, Duration)>
where
    S: Strategy,
    T: DeserializeOwned,
{
    let start = Instant::now();
    let value = strategy.load(bytes)?;
    let elapsed = start.elapsed();
    Ok((value, elapsed))
}
