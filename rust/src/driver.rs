//! Comparative scenario driver
//!
//! Runs one payload through a baseline and a candidate strategy for a fixed
//! number of iterations, baseline first, then averages and compares.

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info, info_span};

use crate::error::{BenchError, Result};
use crate::report::{ScenarioReport, Totals};
use crate::runner::{measure_load, measure_save};
use crate::strategy::Strategy;

pub const DEFAULT_ITERATIONS: usize = 10;

/// One named benchmark case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub name: String,
    pub iterations: usize,
    /// Compare every decoded value against the input
    pub validate: bool,
}

impl Scenario {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            iterations: DEFAULT_ITERATIONS,
            validate: false,
        }
    }

    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn validate(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }
}

/// The strategy pair a scenario is run against.
#[derive(Debug, Clone)]
pub struct Comparison<B, C> {
    pub baseline: B,
    pub candidate: C,
}

impl<B: Strategy, C: Strategy> Comparison<B, C> {
    pub fn new(baseline: B, candidate: C) -> Self {
        Self {
            baseline,
            candidate,
        }
    }

    /// Run `scenario` over `data` and return the averaged comparison.
    pub fn run<T>(&self, scenario: &Scenario, data: &T) -> Result<ScenarioReport>
    where
        T: Serialize + DeserializeOwned + PartialEq,
    {
        run_scenario(self, scenario, data)
    }
}

/// Save, record size, load, and optionally validate, accumulating into
/// `totals`.
fn run_iteration<S, T>(
    strategy: &S,
    data: &T,
    validate: bool,
    iteration: usize,
    totals: &mut Totals,
) -> Result<()>
where
    S: Strategy,
    T: Serialize + DeserializeOwned + PartialEq,
{
    let (bytes, save_time) = measure_save(data, strategy)?;
    totals.save += save_time;

    match totals.size {
        None => totals.size = Some(bytes.len()),
        Some(expected) if validate && expected != bytes.len() => {
            return Err(BenchError::SizeMismatch {
                strategy: strategy.name().to_string(),
                expected,
                actual: bytes.len(),
            });
        }
        Some(_) => {}
    }

    let (decoded, load_time): (T, _) = measure_load(&bytes, strategy)?;
    totals.load += load_time;

    debug!(
        strategy = strategy.name(),
        iteration,
        size = bytes.len(),
        save_us = save_time.as_micros() as u64,
        load_us = load_time.as_micros() as u64,
        "iteration complete"
    );

    if validate && decoded != *data {
        return Err(BenchError::ValidationFailed {
            strategy: strategy.name().to_string(),
            iteration,
        });
    }

    Ok(())
}

/// Run `scenario` against both strategies of `comparison`.
///
/// Returns [`BenchError::InvalidIterationCount`] for zero iterations. Any
/// strategy failure aborts the scenario.
pub fn run_scenario<B, C, T>(
    comparison: &Comparison<B, C>,
    scenario: &Scenario,
    data: &T,
) -> Result<ScenarioReport>
where
    B: Strategy,
    C: Strategy,
    T: Serialize + DeserializeOwned + PartialEq,
{
    if scenario.iterations == 0 {
        return Err(BenchError::InvalidIterationCount);
    }

    let span = info_span!("scenario", name = %scenario.name);
    let _enter = span.enter();

    let mut baseline = Totals::default();
    let mut candidate = Totals::default();

    for i in 0..scenario.iterations {
        run_iteration(&comparison.baseline, data, scenario.validate, i, &mut baseline)?;
        run_iteration(&comparison.candidate, data, scenario.validate, i, &mut candidate)?;
    }

    let report = ScenarioReport::new(
        scenario.name.clone(),
        baseline.finish(comparison.baseline.name(), scenario.iterations),
        candidate.finish(comparison.candidate.name(), scenario.iterations),
    );

    info!(
        save_ratio = report.ratios.save,
        load_ratio = report.ratios.load,
        size_ratio = report.ratios.size,
        "scenario complete"
    );

    Ok(report)
}
