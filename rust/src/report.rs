//! Aggregated scenario results and their console rendering

use std::fmt;
use std::time::Duration;

pub const SEPARATOR: &str = "-----------------------------------";

/// Running totals for one strategy over a scenario.
#[derive(Debug, Clone, Default)]
pub struct Totals {
    pub save: Duration,
    pub load: Duration,
    /// Encoded length of the first iteration
    pub size: Option<usize>,
}

impl Totals {
    pub fn finish(self, name: &str, iterations: usize) -> StrategyStats {
        StrategyStats {
            name: name.to_string(),
            iterations,
            total_save_ms: millis(self.save),
            total_load_ms: millis(self.load),
            avg_save_ms: average(self.save, iterations),
            avg_load_ms: average(self.load, iterations),
            size_bytes: self.size.unwrap_or(0),
        }
    }
}

/// Averaged measurements for one strategy.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyStats {
    pub name: String,
    pub iterations: usize,
    pub avg_save_ms: f64,
    pub avg_load_ms: f64,
    pub total_save_ms: f64,
    pub total_load_ms: f64,
    /// Representative size: the first iteration's encoded length
    pub size_bytes: usize,
}

impl StrategyStats {
    pub fn size_kb(&self) -> f64 {
        self.size_bytes as f64 / 1024.0
    }
}

/// Candidate measurement divided by baseline measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ratios {
    pub save: f64,
    pub load: f64,
    pub size: f64,
}

impl Ratios {
    pub const IDENTITY: Ratios = Ratios {
        save: 1.0,
        load: 1.0,
        size: 1.0,
    };

    pub fn between(candidate: &StrategyStats, baseline: &StrategyStats) -> Self {
        Ratios {
            save: ratio(candidate.avg_save_ms, baseline.avg_save_ms),
            load: ratio(candidate.avg_load_ms, baseline.avg_load_ms),
            size: ratio(candidate.size_bytes as f64, baseline.size_bytes as f64),
        }
    }
}

/// `candidate / baseline`, with a zero baseline mapped to 1.0 when the
/// candidate is also zero and to infinity otherwise.
pub fn ratio(candidate: f64, baseline: f64) -> f64 {
    if baseline == 0.0 {
        if candidate == 0.0 {
            1.0
        } else {
            f64::INFINITY
        }
    } else {
        candidate / baseline
    }
}

fn millis(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

fn average(total: Duration, iterations: usize) -> f64 {
    if iterations == 0 {
        return 0.0;
    }
    millis(total) / iterations as f64
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioReport {
    pub name: String,
    pub baseline: StrategyStats,
    pub candidate: StrategyStats,
    /// Candidate relative to baseline
    pub ratios: Ratios,
}

impl ScenarioReport {
    pub fn new(name: impl Into<String>, baseline: StrategyStats, candidate: StrategyStats) -> Self {
        let ratios = Ratios::between(&candidate, &baseline);
        Self {
            name: name.into(),
            baseline,
            candidate,
            ratios,
        }
    }
}

fn write_stats(f: &mut fmt::Formatter<'_>, stats: &StrategyStats, ratios: &Ratios) -> fmt::Result {
    writeln!(f, "  {} results:", stats.name)?;
    writeln!(
        f,
        "\tsave | time: {:06.4}ms ({:1.2}) size: {:20.8}kb ({:1.8}) total: {:6.1}ms",
        stats.avg_save_ms, ratios.save, stats.size_kb(), ratios.size, stats.total_save_ms
    )?;
    writeln!(
        f,
        "\tload | time: {:06.4}ms ({:1.2}) total: {:6.1}ms",
        stats.avg_load_ms, ratios.load, stats.total_load_ms
    )
}

impl fmt::Display for ScenarioReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{SEPARATOR}")?;
        writeln!(f, "Running test: {}", self.name)?;
        write_stats(f, &self.baseline, &Ratios::IDENTITY)?;
        write_stats(f, &self.candidate, &self.ratios)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(name: &str, save: f64, load: f64, size: usize) -> StrategyStats {
        StrategyStats {
            name: name.into(),
            iterations: 10,
            avg_save_ms: save,
            avg_load_ms: load,
            total_save_ms: save * 10.0,
            total_load_ms: load * 10.0,
            size_bytes: size,
        }
    }

    #[test]
    fn test_ratio_to_self_is_one() {
        let a = stats("A", 2.5, 1.25, 4096);
        assert_eq!(Ratios::between(&a, &a), Ratios::IDENTITY);
    }

    #[test]
    fn test_zero_baseline() {
        assert_eq!(ratio(0.0, 0.0), 1.0);
        assert!(ratio(3.0, 0.0).is_infinite());
        assert_eq!(ratio(1.0, 4.0), 0.25);
    }

    #[test]
    fn test_totals_average() {
        let totals = Totals {
            save: Duration::from_millis(20),
            load: Duration::from_millis(10),
            size: Some(2048),
        };
        let s = totals.finish("A", 4);
        assert!((s.avg_save_ms - 5.0).abs() < 1e-9);
        assert!((s.avg_load_ms - 2.5).abs() < 1e-9);
        assert!((s.total_save_ms - 20.0).abs() < 1e-9);
        assert_eq!(s.size_kb(), 2.0);
    }

    #[test]
    fn test_zero_iterations_average_is_zero() {
        let s = Totals::default().finish("A", 0);
        assert_eq!(s.avg_save_ms, 0.0);
        assert_eq!(s.avg_load_ms, 0.0);
    }

    #[test]
    fn test_display_layout() {
        let report = ScenarioReport::new(
            "Vector(double) size 1024",
            stats("Bincode", 2.0, 1.0, 1024),
            stats("Compact", 1.0, 1.0, 512),
        );
        let text = report.to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], SEPARATOR);
        assert_eq!(lines[1], "Running test: Vector(double) size 1024");
        assert_eq!(lines[2], "  Bincode results:");
        assert!(lines[3].starts_with("\tsave | time: 2.0000ms (1.00) size: "));
        assert!(lines[3].ends_with("kb (1.00000000) total:   20.0ms"));
        assert_eq!(lines[4], "\tload | time: 1.0000ms (1.00) total:   10.0ms");
        assert_eq!(lines[5], "  Compact results:");
        assert!(lines[6].contains("(0.50)"));
        assert!(lines[6].contains("(0.50000000)"));
        assert_eq!(lines.len(), 8);
    }
}
