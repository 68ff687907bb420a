//! Times both duplicate counters on one shared dataset.

use std::fmt::Display;
use std::time::Instant;

use serde::Serialize;

use crate::bench::{DuplicateCounter, Strategy};
use crate::config::BenchConfig;
use crate::dataset;
use crate::error::BenchError;

/// One counter's result on the benchmark dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    pub label: &'static str,
    pub complexity: &'static str,
    pub seconds: f64,
    pub duplicates: usize,
}

impl Display for Measurement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = format!("{} ({})", self.label, self.complexity);
        write!(
            f,
            "{name:<22}: {:.4} sec - Duplicates: {}",
            self.seconds, self.duplicates
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchReport {
    pub size: usize,
    pub list: Measurement,
    pub dict: Measurement,
    /// `None` when the dict pass was too fast to time.
    pub speedup: Option<f64>,
}

impl BenchReport {
    pub fn counts_agree(&self) -> bool {
        self.list.duplicates == self.dict.duplicates
    }
}

impl Display for BenchReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Benchmarking duplicate counters with dataset of {} integers...",
            group_thousands(self.size)
        )?;
        writeln!(f)?;
        writeln!(f, "{}", self.list)?;
        writeln!(f, "{}", self.dict)?;
        writeln!(f)?;
        match self.speedup {
            Some(speedup) => write!(f, "Dictionary was approximately {speedup:.1}x faster."),
            None => write!(f, "Dict version was too fast to measure!"),
        }
    }
}

/// `20000` -> `20,000`
fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Ratio of `slow` to `fast`, or `None` if `fast` took no measurable time.
pub fn speedup(slow: f64, fast: f64) -> Option<f64> {
    (fast > 0.0).then(|| slow / fast)
}

pub fn measure(counter: &dyn DuplicateCounter, data: &[i64]) -> Measurement {
    let start = Instant::now();
    let duplicates = counter.count(data);
    let seconds = start.elapsed().as_secs_f64();
    log::debug!(
        "{} finished in {seconds:.6}s with {duplicates} duplicates",
        counter.label()
    );

    Measurement {
        label: counter.label(),
        complexity: counter.complexity(),
        seconds,
        duplicates,
    }
}

/// Run both counters over `data` and compare them.
pub fn compare(data: &[i64]) -> BenchReport {
    let list = measure(&*Strategy::create_counter(Strategy::List), data);
    let dict = measure(&*Strategy::create_counter(Strategy::Dict), data);

    let report = BenchReport {
        size: data.len(),
        speedup: speedup(list.seconds, dict.seconds),
        list,
        dict,
    };
    if !report.counts_agree() {
        log::warn!(
            "Duplicate counts disagree: list={}, dict={}",
            report.list.duplicates,
            report.dict.duplicates
        );
    }
    report
}

/// Generate a dataset from `config` and benchmark both counters on it.
pub fn run(config: &BenchConfig) -> Result<BenchReport, BenchError> {
    config.validate()?;

    let mut rng = dataset::rng_from_seed(config.seed);
    let data = dataset::generate_data(config.size, config.min, config.max, &mut rng)?;
    log::debug!(
        "Generated {} integers in {}..={} (seed: {:?})",
        data.len(),
        config.min,
        config.max,
        config.seed
    );

    Ok(compare(&data))
}
