//! The run controller: load parameters, sweep x, write the samples.

use crate::config::SweepConfig;
use crate::error::{Result, SweepError};
use crate::logging::log_performance;
use crate::results::{write_results, ResultPair};
use std::path::{Path, PathBuf};
use std::time::Instant;

pub const DEFAULT_CONFIG_PATH: &str = "config.xml";
pub const DEFAULT_RESULTS_PATH: &str = "results.xml";

/// Input and output locations for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPaths {
    pub config: PathBuf,
    pub results: PathBuf,
}

impl RunPaths {
    pub fn new(config: impl Into<PathBuf>, results: impl Into<PathBuf>) -> Self {
        Self {
            config: config.into(),
            results: results.into(),
        }
    }

    pub fn defaults() -> Self {
        Self::new(DEFAULT_CONFIG_PATH, DEFAULT_RESULTS_PATH)
    }

    /// Paths taken from the command line. Only a complete pair is honoured;
    /// a lone argument yields `None` so the caller falls back to defaults.
    pub fn from_args(config: Option<PathBuf>, results: Option<PathBuf>) -> Option<Self> {
        match (config, results) {
            (Some(config), Some(results)) => Some(Self { config, results }),
            _ => None,
        }
    }
}

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepSummary {
    pub results_path: PathBuf,
    pub pairs: usize,
}

/// Sample the formula from `n0` to `nk` inclusive in steps of `h`.
///
/// The bound is tested against the accumulated value of x before every
/// evaluation; repeated addition drifts and that drift is kept. An empty
/// range (`n0 > nk`, or either bound NaN) yields no samples.
///
/// A step that cannot move x forward fails with [`SweepError::InvalidStep`]:
/// `h <= 0` is rejected before the first sample, and an increment that
/// leaves x unchanged is rejected when it happens.
pub fn evaluate_sweep(config: &SweepConfig) -> Result<Vec<ResultPair>> {
    let coefficients = config.coefficients();
    let mut x = config.n0;

    if x <= config.nk && config.h <= 0.0 {
        return Err(SweepError::invalid_step(config.h, x));
    }

    let mut results = Vec::new();
    while x <= config.nk {
        results.push(ResultPair::new(x, coefficients.evaluate(x)));

        let next = x + config.h;
        if next == x {
            return Err(SweepError::invalid_step(config.h, x));
        }
        x = next;
    }

    tracing::debug!(pairs = results.len(), "Sweep evaluated");
    Ok(results)
}

/// Run one complete sweep: load `config_path`, evaluate, write `results_path`.
///
/// Nothing is written unless loading and evaluation both succeed.
///
/// # Arguments
/// * `config_path` - XML file holding `n0`, `h`, `nk`, `a`, `b` and `c`
/// * `results_path` - Destination for the `results` document
///
/// # Errors
/// [`SweepError::Config`] for a malformed parameter file,
/// [`SweepError::InvalidStep`] for a step that cannot advance x, and
/// [`SweepError::Io`] when either file cannot be read or written.
///
/// # Example
/// ```rust,no_run
/// use sinsweep::{run, DEFAULT_CONFIG_PATH, DEFAULT_RESULTS_PATH};
///
/// let summary = run(DEFAULT_CONFIG_PATH, DEFAULT_RESULTS_PATH)?;
/// println!("{} samples", summary.pairs);
/// # Ok::<(), sinsweep::SweepError>(())
/// ```
pub fn run(config_path: impl AsRef<Path>, results_path: impl AsRef<Path>) -> Result<SweepSummary> {
    let config_path = config_path.as_ref();
    let results_path = results_path.as_ref();
    let started = Instant::now();

    let config = SweepConfig::load(config_path)?;
    let results = evaluate_sweep(&config)?;
    write_results(results_path, &results)?;

    log_performance(
        "sweep",
        u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
    );
    tracing::info!(
        config = %config_path.display(),
        results = %results_path.display(),
        pairs = results.len(),
        "Sweep completed"
    );

    Ok(SweepSummary {
        results_path: results_path.to_path_buf(),
        pairs: results.len(),
    })
}
