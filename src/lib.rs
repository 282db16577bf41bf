//! Sample `y = a*sin(x)^2 + b*sin(x) + c` over a range read from an XML
//! parameter file and write the samples to an XML results file.

pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod results;
pub mod utils;

pub use config::SweepConfig;
pub use engine::evaluator::{compute, Coefficients};
pub use engine::sweep::{
    evaluate_sweep, run, RunPaths, SweepSummary, DEFAULT_CONFIG_PATH, DEFAULT_RESULTS_PATH,
};
pub use error::{Result, SweepError};
pub use results::{read_results, write_results, ResultPair};
