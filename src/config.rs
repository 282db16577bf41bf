//! Loading of the sweep parameters from an XML document.
//!
//! The document root may carry any name; it must hold exactly one element
//! each for `n0`, `h`, `nk`, `a`, `b` and `c`. Other elements are ignored.

use crate::engine::evaluator::Coefficients;
use crate::error::{Result, SweepError};
use crate::utils::xml_document::root_element_name;
use serde::Deserialize;
use std::fs;
use std::path::Path;

const IN_MEMORY: &str = "<memory>";

/// The six parameters driving one sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepConfig {
    /// First x value.
    pub n0: f64,
    /// Increment applied to x after each sample.
    pub h: f64,
    /// Inclusive upper bound for x.
    pub nk: f64,
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

#[derive(Debug, Deserialize)]
struct RawSweepConfig {
    n0: Option<String>,
    h: Option<String>,
    nk: Option<String>,
    a: Option<String>,
    b: Option<String>,
    c: Option<String>,
}

impl SweepConfig {
    /// Read and parse the configuration file at `path`.
    ///
    /// The file is read in full and closed before parsing starts.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let shown = path.display().to_string();
        tracing::debug!(path = %shown, "Loading sweep configuration");

        let contents = fs::read_to_string(path).map_err(|e| {
            SweepError::io_error("read configuration", Some(shown.clone()), e)
        })?;

        let config = Self::from_xml_str(&contents).map_err(|e| e.with_path(&shown))?;
        tracing::debug!(
            n0 = config.n0,
            h = config.h,
            nk = config.nk,
            a = config.a,
            b = config.b,
            c = config.c,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Parse a configuration document held in memory.
    ///
    /// Anything but whitespace, comments or processing instructions after
    /// the root element is rejected.
    pub fn from_xml_str(xml: &str) -> Result<Self> {
        root_element_name(xml).map_err(|e| SweepError::config_error(IN_MEMORY, e.to_string()))?;
        let raw: RawSweepConfig = quick_xml::de::from_str(xml)
            .map_err(|e| SweepError::config_error(IN_MEMORY, e.to_string()))?;

        Ok(Self {
            n0: parse_field("n0", raw.n0)?,
            h: parse_field("h", raw.h)?,
            nk: parse_field("nk", raw.nk)?,
            a: parse_field("a", raw.a)?,
            b: parse_field("b", raw.b)?,
            c: parse_field("c", raw.c)?,
        })
    }

    pub fn coefficients(&self) -> Coefficients {
        Coefficients {
            a: self.a,
            b: self.b,
            c: self.c,
        }
    }
}

fn parse_field(name: &str, value: Option<String>) -> Result<f64> {
    let text = value
        .ok_or_else(|| SweepError::config_error(IN_MEMORY, format!("missing field `{name}`")))?;

    text.trim().parse::<f64>().map_err(|_| {
        SweepError::config_error(
            IN_MEMORY,
            format!("field `{name}` is not a number: {:?}", text.trim()),
        )
    })
}
