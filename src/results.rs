//! Serialization of sweep samples to the `results` XML document.
//!
//! ```text
//! <?xml version="1.0" encoding="UTF-8"?>
//! <results>
//!   <result>
//!     <x>0.0</x>
//!     <y>0.0</y>
//!   </result>
//! </results>
//! ```

use crate::error::{Result, SweepError};
use crate::utils::atomic_file::write_atomic;
use crate::utils::xml_document::root_element_name;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;

const INDENT_WIDTH: usize = 2;

/// One evaluated sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultPair {
    pub x: f64,
    pub y: f64,
}

impl ResultPair {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Text form of a number in the results document.
///
/// Integral values keep their decimal point (`1.0`), and the text parses back
/// to the identical `f64`.
pub fn format_number(value: f64) -> String {
    format!("{value:?}")
}

/// Render the complete results document, newline-terminated.
pub fn render_results(results: &[ResultPair]) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT_WIDTH);
    emit_document(&mut writer, results).map_err(|e| {
        SweepError::io_error("render results", None, io::Error::other(e.to_string()))
    })?;

    let mut bytes = writer.into_inner();
    bytes.push(b'\n');
    String::from_utf8(bytes).map_err(|e| {
        SweepError::io_error(
            "render results",
            None,
            io::Error::new(io::ErrorKind::InvalidData, e),
        )
    })
}

fn emit_document(writer: &mut Writer<Vec<u8>>, results: &[ResultPair]) -> quick_xml::Result<()> {
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    if results.is_empty() {
        return writer.write_event(Event::Empty(BytesStart::new("results")));
    }

    writer.write_event(Event::Start(BytesStart::new("results")))?;
    for pair in results {
        writer.write_event(Event::Start(BytesStart::new("result")))?;
        emit_leaf(writer, "x", pair.x)?;
        emit_leaf(writer, "y", pair.y)?;
        writer.write_event(Event::End(BytesEnd::new("result")))?;
    }
    writer.write_event(Event::End(BytesEnd::new("results")))
}

fn emit_leaf(writer: &mut Writer<Vec<u8>>, name: &str, value: f64) -> quick_xml::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(&format_number(value))))?;
    writer.write_event(Event::End(BytesEnd::new(name)))
}

/// Write `results` to `path`, replacing whatever was there.
///
/// The document is rendered in memory and swapped in with
/// [`write_atomic`], so readers see either the old file or the new one.
///
/// # Errors
/// Returns [`SweepError::Io`] when the destination directory is missing or
/// not writable.
///
/// # Example
/// ```rust,no_run
/// use sinsweep::{write_results, ResultPair};
///
/// write_results("results.xml", &[ResultPair::new(0.0, 0.0)])?;
/// # Ok::<(), sinsweep::SweepError>(())
/// ```
pub fn write_results(path: impl AsRef<Path>, results: &[ResultPair]) -> Result<()> {
    let path = path.as_ref();
    let document = render_results(results)?;

    write_atomic(path, document.as_bytes()).map_err(|e| {
        SweepError::io_error("write results", Some(path.display().to_string()), e)
    })?;

    tracing::debug!(
        path = %path.display(),
        pairs = results.len(),
        bytes = document.len(),
        "Results written"
    );
    Ok(())
}

#[derive(Debug, Deserialize)]
struct ResultsDocument {
    #[serde(rename = "result", default)]
    results: Vec<ResultRecord>,
}

#[derive(Debug, Deserialize)]
struct ResultRecord {
    x: String,
    y: String,
}

/// Parse a results document back into samples.
///
/// The root element must be `results`.
pub fn parse_results(xml: &str) -> Result<Vec<ResultPair>> {
    let root = root_element_name(xml)
        .map_err(|e| SweepError::malformed_results("<memory>", e.to_string()))?;
    if root != "results" {
        return Err(SweepError::malformed_results(
            "<memory>",
            format!("expected root element <results>, found <{root}>"),
        ));
    }

    let document: ResultsDocument = quick_xml::de::from_str(xml)
        .map_err(|e| SweepError::malformed_results("<memory>", e.to_string()))?;

    document
        .results
        .iter()
        .map(|record| {
            Ok(ResultPair::new(
                parse_number("x", &record.x)?,
                parse_number("y", &record.y)?,
            ))
        })
        .collect()
}

/// Read a results file written by [`write_results`].
pub fn read_results(path: impl AsRef<Path>) -> Result<Vec<ResultPair>> {
    let path = path.as_ref();
    let shown = path.display().to_string();
    let contents = fs::read_to_string(path)
        .map_err(|e| SweepError::io_error("read results", Some(shown.clone()), e))?;

    parse_results(&contents).map_err(|e| e.with_path(shown))
}

fn parse_number(name: &str, text: &str) -> Result<f64> {
    text.trim().parse::<f64>().map_err(|_| {
        SweepError::malformed_results(
            "<memory>",
            format!("`{name}` is not a number: {:?}", text.trim()),
        )
    })
}
