//! Structural checks the serde deserializer does not make on its own.

use anyhow::{bail, Context, Result};
use quick_xml::events::Event;
use quick_xml::Reader;

/// Return the name of the document's single root element.
///
/// Fails when there is no root element, or when anything other than
/// whitespace, comments or processing instructions follows it.
pub fn root_element_name(xml: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    let mut depth = 0usize;
    let mut root: Option<String> = None;

    loop {
        let event = reader
            .read_event()
            .with_context(|| format!("malformed XML at byte {}", reader.buffer_position()))?;

        match event {
            Event::Start(ref e) | Event::Empty(ref e) => {
                if depth == 0 {
                    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                    if let Some(existing) = &root {
                        bail!("unexpected element <{name}> after root element <{existing}>");
                    }
                    root = Some(name);
                }
                if matches!(event, Event::Start(_)) {
                    depth += 1;
                }
            }
            Event::End(_) => depth = depth.saturating_sub(1),
            Event::Text(ref e) if depth == 0 => {
                if !e.iter().all(u8::is_ascii_whitespace) {
                    bail!("unexpected text outside the root element");
                }
            }
            Event::CData(_) if depth == 0 => bail!("unexpected CDATA outside the root element"),
            Event::Eof => break,
            _ => {}
        }
    }

    if depth > 0 {
        bail!("document ends before the root element is closed");
    }
    root.context("document has no root element")
}
