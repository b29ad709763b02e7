//! Notebook scrubbing.
//!
//! A notebook is kept as a raw [`serde_json::Value`] rather than a typed
//! struct so that every field we do not touch (sources, outputs, attachments,
//! unknown extensions) is written back exactly as it was read, in the same
//! key order.
//!
//! After scrubbing:
//! - every cell has `"metadata": {}` and `"execution_count": null`
//! - the notebook has `"metadata": {}`
//! - nothing else changes

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Serializer, Value};
use std::fs;
use std::path::Path;

use crate::{DEFAULT_INDENT, Error, Result};

const METADATA_KEY: &str = "metadata";
const CELLS_KEY: &str = "cells";
const EXECUTION_COUNT_KEY: &str = "execution_count";

/// Clear notebook and cell metadata and reset execution counts in place.
///
/// A document without a `cells` key is treated as having no cells. Returns
/// the number of cells scrubbed.
///
/// # Errors
///
/// Returns [`Error::InvalidData`] when the document is not an object, when
/// `cells` is present but not an array, or when a cell is not an object.
/// The document is left unmodified in every error case.
pub fn scrub_document(doc: &mut Value) -> Result<usize> {
    let found = kind(doc);
    let Some(notebook) = doc.as_object_mut() else {
        return Err(Error::invalid_data(format!(
            "expected a JSON object, found {found}"
        )));
    };

    let cells = match notebook.get_mut(CELLS_KEY) {
        None => None,
        Some(Value::Array(cells)) => Some(cells),
        Some(other) => {
            return Err(Error::invalid_data(format!(
                "`cells` must be an array, found {}",
                kind(other)
            )));
        }
    };

    let mut count = 0;
    if let Some(cells) = cells {
        // Check every cell first so a bad one leaves the document untouched.
        if let Some((index, bad)) = cells.iter().enumerate().find(|(_, c)| !c.is_object()) {
            return Err(Error::invalid_data(format!(
                "cell {index} must be an object, found {}",
                kind(bad)
            )));
        }
        for cell in cells.iter_mut().filter_map(Value::as_object_mut) {
            cell.insert(METADATA_KEY.to_string(), Value::Object(Map::new()));
            cell.insert(EXECUTION_COUNT_KEY.to_string(), Value::Null);
            count += 1;
        }
    }

    notebook.insert(METADATA_KEY.to_string(), Value::Object(Map::new()));
    Ok(count)
}

/// Outcome of cleaning one notebook file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanSummary {
    /// Number of cells whose metadata and execution count were reset.
    pub cells: usize,
}

/// Cleans notebook files in place.
#[derive(Debug, Clone)]
pub struct Scrubber {
    indent: String,
}

impl Default for Scrubber {
    fn default() -> Self {
        Self::new(DEFAULT_INDENT)
    }
}

impl Scrubber {
    /// Create a scrubber that writes `indent` spaces per nesting level.
    pub fn new(indent: usize) -> Self {
        Self {
            indent: " ".repeat(indent),
        }
    }

    /// Read, scrub, and rewrite a single notebook file.
    ///
    /// The file is only written once the whole document has been parsed and
    /// scrubbed, so any read, parse or shape error leaves it unchanged.
    /// No backup is kept.
    pub fn clean(&self, path: &Path) -> Result<CleanSummary> {
        let content = fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let mut doc: Value = serde_json::from_str(&content)?;
        let cells = scrub_document(&mut doc)?;

        let rendered = self.render(&doc)?;
        fs::write(path, rendered).map_err(|e| Error::io_with_path(e, path))?;

        log::debug!("scrubbed {} ({} cells)", path.display(), cells);
        Ok(CleanSummary { cells })
    }

    /// Serialize a document with this scrubber's indentation.
    ///
    /// Non-ASCII text is written as-is, and no trailing newline is added.
    pub fn render(&self, doc: &Value) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        let formatter = PrettyFormatter::with_indent(self.indent.as_bytes());
        let mut ser = Serializer::with_formatter(&mut out, formatter);
        doc.serialize(&mut ser)?;
        Ok(out)
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
