//! Loading candidate records from recipe files.
//!
//! Recipe dumps come in two layouts: a single top-level JSON array, and
//! newline-delimited JSON with one record per line. Both decode into
//! labeled records; the label (array index or source line) is what the
//! validation report uses to point back at the file.
//!
//! The loader is purely syntactic. A line that is not JSON at all is a
//! loader error; a line that parses but breaks the recipe schema is a
//! record for the engine to judge.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::SourceError;

/// A candidate record plus the label used to annotate its diagnostics.
#[derive(Debug, Clone)]
pub struct LabeledRecord {
    pub label: String,
    pub value: Value,
}

/// Load candidate records from a recipe file.
///
/// A file whose first non-whitespace byte is `[` is parsed as one JSON
/// array (labels `#0`, `#1`, ...); anything else is treated as
/// newline-delimited JSON (labels `L1`, `L2`, ... matching source lines).
pub fn load_records(path: &Path) -> Result<Vec<LabeledRecord>, SourceError> {
    let content = fs::read_to_string(path)?;

    let records = if content.trim_start().starts_with('[') {
        parse_array(&content)?
    } else {
        parse_lines(&content)?
    };

    if records.is_empty() {
        return Err(SourceError::Empty);
    }

    tracing::debug!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

fn parse_array(content: &str) -> Result<Vec<LabeledRecord>, SourceError> {
    let value: Value = serde_json::from_str(content).map_err(|source| SourceError::Json {
        line: source.line(),
        source,
    })?;

    // The leading `[` guarantees an array when the parse succeeded
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };

    Ok(items
        .into_iter()
        .enumerate()
        .map(|(index, value)| LabeledRecord {
            label: format!("#{index}"),
            value,
        })
        .collect())
}

fn parse_lines(content: &str) -> Result<Vec<LabeledRecord>, SourceError> {
    let mut records = Vec::new();

    for (index, raw) in content.lines().enumerate() {
        let line = index + 1;
        if raw.trim().is_empty() {
            continue;
        }

        let value: Value =
            serde_json::from_str(raw).map_err(|source| SourceError::Json { line, source })?;
        records.push(LabeledRecord {
            label: format!("L{line}"),
            value,
        });
    }

    Ok(records)
}
