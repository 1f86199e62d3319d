//! Front-matter splitting and metadata parsing.
//!
//! Documents may start with a YAML header delimited by `---` lines:
//!
//! ```text
//! ---
//! title: Getting started
//! date: "2021-05-01"
//! draft: false
//! ---
//!
//! Markdown body...
//! ```
//!
//! [`split`] separates the header from the body and parses the header into
//! a [`Matter`] mapping. Values keep their parsed YAML types (strings,
//! numbers, booleans), represented as [`serde_json::Value`].

use std::collections::HashMap;

use serde_json::Value;

/// Front-matter delimiter line.
const DELIMITER: &str = "---";

/// Parsed front-matter: an open mapping of string keys to scalar values.
///
/// Field names carry no schema beyond convention; [`date`](Self::date) and
/// [`title`](Self::title) are the fields the pipeline itself consumes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Matter {
    fields: HashMap<String, Value>,
}

impl Matter {
    /// Parse matter from YAML header content.
    ///
    /// Empty or whitespace-only content yields an empty mapping.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or is not a mapping.
    pub fn parse(content: &str) -> Result<Self, MatterError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }

        let fields = serde_yaml::from_str(trimmed)
            .map_err(|e| MatterError::Yaml(format!("Invalid YAML header: {e}")))?;
        Ok(Self { fields })
    }

    /// Look up a field by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// The `date` field as a string, if present and string-typed.
    ///
    /// Dates are compared as plain strings by the indexer, so quoted and
    /// unquoted `YYYY-MM-DD` values behave identically.
    #[must_use]
    pub fn date(&self) -> Option<&str> {
        self.get("date").and_then(Value::as_str)
    }

    /// The `title` field as a string, if present and string-typed.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.get("title").and_then(Value::as_str)
    }

    /// Check if the mapping has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of fields in the mapping.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Iterate over all key/value pairs. Order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Error type for front-matter operations.
#[derive(Debug, thiserror::Error)]
pub enum MatterError {
    /// An opening `---` delimiter has no matching closing delimiter.
    #[error("Unterminated front-matter header (missing closing '---')")]
    UnterminatedHeader,
    /// YAML parsing error.
    #[error("{0}")]
    Yaml(String),
}

/// Split a raw document into front-matter and body.
///
/// A document has a header only when its very first line is `---`; the
/// header runs until the next `---` line, and the body is everything
/// after it. Documents without a header yield an empty [`Matter`] and the
/// full content as body. The returned body never contains header
/// remnants.
///
/// # Errors
///
/// Returns [`MatterError::UnterminatedHeader`] if an opening delimiter is
/// never closed, or [`MatterError::Yaml`] if the header is not valid YAML.
pub fn split(content: &str) -> Result<(Matter, &str), MatterError> {
    let Some(header_start) = opening_delimiter_end(content) else {
        return Ok((Matter::default(), content));
    };

    let rest = &content[header_start..];
    let mut pos = 0;
    loop {
        let line_end = rest[pos..].find('\n').map_or(rest.len(), |i| pos + i);
        let line = rest[pos..line_end].trim_end_matches('\r');
        if line == DELIMITER {
            let matter = Matter::parse(&rest[..pos])?;
            let body = if line_end < rest.len() {
                &rest[line_end + 1..]
            } else {
                ""
            };
            return Ok((matter, body));
        }
        if line_end >= rest.len() {
            return Err(MatterError::UnterminatedHeader);
        }
        pos = line_end + 1;
    }
}

/// Byte offset just past the opening `---` line, if the content starts
/// with one.
fn opening_delimiter_end(content: &str) -> Option<usize> {
    let rest = content.strip_prefix(DELIMITER)?;
    if let Some(after) = rest.strip_prefix("\r\n") {
        return Some(content.len() - after.len());
    }
    rest.strip_prefix('\n').map(|after| content.len() - after.len())
}
