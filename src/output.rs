//! Output formatting for token sequences and errors.
//!
//! Supports the plain text form produced by `TokenSequence::print` and a
//! JSON form.

use crate::core::TokenSequence;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Space-joined tokens followed by a newline.
    #[default]
    Text,
    /// JSON array of tokens.
    Json,
}

impl OutputFormat {
    /// Parses format from string. Anything other than `json` is text.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Formats a token sequence, always ending with a newline.
#[must_use]
pub fn format_sequence(seq: &TokenSequence, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("{seq}\n"),
        OutputFormat::Json => format!("{}\n", format_json(seq)),
    }
}

/// Formats a single token looked up by index, ending with a newline.
#[must_use]
pub fn format_element(index: usize, token: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("Element at index {index}: {token}\n"),
        OutputFormat::Json => format!("{}\n", format_json(&ElementBody { index, token })),
    }
}

/// Writes a formatted token sequence to `writer`.
///
/// # Errors
///
/// Returns [`Error::Io`] if the writer fails.
pub fn write_sequence<W: Write>(
    writer: &mut W,
    seq: &TokenSequence,
    format: OutputFormat,
) -> Result<()> {
    writer.write_all(format_sequence(seq, format).as_bytes())?;
    Ok(())
}

/// Writes a formatted indexed token to `writer`.
///
/// # Errors
///
/// Returns [`Error::Io`] if the writer fails.
pub fn write_element<W: Write>(
    writer: &mut W,
    index: usize,
    token: &str,
    format: OutputFormat,
) -> Result<()> {
    writer.write_all(format_element(index, token, format).as_bytes())?;
    Ok(())
}

/// Formats an error for display.
#[must_use]
pub fn format_error(err: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => err.to_string(),
        OutputFormat::Json => format_json(&ErrorBody {
            error: err.to_string(),
            kind: err.kind(),
        }),
    }
}

#[derive(Serialize)]
struct ElementBody<'a> {
    index: usize,
    token: &'a str,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    kind: &'static str,
}

fn format_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}
