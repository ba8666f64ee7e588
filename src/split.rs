//! Separator-based tokenization.
//!
//! Two conventions are supported. They agree on leading and repeated
//! separators (each yields an empty token) and differ only at the end of
//! the input.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How separators at the edges of the input are turned into tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitConvention {
    /// Every separator is a boundary. A trailing separator yields a
    /// trailing empty token and empty input yields one empty token, so the
    /// token count is always the separator count plus one.
    #[default]
    Standard,

    /// Read-until-separator semantics. A trailing separator does not start
    /// a new token and empty input yields no tokens.
    Stream,
}

impl SplitConvention {
    /// Returns the canonical name of the convention.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Stream => "stream",
        }
    }
}

impl fmt::Display for SplitConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SplitConvention {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "stream" => Ok(Self::Stream),
            other => Err(Error::Config {
                message: format!("unknown split convention: {other} (expected standard or stream)"),
            }),
        }
    }
}

/// Splits `text` on every occurrence of `sep`.
///
/// # Examples
///
/// ```
/// use tokseq::split::{SplitConvention, split_tokens};
///
/// let tokens = split_tokens("a,b,", ',', SplitConvention::Standard);
/// assert_eq!(tokens, ["a", "b", ""]);
///
/// let tokens = split_tokens("a,b,", ',', SplitConvention::Stream);
/// assert_eq!(tokens, ["a", "b"]);
/// ```
#[must_use]
pub fn split_tokens(text: &str, sep: char, convention: SplitConvention) -> Vec<String> {
    let mut tokens: Vec<String> = text.split(sep).map(str::to_string).collect();

    if convention == SplitConvention::Stream {
        // `str::split` always yields a final piece; the stream reader stops
        // once input is exhausted instead.
        if tokens.last().is_some_and(String::is_empty) {
            tokens.pop();
        }
    }

    tokens
}
