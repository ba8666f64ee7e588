//! Ordered, owned sequence of string tokens.
//!
//! A `TokenSequence` is built empty or by splitting text on a single
//! separator character, grows by appending, and can be truncated or padded
//! to an explicit length. Element access is always bounds-checked.

use crate::error::{Error, Result};
use crate::split::{SplitConvention, split_tokens};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};

/// An ordered sequence of owned string tokens.
///
/// Insertion order is preserved and duplicates are allowed. The sequence
/// owns its strings outright.
///
/// # Examples
///
/// ```
/// use tokseq::TokenSequence;
///
/// let mut seq = TokenSequence::split("one two three", ' ');
/// seq.append("four");
/// seq.resize(2);
/// assert_eq!(seq.to_string(), "one two");
/// assert_eq!(seq.get(1).unwrap(), "two");
/// assert!(seq.get(5).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenSequence {
    tokens: Vec<String>,
}

impl TokenSequence {
    /// Creates an empty sequence.
    #[must_use]
    pub const fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Splits `text` on `sep` using [`SplitConvention::Standard`].
    ///
    /// Leading, repeated and trailing separators each produce an empty
    /// token, and the token count is always one more than the number of
    /// separators in `text`.
    #[must_use]
    pub fn split(text: &str, sep: char) -> Self {
        Self::split_with(text, sep, SplitConvention::Standard)
    }

    /// Splits `text` on `sep` using an explicit convention.
    #[must_use]
    pub fn split_with(text: &str, sep: char, convention: SplitConvention) -> Self {
        let tokens = split_tokens(text, sep, convention);
        tracing::debug!(
            separator = ?sep,
            %convention,
            token_count = tokens.len(),
            "split text into tokens"
        );
        Self { tokens }
    }

    /// Appends `element` as the new last token.
    pub fn append(&mut self, element: impl Into<String>) {
        self.tokens.push(element.into());
        tracing::trace!(len = self.tokens.len(), "appended token");
    }

    /// Truncates or pads the sequence to exactly `new_len` tokens.
    ///
    /// Surviving tokens keep their order; padding uses empty strings.
    pub fn resize(&mut self, new_len: usize) {
        let old_len = self.tokens.len();
        self.tokens.resize(new_len, String::new());
        tracing::debug!(old_len, new_len, "resized sequence");
    }

    /// Returns the number of tokens.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if the sequence holds no tokens.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns the token at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index >= self.len()`.
    pub fn get(&self, index: usize) -> Result<&str> {
        self.tokens
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| self.out_of_range(index))
    }

    /// Returns a mutable reference to the token at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index >= self.len()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut String> {
        let len = self.tokens.len();
        match self.tokens.get_mut(index) {
            Some(token) => Ok(token),
            None => Err(out_of_range(index, len)),
        }
    }

    /// Replaces the token at `index`, returning the previous value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index >= self.len()`.
    pub fn set(&mut self, index: usize, value: impl Into<String>) -> Result<String> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, value.into()))
    }

    /// Returns an iterator over the tokens.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.tokens.iter()
    }

    /// Returns the tokens as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.tokens
    }

    /// Consumes the sequence, returning the owned tokens.
    #[must_use]
    pub fn into_tokens(self) -> Vec<String> {
        self.tokens
    }

    /// Writes the tokens separated by single spaces, then a newline.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writeln!(writer, "{self}")
    }

    /// Prints the tokens to stdout, separated by single spaces and
    /// terminated by a newline.
    ///
    /// Write failures (a closed pipe, for instance) are logged and
    /// otherwise ignored.
    pub fn print(&self) {
        self.print_to(io::stdout().lock());
    }

    /// Writes like [`Self::write_to`], logging instead of returning errors.
    fn print_to<W: Write>(&self, writer: W) -> bool {
        match self.write_to(writer) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "failed to print token sequence");
                false
            }
        }
    }

    fn out_of_range(&self, index: usize) -> Error {
        out_of_range(index, self.tokens.len())
    }
}

fn out_of_range(index: usize, len: usize) -> Error {
    tracing::warn!(index, len, "token index out of range");
    Error::OutOfRange { index, len }
}

impl fmt::Display for TokenSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tokens = self.tokens.iter();
        if let Some(first) = tokens.next() {
            f.write_str(first)?;
            for token in tokens {
                f.write_str(" ")?;
                f.write_str(token)?;
            }
        }
        Ok(())
    }
}

impl From<Vec<String>> for TokenSequence {
    fn from(tokens: Vec<String>) -> Self {
        Self { tokens }
    }
}

impl<S: Into<String>> FromIterator<S> for TokenSequence {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for TokenSequence {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.tokens.extend(iter.into_iter().map(Into::into));
    }
}

impl IntoIterator for TokenSequence {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn printed(seq: &TokenSequence) -> String {
        let mut out = Vec::new();
        seq.write_to(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_new_is_empty() {
        let seq = TokenSequence::new();
        assert!(seq.is_empty());
        assert_eq!(seq.len(), 0);
        assert_eq!(seq, TokenSequence::default());
    }

    #[test]
    fn test_split_space() {
        let seq = TokenSequence::split("one two three", ' ');
        assert_eq!(seq.as_slice(), ["one", "two", "three"]);
        assert_eq!(printed(&seq), "one two three\n");
    }

    #[test]
    fn test_split_comma_keeps_inner_spaces() {
        let seq = TokenSequence::split("one,two,and three", ',');
        assert_eq!(seq.as_slice(), ["one", "two", "and three"]);
        assert_eq!(printed(&seq), "one two and three\n");
    }

    #[test]
    fn test_split_with_stream() {
        let seq = TokenSequence::split_with("a;b;", ';', SplitConvention::Stream);
        assert_eq!(seq.as_slice(), ["a", "b"]);
        let seq = TokenSequence::split_with("", ';', SplitConvention::Stream);
        assert!(seq.is_empty());
    }

    #[test]
    fn test_append() {
        let mut seq = TokenSequence::split("one two three", ' ');
        seq.append("four");
        assert_eq!(seq.len(), 4);
        assert_eq!(seq.get(3).unwrap(), "four");
        seq.append(String::from("four"));
        assert_eq!(seq.len(), 5);
    }

    #[test]
    fn test_resize_truncate_and_grow() {
        let mut seq = TokenSequence::split("one two three four", ' ');
        seq.resize(2);
        assert_eq!(seq.as_slice(), ["one", "two"]);

        seq.resize(4);
        assert_eq!(seq.as_slice(), ["one", "two", "", ""]);

        seq.resize(4);
        assert_eq!(seq.len(), 4);

        seq.resize(0);
        assert!(seq.is_empty());
    }

    #[test]
    fn test_get_out_of_range() {
        let seq = TokenSequence::split("one two", ' ');
        assert_eq!(seq.get(1).unwrap(), "two");
        assert_eq!(seq.get(5), Err(Error::OutOfRange { index: 5, len: 2 }));
        assert_eq!(seq.get(2), Err(Error::OutOfRange { index: 2, len: 2 }));
        assert!(TokenSequence::new().get(0).is_err());
    }

    #[test]
    fn test_get_mut_assigns_in_place() {
        let mut seq = TokenSequence::split("one two", ' ');
        *seq.get_mut(0).unwrap() = "uno".to_string();
        assert_eq!(seq.as_slice(), ["uno", "two"]);
        assert_eq!(seq.len(), 2);

        let err = seq.get_mut(2).unwrap_err();
        assert!(err.is_out_of_range());
    }

    #[test]
    fn test_set_returns_previous() {
        let mut seq = TokenSequence::split("a b", ' ');
        let old = seq.set(1, "z").unwrap();
        assert_eq!(old, "b");
        assert_eq!(seq.as_slice(), ["a", "z"]);
        assert!(seq.set(9, "x").is_err());
        assert_eq!(seq.as_slice(), ["a", "z"]);
    }

    #[test]
    fn test_print_empty_is_newline() {
        assert_eq!(printed(&TokenSequence::new()), "\n");
    }

    #[test]
    fn test_print_swallows_write_failure() {
        struct ClosedPipe;

        impl Write for ClosedPipe {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::ErrorKind::BrokenPipe.into())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let seq = TokenSequence::split("one two", ' ');
        assert!(!seq.print_to(ClosedPipe));
        assert!(seq.write_to(ClosedPipe).is_err());

        let mut out = Vec::new();
        assert!(seq.print_to(&mut out));
        assert_eq!(out, b"one two\n");
        assert_eq!(seq.len(), 2);
    }

    #[test]
    fn test_print_preserves_empty_tokens() {
        let seq = TokenSequence::split(",a,", ',');
        assert_eq!(printed(&seq), " a \n");
    }

    #[test]
    fn test_collect_extend_iterate() {
        let mut seq: TokenSequence = ["x", "y"].into_iter().collect();
        seq.extend(vec![String::from("z")]);
        let joined: Vec<&str> = seq.iter().map(String::as_str).collect();
        assert_eq!(joined, ["x", "y", "z"]);

        let mut count = 0;
        for _ in &seq {
            count += 1;
        }
        assert_eq!(count, 3);
        assert_eq!(seq.into_tokens(), ["x", "y", "z"]);
    }

    #[test]
    fn test_from_vec() {
        let seq = TokenSequence::from(vec!["dup".to_string(), "dup".to_string()]);
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.to_string(), "dup dup");
    }

    #[test]
    fn test_serialization() {
        let seq = TokenSequence::split("one,two", ',');
        let json = serde_json::to_string(&seq).unwrap();
        assert_eq!(json, r#"["one","two"]"#);

        let back: TokenSequence = serde_json::from_str(&json).unwrap();
        assert_eq!(back, seq);
    }
}
