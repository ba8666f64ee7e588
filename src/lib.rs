//! # tokseq
//!
//! An ordered, owned container of string tokens.
//!
//! A [`TokenSequence`] is built empty or by splitting text on a single
//! separator character. It supports appending, resizing to an explicit
//! length, bounds-checked element access and printing its contents as a
//! space-joined line.
//!
//! ## Split convention
//!
//! [`TokenSequence::split`] treats every separator as a boundary: leading,
//! repeated and trailing separators each yield an empty token, so splitting
//! text with `n` separators always gives `n + 1` tokens. The
//! [`SplitConvention::Stream`] convention instead drops the empty token
//! after a trailing separator and yields nothing for empty input.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]

pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod split;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

pub use config::Config;
pub use core::TokenSequence;
pub use output::{OutputFormat, format_error, format_sequence};
pub use split::{SplitConvention, split_tokens};
