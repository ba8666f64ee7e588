//! Core container types.
//!
//! Pure domain model with no I/O beyond printing to stdout.

pub mod sequence;

pub use sequence::TokenSequence;
