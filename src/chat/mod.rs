//! # chat
//!
//! Parsing utilities for tab-delimited Infantry chat logs.
//! Use `chat::parse::from_file(...)` or `chat::parse::from_text(...)` to
//! create a `ChatLog`. Helper routines are in `chat::support` (redaction,
//! line parsing, player statistics).

pub mod parse;
pub(crate) mod support;
