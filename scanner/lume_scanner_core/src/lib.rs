//! External string-content scanner for the Lume grammar.
//!
//! Lume's grammar hands one token to an external recognizer: the literal
//! body of a quoted string, which runs up to (but never includes) the next
//! `"` or `\`. Quote closing and escape sequences stay in the grammar; this
//! crate only answers "how far does the raw content reach?" each time the
//! host's incremental parsing engine asks.
//!
//! # Protocol
//!
//! The engine drives the scanner through five operations: create
//! ([`Scanner::new`]), destroy (`Drop`), serialize/deserialize
//! ([`Scanner::serialize`], [`Scanner::deserialize`]) for incremental
//! reparse snapshots, and [`Scanner::scan`]. Each scan call receives the
//! engine's cursor as a [`Lexer`] capability and a [`ValidSymbols`] table
//! saying which [`ExternalToken`]s the current parse state accepts.
//!
//! During syntax-error recovery the engine probes with *every* symbol
//! marked valid. The reserved [`ExternalToken::ErrorSentinel`] slot makes
//! that mode detectable, and the scanner refuses to match while it is set.
//!
//! # Embedding
//!
//! The engine owns the real cursor. [`SourceBuffer`] and [`Cursor`] provide
//! a sentinel-terminated reference implementation of [`Lexer`] for tests,
//! tools, and hosts that feed the scanner from an in-memory `&str`.

pub mod cursor;
mod lexer;
pub mod scanner;
pub mod source_buffer;
pub mod token;
pub mod valid_symbols;

pub use cursor::Cursor;
pub use lexer::Lexer;
pub use scanner::{Scanner, SNAPSHOT_BYTE, SNAPSHOT_LEN};
pub use source_buffer::{EncodingIssue, EncodingIssueKind, SourceBuffer};
pub use token::ExternalToken;
pub use valid_symbols::{ValidSymbols, ValidSymbolsError};
