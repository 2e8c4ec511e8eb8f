//! Host-engine integration for the Lume external string scanner.
//!
//! [`lume_scanner_core`] holds the recognizer itself; this crate wraps it
//! in the shape an embedding host actually drives: a [`ScanSession`] that
//! owns one scanner for the lifetime of a parse context, checks the raw
//! valid-symbols table the engine hands over, persists and restores the
//! fixed-size state [`Snapshot`] around incremental reparses, and traces
//! scan outcomes for debugging host wiring.
//!
//! Hosts that only need the bare recognizer can depend on the core crate
//! directly; everything it exports is re-exported here.

mod error;
pub mod session;

pub use error::ProtocolError;
pub use session::{ScanSession, Snapshot};

pub use lume_scanner_core::{
    Cursor, EncodingIssue, EncodingIssueKind, ExternalToken, Lexer, Scanner, SourceBuffer,
    ValidSymbols, ValidSymbolsError, SNAPSHOT_BYTE, SNAPSHOT_LEN,
};
