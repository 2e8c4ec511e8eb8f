//! One scanner instance driven through a parse context's lifetime.
//!
//! The engine's protocol is create, then any interleaving of scan and
//! serialize/deserialize, then destroy. [`ScanSession`] is that lifecycle
//! as a value: construction is create, drop is destroy, [`snapshot`] and
//! [`restore`] move state across incremental reparses, and [`scan`] checks
//! the raw table before handing control to the recognizer.
//!
//! [`scan`]: ScanSession::scan
//! [`snapshot`]: ScanSession::snapshot
//! [`restore`]: ScanSession::restore

use lume_scanner_core::{ExternalToken, Lexer, Scanner, ValidSymbols, SNAPSHOT_LEN};
use tracing::trace;

use crate::error::ProtocolError;

/// The persisted form of a session's scanner state.
///
/// Fixed-size; the engine stores it between parses and feeds it back via
/// [`ScanSession::restore`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Snapshot {
    bytes: [u8; SNAPSHOT_LEN],
}

impl Snapshot {
    /// The serialized bytes, ready for the engine's snapshot storage.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// An external-scanner instance bound to one parse context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanSession {
    scanner: Scanner,
}

impl ScanSession {
    /// Create a session with a fresh scanner.
    pub fn new() -> Self {
        ScanSession {
            scanner: Scanner::new(),
        }
    }

    /// Run one scan against the engine's cursor and raw valid-symbols
    /// table.
    ///
    /// Returns the recognizer's outcome, or [`ProtocolError`] if the table
    /// cannot cover the grammar's external-token list. The outcome is
    /// traced either way a scan actually runs.
    pub fn scan<L: Lexer>(
        &mut self,
        lexer: &mut L,
        table: &[bool],
    ) -> Result<Option<ExternalToken>, ProtocolError> {
        let valid = ValidSymbols::from_slice(table)?;
        let outcome = self.scanner.scan(lexer, valid);
        trace!(
            recovery = valid.in_error_recovery(),
            matched = outcome.map(ExternalToken::name),
            "external scan"
        );
        Ok(outcome)
    }

    /// Serialize the scanner state for the engine's snapshot storage.
    pub fn snapshot(&self) -> Snapshot {
        let mut bytes = [0u8; SNAPSHOT_LEN];
        let _ = self.scanner.serialize(&mut bytes);
        Snapshot { bytes }
    }

    /// Restore scanner state from bytes the engine persisted earlier.
    ///
    /// Permissive by contract: an empty buffer (fresh parse) and a
    /// [`SNAPSHOT_LEN`]-byte buffer (resumed parse) are both normal; any
    /// other length restores nothing. The odd lengths are traced so host
    /// integration bugs stay visible without breaking the contract.
    pub fn restore(&mut self, bytes: &[u8]) {
        if !bytes.is_empty() && bytes.len() != SNAPSHOT_LEN {
            trace!(len = bytes.len(), "unexpected snapshot length, nothing restored");
        }
        self.scanner.deserialize(bytes);
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
