//! Errors for host wiring mistakes at the scanner boundary.
//!
//! Nothing here covers scan outcomes; "no token matched" is an ordinary
//! result, not an error. These errors only surface when the embedding host
//! violates the call contract itself.

use lume_scanner_core::ValidSymbolsError;
use thiserror::Error;

/// Host-side violation of the external-scanner call contract.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProtocolError {
    /// The engine supplied a valid-symbols table with too few slots for
    /// the grammar's external-token list.
    #[error("scan call rejected: {0}")]
    TableTooShort(#[from] ValidSymbolsError),
}
