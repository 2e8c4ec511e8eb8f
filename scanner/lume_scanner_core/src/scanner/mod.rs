//! The token recognizer the host engine calls between grammar rules.
//!
//! One scan call recognizes at most one token: a maximal run of literal
//! string-body characters ending before the next `"` or `\`. The recognizer
//! restarts from scratch on every call; nothing observable persists across
//! calls, which is why the serialized state is a single fixed marker byte.
//!
//! # Error recovery
//!
//! When regular parsing hits a syntax error, the engine's first recovery
//! action is to re-invoke the external scanner with *every* symbol marked
//! valid. There is nothing useful this scanner can contribute to recovery,
//! so it must detect that probe (the reserved [`ExternalToken::ErrorSentinel`]
//! slot is valid only then) and decline before touching the cursor.
//! Skipping that check first is the classic way external recognizers
//! corrupt recovery, so [`Scanner::scan`] performs it unconditionally.

use crate::lexer::Lexer;
use crate::token::ExternalToken;
use crate::valid_symbols::ValidSymbols;

/// Length in bytes of the serialized scanner state.
pub const SNAPSHOT_LEN: usize = 1;

/// The marker byte written by [`Scanner::serialize`].
///
/// Version zero of the snapshot layout. The scanner carries no semantic
/// state, so the entire persisted representation is this one constant byte.
pub const SNAPSHOT_BYTE: u8 = 0;

/// External scanner state.
///
/// Deliberately empty: string content is recognized statelessly, one call
/// at a time. The type still exists (rather than free functions) because
/// the engine's protocol is built around a create/destroy lifecycle and a
/// state snapshot, and because future grammar work (nested raw strings,
/// heredocs) would grow fields here without changing the call surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Scanner {}

impl Scanner {
    /// Create a fresh scanner. Infallible.
    pub fn new() -> Self {
        Scanner {}
    }

    /// Write the persisted state into `buffer`, returning the number of
    /// bytes written (always [`SNAPSHOT_LEN`]).
    ///
    /// The output is deterministic and constant regardless of call history.
    ///
    /// # Contract
    ///
    /// `buffer.len() >= SNAPSHOT_LEN`. The engine's snapshot buffer is far
    /// larger than one byte; the guard is for direct embedders.
    pub fn serialize(&self, buffer: &mut [u8]) -> usize {
        debug_assert!(
            buffer.len() >= SNAPSHOT_LEN,
            "snapshot buffer must hold at least {SNAPSHOT_LEN} byte"
        );
        buffer[0] = SNAPSHOT_BYTE;
        SNAPSHOT_LEN
    }

    /// Restore state from a previously serialized `buffer`.
    ///
    /// A buffer of exactly [`SNAPSHOT_LEN`] bytes restores the (empty)
    /// state. Every other length, the empty buffer of a fresh parse
    /// included, means "nothing to restore" and is accepted silently; the
    /// engine legitimately calls both ways, so no error is signaled.
    pub fn deserialize(&mut self, buffer: &[u8]) {
        if buffer.len() == SNAPSHOT_LEN {
            // Version-zero snapshots carry no payload.
            *self = Scanner {};
        }
    }

    /// Recognize the next external token, if any.
    ///
    /// Returns `Some(StringContent)` after consuming a non-empty run of
    /// literal string-body characters and committing the token end at the
    /// stopping `"` or `\` (exclusive). Returns `None`, with the cursor
    /// untouched, when the engine is probing during error recovery, and
    /// after a failed content scan (end of input, or a stop character with
    /// nothing consumed).
    pub fn scan<L: Lexer>(
        &mut self,
        lexer: &mut L,
        valid: ValidSymbols<'_>,
    ) -> Option<ExternalToken> {
        // Recovery probe: all symbols valid, sentinel included. Decline
        // before moving the cursor.
        if valid.in_error_recovery() {
            return None;
        }

        if valid.accepts(ExternalToken::StringContent) {
            return self.string_content(lexer);
        }

        None
    }

    /// Scanning -> Accepted on a stop character with content consumed;
    /// Scanning -> Rejected at end of input or on an immediate stop
    /// character.
    fn string_content<L: Lexer>(&mut self, lexer: &mut L) -> Option<ExternalToken> {
        let mut has_content = false;
        loop {
            match lexer.peek() {
                // Quote close and escape sequences belong to the grammar;
                // stop in front of them, consuming neither.
                '"' | '\\' => break,
                _ if lexer.at_end() => {
                    // Unterminated string. Let grammar-level error
                    // handling take over.
                    return None;
                }
                _ => {
                    lexer.advance();
                    has_content = true;
                }
            }
        }

        if has_content {
            lexer.mark_end();
            Some(ExternalToken::StringContent)
        } else {
            // Empty body (""): the grammar models it as zero occurrences
            // of this token, not a zero-length match.
            None
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
