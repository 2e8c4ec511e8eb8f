//! The cursor capability the host engine hands to every scan call.
//!
//! The engine owns the input buffer, the read position, and the committed
//! token boundary; the scanner only drives them through this trait. One
//! scan call gets exclusive use of one cursor, so the methods take plain
//! `&self`/`&mut self` with no interior locking.

/// Host-owned lexing cursor.
///
/// # Contract
///
/// - [`peek`](Self::peek) returns the next unconsumed character without
///   consuming it, and NUL (`'\0'`) once the input is exhausted. Inputs may
///   legitimately contain NUL, so EOF is answered by
///   [`at_end`](Self::at_end), not by the peeked character.
/// - [`advance`](Self::advance) consumes exactly one character. Advancing
///   at end of input is a no-op.
/// - [`mark_end`](Self::mark_end) commits the current position as the end
///   of the token being recognized. The engine discards the mark if the
///   scan reports no match.
pub trait Lexer {
    /// Next unconsumed character, `'\0'` at end of input.
    fn peek(&self) -> char;

    /// `true` once every input character has been consumed.
    fn at_end(&self) -> bool;

    /// Consume one character.
    fn advance(&mut self);

    /// Commit the current position as the end of the recognized token.
    fn mark_end(&mut self);
}
