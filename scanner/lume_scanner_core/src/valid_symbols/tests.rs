use super::*;
use pretty_assertions::assert_eq;

// === Construction ===

#[test]
fn from_slice_accepts_exact_size() {
    let table = [true, false];
    let valid = ValidSymbols::from_slice(&table).expect("two slots suffice");
    assert!(valid.accepts(ExternalToken::StringContent));
    assert!(!valid.accepts(ExternalToken::ErrorSentinel));
}

#[test]
fn from_slice_accepts_oversized_table() {
    // Engines may pass one table covering internal symbols too.
    let table = [false, true, true, false];
    let valid = ValidSymbols::from_slice(&table).expect("extra slots are fine");
    assert!(!valid.accepts(ExternalToken::StringContent));
    assert!(valid.accepts(ExternalToken::ErrorSentinel));
}

#[test]
fn from_slice_rejects_short_table() {
    let err = ValidSymbols::from_slice(&[true]).unwrap_err();
    assert_eq!(
        err,
        ValidSymbolsError::TableTooShort {
            expected: ExternalToken::COUNT,
            actual: 1,
        }
    );
}

#[test]
fn from_slice_rejects_empty_table() {
    let err = ValidSymbols::from_slice(&[]).unwrap_err();
    assert_eq!(
        err,
        ValidSymbolsError::TableTooShort {
            expected: ExternalToken::COUNT,
            actual: 0,
        }
    );
}

// === Recovery detection ===

#[test]
fn all_valid_reads_as_recovery_probe() {
    let valid = ValidSymbols::all_valid();
    assert!(valid.in_error_recovery());
    assert!(valid.accepts(ExternalToken::StringContent));
}

#[test]
fn recovery_follows_the_sentinel_slot_only() {
    let table = [false, true];
    let valid = ValidSymbols::from_slice(&table).expect("two slots suffice");
    assert!(valid.in_error_recovery());

    let table = [true, false];
    let valid = ValidSymbols::from_slice(&table).expect("two slots suffice");
    assert!(!valid.in_error_recovery());
}

// === Display ===

#[test]
fn error_display_names_both_lengths() {
    let err = ValidSymbolsError::TableTooShort {
        expected: 2,
        actual: 1,
    };
    assert_eq!(
        err.to_string(),
        "valid-symbols table has 1 slots, grammar declares 2 external tokens"
    );
}
