use super::*;

// === Discriminants ===

#[test]
fn discriminants_match_grammar_externals_order() {
    // Must match the order of the grammar's `externals` list exactly.
    assert_eq!(ExternalToken::StringContent as u8, 0);
    assert_eq!(ExternalToken::ErrorSentinel as u8, 1);
}

#[test]
fn token_is_one_byte() {
    assert_eq!(std::mem::size_of::<ExternalToken>(), 1);
}

#[test]
fn count_covers_every_variant() {
    assert_eq!(ExternalToken::COUNT, 2);
    assert!(ExternalToken::StringContent.ordinal() < ExternalToken::COUNT);
    assert!(ExternalToken::ErrorSentinel.ordinal() < ExternalToken::COUNT);
}

// === Ordinal ===

#[test]
fn ordinal_matches_discriminant() {
    assert_eq!(ExternalToken::StringContent.ordinal(), 0);
    assert_eq!(ExternalToken::ErrorSentinel.ordinal(), 1);
}

// === Name ===

#[test]
fn name_returns_readable_description() {
    assert_eq!(ExternalToken::StringContent.name(), "string content");
    assert_eq!(ExternalToken::ErrorSentinel.name(), "error sentinel");
}
