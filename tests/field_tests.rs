//! Field Tokenizer Tests
//!
//! Tests for field splitting, field accessors and command matching.
//! Run with: cargo test --test field_tests

use ir_link_firmware::config::MAX_FIELDS;
use ir_link_firmware::protocol::fields::{Field, FieldKind, ParsedCommand};

// ============================================================================
// Tokenizing
// ============================================================================

#[test]
fn test_send_command_fields() {
    let parsed = ParsedCommand::parse(b"send hello world");
    assert_eq!(parsed.field_count(), 3);
    assert_eq!(
        parsed.fields(),
        &[
            Field { kind: FieldKind::Alpha, offset: 0 },
            Field { kind: FieldKind::Alpha, offset: 5 },
            Field { kind: FieldKind::Alpha, offset: 11 },
        ]
    );
}

#[test]
fn test_baud_command_fields() {
    let parsed = ParsedCommand::parse(b"baud 1200");
    assert_eq!(parsed.field_count(), 2);
    assert_eq!(parsed.field(0).map(|f| f.kind), Some(FieldKind::Alpha));
    assert_eq!(parsed.field(1).map(|f| f.kind), Some(FieldKind::Numeric));
}

#[test]
fn test_leading_and_repeated_delimiters() {
    let parsed = ParsedCommand::parse(b"  baud ,, 300  ");
    assert_eq!(parsed.field_count(), 2);
    assert_eq!(parsed.field(0).map(|f| f.offset), Some(2));
    assert_eq!(parsed.field_as_text(0), Some("baud"));
    assert_eq!(parsed.field_as_integer(1), 300);
}

#[test]
fn test_punctuation_is_delimiter() {
    let parsed = ParsedCommand::parse(b"send,hi!there");
    assert_eq!(parsed.field_count(), 3);
    assert_eq!(parsed.field_as_text(1), Some("hi"));
    assert_eq!(parsed.field_as_text(2), Some("there"));
}

#[test]
fn test_letters_then_digits_stay_one_field() {
    let parsed = ParsedCommand::parse(b"baud1200");
    assert_eq!(parsed.field_count(), 1);
    assert_eq!(parsed.field(0).map(|f| f.kind), Some(FieldKind::Alpha));
    assert_eq!(parsed.field_as_text(0), Some("baud1200"));
}

#[test]
fn test_digits_then_letters_stay_one_field() {
    let parsed = ParsedCommand::parse(b"300baud x");
    assert_eq!(parsed.field_count(), 2);
    assert_eq!(parsed.field(0).map(|f| f.kind), Some(FieldKind::Numeric));
    assert_eq!(parsed.field_as_text(0), Some("300baud"));
}

#[test]
fn test_field_limit() {
    let parsed = ParsedCommand::parse(b"a b c d e f g");
    assert_eq!(parsed.field_count(), MAX_FIELDS);
    assert!(parsed.field(MAX_FIELDS).is_none());
}

#[test]
fn test_only_delimiters() {
    let parsed = ParsedCommand::parse(b" ,.;- ");
    assert_eq!(parsed.field_count(), 0);
    assert!(parsed.field_as_text(0).is_none());
}

#[test]
fn test_input_beyond_capacity_ignored() {
    let mut long = [b'a'; 100];
    long[85] = b' ';
    let parsed = ParsedCommand::parse(&long);
    assert_eq!(parsed.field_count(), 1);
    assert_eq!(parsed.field_bytes(0).map(<[u8]>::len), Some(80));
}

// ============================================================================
// Accessors
// ============================================================================

#[test]
fn test_field_as_text_out_of_range() {
    let parsed = ParsedCommand::parse(b"send x");
    assert!(parsed.field_as_text(2).is_none());
    assert!(parsed.field_bytes(7).is_none());
}

#[test]
fn test_field_as_integer_values() {
    let parsed = ParsedCommand::parse(b"baud 4800 0 007");
    assert_eq!(parsed.field_as_integer(1), 4800);
    assert_eq!(parsed.field_as_integer(2), 0);
    assert_eq!(parsed.field_as_integer(3), 7);
}

#[test]
fn test_field_as_integer_non_numeric_is_zero() {
    let parsed = ParsedCommand::parse(b"baud fast");
    assert_eq!(parsed.field_as_integer(0), 0);
    assert_eq!(parsed.field_as_integer(1), 0);
}

#[test]
fn test_field_as_integer_missing_is_zero() {
    let parsed = ParsedCommand::parse(b"baud");
    assert_eq!(parsed.field_as_integer(1), 0);
}

#[test]
fn test_field_as_integer_has_no_sign() {
    // '-' is a delimiter, so the value is positive
    let parsed = ParsedCommand::parse(b"baud -300");
    assert_eq!(parsed.field_as_integer(1), 300);
}

#[test]
fn test_field_as_integer_wraps() {
    let parsed = ParsedCommand::parse(b"baud 4294967297");
    assert_eq!(parsed.field_as_integer(1), 1);
}

// ============================================================================
// Command Matching
// ============================================================================

#[test]
fn test_is_command_matches() {
    let parsed = ParsedCommand::parse(b"baud 300");
    assert!(parsed.is_command("baud", 1));
    assert!(parsed.is_command("baud", 0));
    assert!(!parsed.is_command("send", 1));
}

#[test]
fn test_is_command_needs_arguments() {
    let parsed = ParsedCommand::parse(b"send");
    assert!(parsed.is_command("send", 0));
    assert!(!parsed.is_command("send", 1));
}

#[test]
fn test_is_command_case_sensitive() {
    let parsed = ParsedCommand::parse(b"SEND hello");
    assert!(!parsed.is_command("send", 1));
}

#[test]
fn test_is_command_whole_field() {
    let parsed = ParsedCommand::parse(b"sender hello");
    assert!(!parsed.is_command("send", 1));
}

#[test]
fn test_is_command_on_empty_line() {
    let parsed = ParsedCommand::parse(b"");
    assert!(!parsed.is_command("send", 0));
    assert!(!parsed.is_command("", 0));
}
