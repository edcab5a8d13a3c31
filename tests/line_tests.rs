//! Line Reader Tests
//!
//! Tests for console line accumulation, editing and forced termination.
//! Run with: cargo test --test line_tests

use ir_link_firmware::config::MAX_CHARS;
use ir_link_firmware::protocol::line::{Line, LineReader, BACKSPACE, CARRIAGE_RETURN, DELETE};

fn feed_all(reader: &mut LineReader, bytes: &[u8]) -> Option<Line> {
    bytes.iter().find_map(|&b| reader.feed(b))
}

// ============================================================================
// Basic Accumulation
// ============================================================================

#[test]
fn test_reader_creation() {
    let reader = LineReader::new();
    assert!(reader.pending().is_empty());
}

#[test]
fn test_reader_default() {
    let reader = LineReader::default();
    assert!(reader.pending().is_empty());
}

#[test]
fn test_printable_chars_accumulate() {
    let mut reader = LineReader::new();
    assert!(feed_all(&mut reader, b"baud 300").is_none());
    assert_eq!(reader.pending(), b"baud 300");
}

#[test]
fn test_carriage_return_completes_line() {
    let mut reader = LineReader::new();
    let line = feed_all(&mut reader, b"send hi\r").expect("line should complete");
    assert_eq!(line.as_bytes(), b"send hi");
    assert_eq!(line.as_str(), Some("send hi"));
    assert!(reader.pending().is_empty());
}

#[test]
fn test_empty_line() {
    let mut reader = LineReader::new();
    let line = reader.feed(CARRIAGE_RETURN).expect("line should complete");
    assert!(line.is_empty());
    assert_eq!(line.len(), 0);
}

#[test]
fn test_consecutive_lines_are_independent() {
    let mut reader = LineReader::new();
    let first = feed_all(&mut reader, b"one\r").unwrap();
    let second = feed_all(&mut reader, b"two\r").unwrap();
    assert_eq!(first.as_bytes(), b"one");
    assert_eq!(second.as_bytes(), b"two");
}

// ============================================================================
// Editing
// ============================================================================

#[test]
fn test_backspace_removes_last_char() {
    let mut reader = LineReader::new();
    let line = feed_all(&mut reader, &[b'a', b'b', BACKSPACE, b'c', CARRIAGE_RETURN]).unwrap();
    assert_eq!(line.as_bytes(), b"ac");
}

#[test]
fn test_delete_removes_last_char() {
    let mut reader = LineReader::new();
    let line = feed_all(&mut reader, &[b'a', b'b', DELETE, DELETE, b'z', CARRIAGE_RETURN]).unwrap();
    assert_eq!(line.as_bytes(), b"z");
}

#[test]
fn test_delete_on_empty_line_is_noop() {
    let mut reader = LineReader::new();
    assert!(reader.feed(DELETE).is_none());
    assert!(reader.feed(BACKSPACE).is_none());
    assert!(reader.pending().is_empty());

    let line = feed_all(&mut reader, b"x\r").unwrap();
    assert_eq!(line.as_bytes(), b"x");
}

#[test]
fn test_clear_discards_pending() {
    let mut reader = LineReader::new();
    feed_all(&mut reader, b"partial");
    reader.clear();
    let line = reader.feed(CARRIAGE_RETURN).unwrap();
    assert!(line.is_empty());
}

// ============================================================================
// Control Codes and High Bytes
// ============================================================================

#[test]
fn test_control_codes_ignored() {
    let mut reader = LineReader::new();
    // tab, line feed, escape, NUL
    let line = feed_all(&mut reader, &[b'a', 9, 10, 27, 0, b'b', CARRIAGE_RETURN]).unwrap();
    assert_eq!(line.as_bytes(), b"ab");
}

#[test]
fn test_high_bytes_accepted() {
    let mut reader = LineReader::new();
    let line = feed_all(&mut reader, &[0x80, 0xFF, CARRIAGE_RETURN]).unwrap();
    assert_eq!(line.as_bytes(), &[0x80_u8, 0xFF]);
    assert!(line.as_str().is_none());
}

// ============================================================================
// Capacity
// ============================================================================

#[test]
fn test_full_line_terminates_without_carriage_return() {
    let mut reader = LineReader::new();
    for _ in 0..MAX_CHARS - 1 {
        assert!(reader.feed(b'a').is_none());
    }
    let line = reader.feed(b'b').expect("80th character forces termination");
    assert_eq!(line.len(), MAX_CHARS);
    assert_eq!(line.as_bytes().last(), Some(&b'b'));
    assert!(reader.pending().is_empty());
}

#[test]
fn test_carriage_return_after_full_line_is_empty_line() {
    let mut reader = LineReader::new();
    let full = [b'x'; MAX_CHARS];
    assert!(feed_all(&mut reader, &full).is_some());
    let next = reader.feed(CARRIAGE_RETURN).unwrap();
    assert!(next.is_empty());
}

#[test]
fn test_line_from_bytes_capacity() {
    assert!(Line::from_bytes(&[b'a'; MAX_CHARS]).is_some());
    assert!(Line::from_bytes(&[b'a'; MAX_CHARS + 1]).is_none());
}

#[test]
fn test_line_from_bytes_rejects_nul() {
    assert!(Line::from_bytes(b"send ab\0cd").is_none());
    assert!(Line::from_bytes(b"\0").is_none());
    assert_eq!(Line::from_bytes(b"send abcd").map(|l| l.len()), Some(9));
}

// ============================================================================
// Iterator Source
// ============================================================================

#[test]
fn test_read_line_from_iterator() {
    let mut reader = LineReader::new();
    let mut source = b"baud 4800\rsend".iter().copied();

    let line = reader.read_line(&mut source).unwrap();
    assert_eq!(line.as_bytes(), b"baud 4800");

    // source runs dry mid-line; the partial line is kept
    assert!(reader.read_line(&mut source).is_none());
    assert_eq!(reader.pending(), b"send");
}
