//! Command Line Tokenizer
//!
//! Splits a command line into up to [`MAX_FIELDS`] fields. A field is a
//! run of letters or a run of digits; everything else is a delimiter and is
//! overwritten with a terminator in the working copy, so each field can be
//! read up to the next zero byte.
//!
//! A field is only opened when a run starts after a delimiter. A letter run
//! that turns into digits without a delimiter (or the other way round) stays
//! one field with the kind of its first character: `baud1200` is a single
//! alpha field. Commands rely on this, so it is kept as is.

use heapless::Vec;

use crate::config::{MAX_CHARS, MAX_FIELDS};

/// Kind of a field, taken from its first character
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Starts with a letter
    Alpha,
    /// Starts with a digit
    Numeric,
}

#[cfg(feature = "embedded")]
impl defmt::Format for FieldKind {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Alpha => defmt::write!(f, "a"),
            Self::Numeric => defmt::write!(f, "n"),
        }
    }
}

/// Location and kind of one field
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field {
    /// Kind of the field
    pub kind: FieldKind,
    /// Offset of its first character in the line
    pub offset: usize,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Scan {
    Delimiter,
    Alpha,
    Numeric,
}

/// A tokenized command line
pub struct ParsedCommand {
    /// Working copy with delimiters zeroed; always ends in a zero byte
    raw: [u8; MAX_CHARS + 1],
    fields: Vec<Field, MAX_FIELDS>,
}

impl ParsedCommand {
    /// Tokenize a line
    ///
    /// Input beyond [`MAX_CHARS`] is ignored. Scanning stops at the first
    /// zero byte or once the field table is full; characters after that
    /// point are left as they are.
    #[must_use]
    pub fn parse(line: &[u8]) -> Self {
        let mut raw = [0; MAX_CHARS + 1];
        let len = line.len().min(MAX_CHARS);
        raw[..len].copy_from_slice(&line[..len]);

        let mut parsed = Self {
            raw,
            fields: Vec::new(),
        };
        parsed.tokenize();
        parsed
    }

    fn tokenize(&mut self) {
        let mut scan = Scan::Delimiter;
        let mut i = 0;

        while self.raw[i] != 0 && !self.fields.is_full() {
            let c = self.raw[i];
            if c.is_ascii_alphabetic() {
                if scan == Scan::Delimiter {
                    self.open(FieldKind::Alpha, i);
                }
                scan = Scan::Alpha;
            } else if c.is_ascii_digit() {
                if scan == Scan::Delimiter {
                    self.open(FieldKind::Numeric, i);
                }
                scan = Scan::Numeric;
            } else {
                scan = Scan::Delimiter;
                self.raw[i] = 0;
            }
            i += 1;
        }
    }

    fn open(&mut self, kind: FieldKind, offset: usize) {
        // loop condition guarantees room
        let _ = self.fields.push(Field { kind, offset });
    }

    /// Number of fields found
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// All fields in order of appearance
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Descriptor of field `n`
    #[must_use]
    pub fn field(&self, n: usize) -> Option<Field> {
        self.fields.get(n).copied()
    }

    /// Bytes of field `n` up to its terminator
    #[must_use]
    pub fn field_bytes(&self, n: usize) -> Option<&[u8]> {
        let field = self.fields.get(n)?;
        let run = &self.raw[field.offset..];
        let end = run.iter().position(|&b| b == 0).unwrap_or(run.len());
        Some(&run[..end])
    }

    /// Text of field `n`, None if there is no such field
    #[must_use]
    pub fn field_as_text(&self, n: usize) -> Option<&str> {
        core::str::from_utf8(self.field_bytes(n)?).ok()
    }

    /// Decimal value of field `n`
    ///
    /// Returns 0 when the field is missing or not numeric, which cannot be
    /// told apart from a literal `0`. No sign handling; values that do not
    /// fit an `i32` wrap.
    #[must_use]
    pub fn field_as_integer(&self, n: usize) -> i32 {
        match (self.field(n), self.field_bytes(n)) {
            (Some(field), Some(digits)) if field.kind == FieldKind::Numeric => {
                digits.iter().fold(0_i32, |value, &c| {
                    value
                        .wrapping_mul(10)
                        .wrapping_add(i32::from(c).wrapping_sub(i32::from(b'0')))
                })
            }
            _ => 0,
        }
    }

    /// Check whether field 0 is `name` followed by at least `min_args` fields
    #[must_use]
    pub fn is_command(&self, name: &str, min_args: usize) -> bool {
        self.field_as_text(0) == Some(name) && self.field_count() > min_args
    }

    /// Working buffer after tokenization
    #[must_use]
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimiters_are_zeroed_in_place() {
        let parsed = ParsedCommand::parse(b"a,b");
        assert_eq!(&parsed.raw()[..4], b"a\0b\0");
    }

    #[test]
    fn full_table_leaves_the_rest_untouched() {
        let parsed = ParsedCommand::parse(b"a b c d e f");
        assert_eq!(parsed.field_count(), MAX_FIELDS);
        // scanning stopped right after opening the fifth field
        assert_eq!(parsed.field_bytes(4), Some(&b"e f"[..]));
    }

    #[test]
    fn mixed_run_keeps_first_kind() {
        let parsed = ParsedCommand::parse(b"12ab");
        assert_eq!(parsed.field_count(), 1);
        assert_eq!(parsed.field(0).map(|f| f.kind), Some(FieldKind::Numeric));
    }

    #[test]
    fn empty_line_has_no_fields() {
        let parsed = ParsedCommand::parse(b"");
        assert_eq!(parsed.field_count(), 0);
        assert!(!parsed.is_command("send", 0));
    }
}
