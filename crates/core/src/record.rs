//! Textual codebook records.
//!
//! The codebook persists as one record per line:
//!
//! ```text
//! "<escaped-symbol>",<count>,<probability>,"<code>"
//! ```
//!
//! - count: base-10 unsigned integer
//! - probability: fixed-point, exactly 7 fractional digits
//! - code: exactly `CODE_WIDTH` '0'/'1' characters
//!
//! # Symbol Escaping
//!
//! - newline -> `\n`, carriage return -> `\r`
//! - double quote -> `\"`, backslash -> `\\`
//! - printable ASCII (0x20-0x7E) -> emitted literally
//! - everything else -> `0xXX` (two uppercase hex digits)
//!
//! # Lenient Parsing
//!
//! A line that does not match the full 4-field pattern is silently skipped.
//! This is documented behavior, not an error path: decoding proceeds with
//! whatever records parsed. Parsing preserves file order, which equals
//! encode-time rank order for books written by this library.

use std::io::{self, BufRead, Write};

use crate::codebook::{Codebook, CODE_WIDTH};

/// A `{symbol, code}` pair reconstructed from a codebook file.
///
/// Count and probability are validated during parsing but not retained;
/// only the code assignment matters for decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeAssignment {
    /// The byte value the code stands for
    pub symbol: u8,

    /// The 7-bit code value
    pub code: u8,
}

/// Render one symbol using the record escaping rules.
pub fn escape_symbol(symbol: u8) -> String {
    match symbol {
        b'\n' => "\\n".to_string(),
        b'\r' => "\\r".to_string(),
        b'"' => "\\\"".to_string(),
        b'\\' => "\\\\".to_string(),
        0x20..=0x7E => (symbol as char).to_string(),
        other => format!("0x{other:02X}"),
    }
}

/// Reverse `escape_symbol`. Returns `None` for any field that is not a
/// valid symbol representation.
pub fn unescape_symbol(field: &str) -> Option<u8> {
    match field {
        "\\n" => Some(b'\n'),
        "\\r" => Some(b'\r'),
        "\\\"" => Some(b'"'),
        "\\\\" => Some(b'\\'),
        _ => {
            if let Some(hex) = field.strip_prefix("0x") {
                if hex.len() == 2 {
                    return u8::from_str_radix(hex, 16).ok();
                }
                return None;
            }
            if field.len() == 1 {
                let byte = field.as_bytes()[0];
                if (0x20..=0x7E).contains(&byte) {
                    return Some(byte);
                }
            }
            None
        }
    }
}

/// Write every codebook entry as one record line, in rank order.
pub fn write_codebook<W: Write>(out: &mut W, book: &Codebook) -> io::Result<()> {
    for entry in book.entries() {
        writeln!(
            out,
            "\"{}\",{},{:.7},\"{}\"",
            escape_symbol(entry.symbol),
            entry.count,
            entry.probability,
            entry.code_bits(),
        )?;
    }
    Ok(())
}

/// Read code assignments from a serialized codebook, preserving file order.
///
/// Lines that do not match the record pattern are skipped.
///
/// # Errors
/// Only underlying I/O failures surface; malformed content never does.
pub fn read_codebook<R: BufRead>(input: R) -> io::Result<Vec<CodeAssignment>> {
    let mut assignments = Vec::new();
    for line in input.lines() {
        let line = line?;
        if let Some(assignment) = parse_record(&line) {
            assignments.push(assignment);
        }
    }
    Ok(assignments)
}

/// Parse one record line into a code assignment.
///
/// Returns `None` unless the line is exactly: a quoted symbol field, an
/// unsigned count, a probability, and a quoted code of `CODE_WIDTH`
/// '0'/'1' characters.
pub fn parse_record(line: &str) -> Option<CodeAssignment> {
    let (symbol_field, rest) = quoted_field(line)?;
    let rest = rest.strip_prefix(',')?;

    let (count_field, rest) = rest.split_once(',')?;
    count_field.parse::<u64>().ok()?;

    let (prob_field, rest) = rest.split_once(',')?;
    prob_field.parse::<f64>().ok()?;

    let (code_field, tail) = quoted_field(rest)?;
    if !tail.trim().is_empty() {
        return None;
    }

    let symbol = unescape_symbol(symbol_field)?;
    let code = parse_code(code_field)?;
    Some(CodeAssignment { symbol, code })
}

/// Split a leading quoted field from `s`, honoring backslash escapes.
///
/// Returns the field contents (still escaped) and the remainder after the
/// closing quote.
fn quoted_field(s: &str) -> Option<(&str, &str)> {
    let body = s.strip_prefix('"')?;
    let mut escaped = false;
    for (i, ch) in body.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            '"' => return Some((&body[..i], &body[i + 1..])),
            _ => {}
        }
    }
    None
}

/// Parse a code field: exactly `CODE_WIDTH` binary digits.
fn parse_code(field: &str) -> Option<u8> {
    if field.len() != CODE_WIDTH {
        return None;
    }
    let mut value = 0u8;
    for ch in field.bytes() {
        value = match ch {
            b'0' => value << 1,
            b'1' => (value << 1) | 1,
            _ => return None,
        };
    }
    Some(value)
}
