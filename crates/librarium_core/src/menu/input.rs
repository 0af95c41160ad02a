//! Validated console input primitives.
//!
//! # Responsibility
//! - Read integers with an indefinite retry loop on malformed input.
//! - Capture raw text lines without trimming.
//!
//! # Invariants
//! - A malformed numeric entry never escapes as an error; the operator is
//!   re-prompted until a parseable integer arrives.
//! - End of input is the one exceptional exit: it surfaces as
//!   `ErrorKind::UnexpectedEof` so a dead stream cannot spin forever.

use std::io::{self, BufRead, Write};

/// Prompts for an integer, re-prompting until one parses.
///
/// `prompt` is written once, `retry_prompt` before every further attempt.
/// The entry is trimmed before parsing; the surrounding line is discarded.
pub fn read_int<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
    retry_prompt: &str,
) -> io::Result<i64> {
    write!(out, "{prompt}")?;
    out.flush()?;
    loop {
        match read_line(input)? {
            Some(line) => {
                if let Ok(value) = line.trim().parse() {
                    return Ok(value);
                }
            }
            None => {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input stream closed while waiting for a number",
                ));
            }
        }
        write!(out, "{retry_prompt}")?;
        out.flush()?;
    }
}

/// Prompts for one raw line.
///
/// Only the line terminator is stripped; leading/trailing spaces stay and an
/// empty entry is a valid value.
pub fn read_raw_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<String> {
    write!(out, "{prompt}")?;
    out.flush()?;
    match read_line(input)? {
        Some(line) => Ok(line),
        None => Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input stream closed while waiting for a line",
        )),
    }
}

/// Reads one line with the terminator stripped; `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use super::{read_int, read_raw_line};
    use std::io::Cursor;

    #[test]
    fn read_int_accepts_first_valid_entry() {
        let mut input = Cursor::new("42\n");
        let mut out = Vec::new();
        let value = read_int(&mut input, &mut out, "n: ", "again: ").unwrap();
        assert_eq!(value, 42);
        assert_eq!(String::from_utf8(out).unwrap(), "n: ");
    }

    #[test]
    fn read_int_reprompts_until_numeric() {
        let mut input = Cursor::new("abc\n\n7x\n-3\n");
        let mut out = Vec::new();
        let value = read_int(&mut input, &mut out, "n: ", "again: ").unwrap();
        assert_eq!(value, -3);
        assert_eq!(String::from_utf8(out).unwrap(), "n: again: again: again: ");
    }

    #[test]
    fn read_int_reports_eof_instead_of_spinning() {
        let mut input = Cursor::new("not a number\n");
        let mut out = Vec::new();
        let err = read_int(&mut input, &mut out, "n: ", "again: ").unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn read_raw_line_keeps_spaces_and_allows_empty() {
        let mut input = Cursor::new("  spaced out  \n\n");
        let mut out = Vec::new();
        assert_eq!(
            read_raw_line(&mut input, &mut out, "t: ").unwrap(),
            "  spaced out  "
        );
        assert_eq!(read_raw_line(&mut input, &mut out, "t: ").unwrap(), "");
    }

    #[test]
    fn read_raw_line_strips_crlf() {
        let mut input = Cursor::new("Dune\r\n");
        let mut out = Vec::new();
        assert_eq!(read_raw_line(&mut input, &mut out, "t: ").unwrap(), "Dune");
    }
}
