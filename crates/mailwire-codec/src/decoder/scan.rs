//! Token scanners for a single buffered line.
//!
//! Each scanner receives the whole line (CRLF included), the index of the
//! token's first byte and `end`, the index of the terminating CR. They return
//! the scanned value and the index just past it.

use bytes::Bytes;

use crate::{Error, Result};

/// A literal announcement (`{n}`, `{n+}`, `~{n}`, `~{n+}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Announcement {
    /// Payload length in bytes.
    pub len: u64,
    /// Announced with a `~` prefix (RFC 3516).
    pub literal8: bool,
    /// Announced with a `+` suffix (RFC 7888).
    pub non_sync: bool,
}

/// Scans an atom.
///
/// An atom ends at SP, `)` or the end of the line. A `[` opens a section in
/// which spaces and parentheses are part of the atom until the matching `]`,
/// so `BODY[HEADER.FIELDS (SUBJECT DATE)]` is one atom.
pub fn atom(line: &Bytes, start: usize, end: usize) -> Result<(Bytes, usize)> {
    let mut pos = start;
    while pos < end {
        match line[pos] {
            b' ' | b')' => break,
            b'[' => pos = section_end(line, pos, end)?,
            _ => {}
        }
        pos += 1;
    }
    Ok((line.slice(start..pos), pos))
}

/// Returns the index of the `]` closing the section opened at `open`.
fn section_end(line: &[u8], open: usize, end: usize) -> Result<usize> {
    let mut depth = 0usize;
    for (pos, &b) in line.iter().enumerate().take(end).skip(open) {
        match b {
            b'[' => depth += 1,
            b']' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(pos);
                }
            }
            _ => {}
        }
    }
    Err(Error::UnclosedSection { position: open })
}

/// Scans a quoted string starting at the opening `"`.
///
/// `\"` and `\\` are unescaped. Any other escaped byte is kept as is.
/// Strings without escapes are returned as a zero-copy slice of the line.
pub fn quoted(line: &Bytes, start: usize, end: usize) -> Result<(Bytes, usize)> {
    let unterminated = Error::UnterminatedQuotedString { position: start };
    let mut unescaped: Option<Vec<u8>> = None;
    let mut pos = start + 1;

    loop {
        if pos >= end {
            return Err(unterminated);
        }
        match line[pos] {
            b'"' => break,
            b'\\' => {
                let Some(&escaped) = line.get(pos + 1).filter(|_| pos + 1 < end) else {
                    return Err(unterminated);
                };
                unescaped
                    .get_or_insert_with(|| line[start + 1..pos].to_vec())
                    .push(escaped);
                pos += 2;
            }
            b => {
                if let Some(buf) = unescaped.as_mut() {
                    buf.push(b);
                }
                pos += 1;
            }
        }
    }

    let text = unescaped.map_or_else(|| line.slice(start + 1..pos), Bytes::from);
    Ok((text, pos + 1))
}

/// Scans a literal announcement starting at `{` (or `~` for literal8).
///
/// The announcement must be the last token on the line.
pub fn announcement(line: &[u8], start: usize, end: usize, max: u64) -> Result<Announcement> {
    let literal8 = line[start] == b'~';
    let mut pos = if literal8 { start + 2 } else { start + 1 };
    let digits_start = pos;
    let mut len: u64 = 0;

    while pos < end && line[pos].is_ascii_digit() {
        len = len
            .checked_mul(10)
            .and_then(|n| n.checked_add(u64::from(line[pos] - b'0')))
            .ok_or(Error::LiteralTooLarge {
                size: u64::MAX,
                max,
            })?;
        pos += 1;
    }
    if pos == digits_start {
        return Err(Error::MalformedLiteralCount { position: pos });
    }

    let non_sync = pos < end && line[pos] == b'+';
    if non_sync {
        pos += 1;
    }
    if pos >= end || line[pos] != b'}' {
        return Err(Error::MalformedLiteralCount { position: pos });
    }
    pos += 1;
    if pos != end {
        return Err(Error::MalformedLiteralCount { position: pos });
    }
    if len > max {
        return Err(Error::LiteralTooLarge { size: len, max });
    }

    Ok(Announcement {
        len,
        literal8,
        non_sync,
    })
}
