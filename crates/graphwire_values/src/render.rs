//! Textual rendering.
//!
//! Every value renders through [`fmt::Display`]. On top of that, [`Value`]
//! offers three outputs:
//!
//! - [`Value::render_into`] writes into a caller byte buffer and returns the
//!   full length, so a first call with an empty buffer sizes the second.
//! - [`Value::render_wide`] writes characters and refuses strings that are not
//!   valid UTF-8.
//! - [`Value::write_to`] prints to an [`io::Write`] stream.
//!
//! Format: strings are double-quoted and escaped, map keys, labels and
//! relationship types are printed bare when they are identifiers and
//! back-quoted otherwise, and graph composites use pattern syntax:
//! `(:Person {name:"Ada"})`, `-[:KNOWS]-`, `(:A)-[:R]->(:B)<-[:S]-(:C)`.

use std::fmt::{self, Write as _};
use std::io;

use crate::collections::{List, Map, Str};
use crate::error::{Error, Result};
use crate::graph::{Node, Path, Relationship};
use crate::structure::Struct;
use crate::value::Value;

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write_float(f, *x),
            Self::String(s) => write!(f, "{s}"),
            Self::List(l) => write!(f, "{l}"),
            Self::Map(m) => write!(f, "{m}"),
            Self::Node(n) => write!(f, "{n}"),
            Self::Relationship(r) => write!(f, "{r}"),
            Self::Path(p) => write!(f, "{p}"),
            Self::Identity(id) => write!(f, "{id}"),
            Self::Struct(s) => write!(f, "{s}"),
        }
    }
}

impl fmt::Display for Str<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('"')?;
        for chunk in self.as_bytes().utf8_chunks() {
            for c in chunk.valid().chars() {
                write_escaped(f, c)?;
            }
            if !chunk.invalid().is_empty() {
                f.write_char(char::REPLACEMENT_CHARACTER)?;
            }
        }
        f.write_char('"')
    }
}

// Plain decimal, never exponent form, with at least one fractional digit.
fn write_float(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    if !x.is_finite() {
        return write!(f, "{x}");
    }
    let text = x.to_string();
    f.write_str(&text)?;
    if text.contains('.') {
        Ok(())
    } else {
        f.write_str(".0")
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, c: char) -> fmt::Result {
    match c {
        '"' => f.write_str("\\\""),
        '\\' => f.write_str("\\\\"),
        '\n' => f.write_str("\\n"),
        '\r' => f.write_str("\\r"),
        '\t' => f.write_str("\\t"),
        c if c.is_control() => write!(f, "\\u{{{:02x}}}", u32::from(c)),
        c => f.write_char(c),
    }
}

fn is_identifier(bytes: &[u8]) -> bool {
    match bytes.split_first() {
        Some((first, rest)) => {
            (first.is_ascii_alphabetic() || *first == b'_')
                && rest.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'_')
        }
        None => false,
    }
}

/// Writes a map key, label or relationship type.
fn write_name(f: &mut fmt::Formatter<'_>, name: Str<'_>) -> fmt::Result {
    if is_identifier(name.as_bytes()) {
        // Identifiers are ASCII.
        return f.write_str(&name.to_string_lossy());
    }
    f.write_char('`')?;
    for c in name.to_string_lossy().chars() {
        if c == '`' {
            f.write_str("``")?;
        } else {
            f.write_char(c)?;
        }
    }
    f.write_char('`')
}

/// Writes a map key, which is always a string once the map is built.
fn write_key(f: &mut fmt::Formatter<'_>, key: Value<'_>) -> fmt::Result {
    match key.as_str() {
        Some(name) => write_name(f, name),
        None => write!(f, "{key}"),
    }
}

impl fmt::Display for List<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('[')?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_char(',')?;
            }
            write!(f, "{item}")?;
        }
        f.write_char(']')
    }
}

impl fmt::Display for Map<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('{')?;
        for (i, entry) in self.iter().enumerate() {
            if i > 0 {
                f.write_char(',')?;
            }
            write_key(f, entry.key)?;
            write!(f, ":{}", entry.value)?;
        }
        f.write_char('}')
    }
}

/// Writes `:A:B {props}` with the separating space only when both parts exist.
fn write_pattern_body<'a>(
    f: &mut fmt::Formatter<'_>,
    names: impl Iterator<Item = Str<'a>>,
    properties: Map<'_>,
) -> fmt::Result {
    let mut any = false;
    for name in names {
        f.write_char(':')?;
        write_name(f, name)?;
        any = true;
    }
    if !properties.is_empty() {
        if any {
            f.write_char(' ')?;
        }
        write!(f, "{properties}")?;
    }
    Ok(())
}

impl fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('(')?;
        let labels = self.labels().iter().filter_map(|label| label.as_str());
        write_pattern_body(f, labels, self.properties())?;
        f.write_char(')')
    }
}

fn write_relationship_detail(f: &mut fmt::Formatter<'_>, rel: &Relationship<'_>) -> fmt::Result {
    f.write_char('[')?;
    write_pattern_body(f, std::iter::once(rel.rel_type()), rel.properties())?;
    f.write_char(']')
}

impl fmt::Display for Relationship<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('-')?;
        write_relationship_detail(f, self)?;
        f.write_char('-')
    }
}

impl fmt::Display for Path<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(start) = self.start() {
            write!(f, "{start}")?;
        }
        for hop in self.hops() {
            if hop.forward {
                f.write_char('-')?;
                write_relationship_detail(f, &hop.relationship)?;
                f.write_str("->")?;
            } else {
                f.write_str("<-")?;
                write_relationship_detail(f, &hop.relationship)?;
                f.write_char('-')?;
            }
            write!(f, "{}", hop.node)?;
        }
        Ok(())
    }
}

impl fmt::Display for Struct<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "struct<{:#04x}>(", self.signature())?;
        for (i, field) in self.fields().iter().enumerate() {
            if i > 0 {
                f.write_char(',')?;
            }
            write!(f, "{field}")?;
        }
        f.write_char(')')
    }
}

// =============================================================================
// Output adapters
// =============================================================================

/// Fills a byte buffer, leaving room for a NUL, and counts the full length.
struct ByteBuffer<'b> {
    buf: &'b mut [u8],
    len: usize,
}

impl fmt::Write for ByteBuffer<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let room = self.buf.len().saturating_sub(1);
        if self.len < room {
            let n = (room - self.len).min(s.len());
            self.buf[self.len..self.len + n].copy_from_slice(&s.as_bytes()[..n]);
        }
        self.len += s.len();
        Ok(())
    }
}

/// Fills a character buffer and counts the full length.
struct CharBuffer<'b> {
    buf: &'b mut [char],
    len: usize,
}

impl fmt::Write for CharBuffer<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if let Some(slot) = self.buf.get_mut(self.len) {
                *slot = c;
            }
            self.len += 1;
        }
        Ok(())
    }
}

/// Forwards to an `io::Write`, keeping the first I/O error.
struct Stream<'w, W: io::Write + ?Sized> {
    out: &'w mut W,
    written: usize,
    error: Option<io::Error>,
}

impl<W: io::Write + ?Sized> fmt::Write for Stream<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        match self.out.write_all(s.as_bytes()) {
            Ok(()) => {
                self.written += s.len();
                Ok(())
            }
            Err(err) => {
                self.error = Some(err);
                Err(fmt::Error)
            }
        }
    }
}

/// Fails if any string reachable from `value` is not valid UTF-8.
fn check_encoding(value: Value<'_>) -> Result<()> {
    match value {
        Value::String(s) => s.to_str().map(|_| ()),
        Value::List(list) => list.iter().try_for_each(check_encoding),
        Value::Map(map) => map.iter().try_for_each(|entry| {
            check_encoding(entry.key)?;
            check_encoding(entry.value)
        }),
        other => match other.structure_view() {
            Some(s) => s.fields().iter().copied().try_for_each(check_encoding),
            None => Ok(()),
        },
    }
}

impl Value<'_> {
    /// Renders into `buf` and returns the length of the full rendering in
    /// bytes.
    ///
    /// At most `buf.len() - 1` bytes are written, followed by a NUL. If the
    /// return value is not less than `buf.len()`, the output was truncated
    /// and a buffer of `return + 1` bytes is needed. Truncation is by byte,
    /// so a truncated buffer may end inside a multi-byte character.
    pub fn render_into(&self, buf: &mut [u8]) -> usize {
        let mut out = ByteBuffer { buf, len: 0 };
        // ByteBuffer never fails.
        let _ = write!(out, "{self}");
        let len = out.len;
        if let Some(last) = out.buf.len().checked_sub(1) {
            out.buf[len.min(last)] = 0;
        }
        len
    }

    /// Renders into `buf` as characters and returns the length of the full
    /// rendering in characters. Characters beyond the buffer are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ErrorKind::InvalidEncoding`] if any string inside the
    /// value is not valid UTF-8. Nothing is written in that case.
    pub fn render_wide(&self, buf: &mut [char]) -> Result<usize> {
        check_encoding(*self)?;
        let mut out = CharBuffer { buf, len: 0 };
        // CharBuffer never fails.
        let _ = write!(out, "{self}");
        Ok(out.len)
    }

    /// Prints the value to `out` and returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ErrorKind::Io`] if the stream fails.
    pub fn write_to<W: io::Write + ?Sized>(&self, out: &mut W) -> Result<usize> {
        let mut stream = Stream {
            out,
            written: 0,
            error: None,
        };
        if write!(stream, "{self}").is_err() {
            let err = stream
                .error
                .unwrap_or_else(|| io::Error::other("formatting failed"));
            return Err(Error::from(err));
        }
        Ok(stream.written)
    }
}
