//! Borrowed string, list and map views.
//!
//! None of these types own their storage. Each is a pointer and a length into
//! caller-supplied memory, and copying one copies only the view. Lengths are
//! capped at the protocol's 32-bit length field: longer inputs are truncated
//! to `u32::MAX` elements rather than wrapping.

use std::borrow::Cow;
use std::iter::Copied;
use std::slice;

use tracing::{debug, trace};

use crate::error::{Error, ErrorContext, ErrorKind, Result};
use crate::value::Value;

/// Largest length the protocol can carry for strings, lists and maps.
#[allow(clippy::cast_lossless)]
pub(crate) const MAX_LENGTH: usize = max_length(u32::MAX as u64);

/// Largest field count the protocol can carry for a struct.
#[allow(clippy::cast_lossless)]
pub(crate) const MAX_FIELDS: usize = max_length(u16::MAX as u64);

#[allow(clippy::cast_possible_truncation)] // range checked first
const fn max_length(limit: u64) -> usize {
    if limit > usize::MAX as u64 {
        usize::MAX
    } else {
        limit as usize
    }
}

/// Truncates `items` to at most `max` elements.
pub(crate) fn saturate<'a, T>(items: &'a [T], max: usize, kind: &'static str) -> &'a [T] {
    if items.len() > max {
        debug!(kind, length = items.len(), max, "saturating length");
        &items[..max]
    } else {
        items
    }
}

/// Clamps an in-memory length to the 32-bit wire length.
pub(crate) fn wire_length(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

// =============================================================================
// Str
// =============================================================================

/// A borrowed byte string.
///
/// The bytes are expected to be UTF-8 but this is not enforced; strict
/// conversions report [`ErrorKind::InvalidEncoding`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Str<'a> {
    bytes: &'a [u8],
}

impl<'a> Str<'a> {
    /// Creates a view over a Rust string.
    #[must_use]
    pub fn new(s: &'a str) -> Self {
        Self::from_bytes(s.as_bytes())
    }

    /// Creates a view over raw bytes.
    #[must_use]
    pub fn from_bytes(bytes: &'a [u8]) -> Self {
        Self {
            bytes: saturate(bytes, MAX_LENGTH, "string"),
        }
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Returns the length in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if the string is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the string as `&str`, failing if the bytes are not UTF-8.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidEncoding`] with the offset of the first
    /// invalid byte.
    pub fn to_str(&self) -> Result<&'a str> {
        std::str::from_utf8(self.bytes).map_err(|e| Error::invalid_encoding(e.valid_up_to()))
    }

    /// Returns the string, replacing invalid sequences with U+FFFD.
    #[must_use]
    pub fn to_string_lossy(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.bytes)
    }

    /// Copies as much of the string as fits into `buf`, followed by a NUL byte.
    ///
    /// Returns the number of string bytes copied (excluding the NUL). An empty
    /// buffer receives nothing.
    pub fn copy_to(&self, buf: &mut [u8]) -> usize {
        let Some(room) = buf.len().checked_sub(1) else {
            return 0;
        };
        let n = self.bytes.len().min(room);
        buf[..n].copy_from_slice(&self.bytes[..n]);
        buf[n] = 0;
        n
    }

    /// Decodes the string into `buf` as characters.
    ///
    /// Writes as many characters as fit and returns the total number of
    /// characters in the string, so a call with an empty buffer sizes the
    /// output.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidEncoding`] if the bytes are not UTF-8.
    pub fn decode_into(&self, buf: &mut [char]) -> Result<usize> {
        let s = self.to_str()?;
        let mut count = 0;
        for c in s.chars() {
            if let Some(slot) = buf.get_mut(count) {
                *slot = c;
            }
            count += 1;
        }
        Ok(count)
    }
}

impl<'a> From<&'a str> for Str<'a> {
    fn from(s: &'a str) -> Self {
        Self::new(s)
    }
}

// =============================================================================
// List
// =============================================================================

/// A borrowed, ordered sequence of values.
#[derive(Copy, Clone, Debug, Default)]
pub struct List<'a> {
    items: &'a [Value<'a>],
}

impl<'a> List<'a> {
    /// The empty list.
    pub const EMPTY: List<'static> = List { items: &[] };

    /// Creates a view over `items`.
    #[must_use]
    pub fn new(items: &'a [Value<'a>]) -> Self {
        Self {
            items: saturate(items, MAX_LENGTH, "list"),
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the list is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Gets an element by index, or `None` past the end.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Value<'a>> {
        self.items.get(index).copied()
    }

    /// Returns the backing slice.
    #[must_use]
    pub const fn as_slice(&self) -> &'a [Value<'a>] {
        self.items
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> Copied<slice::Iter<'a, Value<'a>>> {
        self.items.iter().copied()
    }
}

impl<'a> IntoIterator for List<'a> {
    type Item = Value<'a>;
    type IntoIter = Copied<slice::Iter<'a, Value<'a>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Map
// =============================================================================

/// A single key/value pair of a [`Map`].
#[derive(Copy, Clone, Debug, Default)]
pub struct MapEntry<'a> {
    /// The key. Must be a string for the entry to be accepted by [`Map::new`].
    pub key: Value<'a>,
    /// The value.
    pub value: Value<'a>,
}

impl<'a> MapEntry<'a> {
    /// Creates an entry.
    #[must_use]
    pub const fn new(key: Value<'a>, value: Value<'a>) -> Self {
        Self { key, value }
    }
}

/// A borrowed sequence of string-keyed entries.
///
/// Duplicate keys are accepted; lookups return the first match.
#[derive(Copy, Clone, Debug, Default)]
pub struct Map<'a> {
    entries: &'a [MapEntry<'a>],
}

impl<'a> Map<'a> {
    /// The empty map.
    pub const EMPTY: Map<'static> = Map { entries: &[] };

    /// Creates a view over `entries`, checking that every key is a string.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidMapKeyType`] for the first non-string key.
    pub fn new(entries: &'a [MapEntry<'a>]) -> Result<Self> {
        let entries = saturate(entries, MAX_LENGTH, "map");
        if let Some((index, entry)) = entries
            .iter()
            .enumerate()
            .find(|(_, entry)| !matches!(entry.key, Value::String(_)))
        {
            trace!(index, actual = %entry.key.value_type(), "rejected map key");
            return Err(Error::new(ErrorKind::InvalidMapKeyType {
                actual: entry.key.value_type(),
            })
            .with_context(
                ErrorContext::new()
                    .with_target("map")
                    .with_field("key")
                    .with_index(index),
            ));
        }
        Ok(Self { entries })
    }

    /// Returns the number of entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Gets an entry by position.
    #[must_use]
    pub fn entry(&self, index: usize) -> Option<&'a MapEntry<'a>> {
        self.entries.get(index)
    }

    /// Looks up the value of the first entry whose key equals `key`.
    #[must_use]
    pub fn get(&self, key: &Value<'_>) -> Option<Value<'a>> {
        self.entries
            .iter()
            .find(|entry| entry.key == *key)
            .map(|entry| entry.value)
    }

    /// Looks up the value of the first entry whose key is the string `name`.
    #[must_use]
    pub fn get_str(&self, name: &str) -> Option<Value<'a>> {
        self.entries
            .iter()
            .find(|entry| matches!(entry.key, Value::String(k) if k.as_bytes() == name.as_bytes()))
            .map(|entry| entry.value)
    }

    /// Returns the backing slice.
    #[must_use]
    pub const fn as_slice(&self) -> &'a [MapEntry<'a>] {
        self.entries
    }

    /// Returns an iterator over the entries.
    pub fn iter(&self) -> slice::Iter<'a, MapEntry<'a>> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for Map<'a> {
    type Item = &'a MapEntry<'a>;
    type IntoIter = slice::Iter<'a, MapEntry<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
