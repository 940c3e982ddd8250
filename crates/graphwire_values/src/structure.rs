//! Generic signature-tagged structures.
//!
//! A structure is a signature byte and a borrowed field vector. Nodes,
//! relationships and paths are structures with reserved signatures and a
//! fixed field layout.

use crate::collections::{MAX_FIELDS, saturate};
use crate::value::Value;

/// Reserved structure signatures.
pub mod signature {
    /// Node signature (`'N'`).
    pub const NODE: u8 = 0x4E;
    /// Relationship signature (`'R'`), used by both the bound and unbound forms.
    pub const RELATIONSHIP: u8 = 0x52;
    /// Path signature (`'P'`).
    pub const PATH: u8 = 0x50;
}

/// A signature byte plus a borrowed field vector.
///
/// The field count is capped at `u16::MAX`, the widest count the protocol
/// can carry.
#[derive(Copy, Clone, Debug)]
pub struct Struct<'a> {
    signature: u8,
    fields: &'a [Value<'a>],
}

impl<'a> Struct<'a> {
    /// Creates a structure view.
    #[must_use]
    pub fn new(signature: u8, fields: &'a [Value<'a>]) -> Self {
        Self {
            signature,
            fields: saturate(fields, MAX_FIELDS, "struct"),
        }
    }

    /// Creates a view over fields already known to fit.
    pub(crate) const fn from_fixed(signature: u8, fields: &'a [Value<'a>]) -> Self {
        Self { signature, fields }
    }

    /// Returns the signature byte.
    #[must_use]
    pub const fn signature(&self) -> u8 {
        self.signature
    }

    /// Returns the fields.
    #[must_use]
    pub const fn fields(&self) -> &'a [Value<'a>] {
        self.fields
    }

    /// Returns the number of fields.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the structure has no fields.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Gets a field by index.
    #[must_use]
    pub fn field(&self, index: usize) -> Option<Value<'a>> {
        self.fields.get(index).copied()
    }

    /// Returns the field count as carried on the wire.
    #[must_use]
    pub fn wire_len(&self) -> u16 {
        u16::try_from(self.fields.len()).unwrap_or(u16::MAX)
    }
}
