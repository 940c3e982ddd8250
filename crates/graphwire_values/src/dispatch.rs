//! Behavior dispatch.
//!
//! Every kind resolves to a [`Behavior`], the index of the bundle that renders,
//! prints, serializes and compares it. The bundle index is distinct from the
//! type tag: `Integer` and `Identity` stay distinguishable types while sharing
//! one bundle. Rendering, serialization and equality all match on the behavior
//! rather than on the value variant.

use crate::error::{Error, ErrorKind};
use crate::types::ValueType;

/// Index of a per-kind behavior bundle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Behavior {
    /// Null rendering, encoding and equality.
    Null = 0,
    /// Boolean bundle.
    Bool = 1,
    /// Integer bundle, shared by `Integer` and `Identity`.
    Int = 2,
    /// Float bundle.
    Float = 3,
    /// Byte string bundle.
    String = 4,
    /// Ordered sequence bundle.
    List = 5,
    /// Unordered keyed bundle.
    Map = 6,
    /// Node rendering over the struct encoding.
    Node = 7,
    /// Relationship rendering over the struct encoding.
    Relationship = 8,
    /// Path rendering over the struct encoding.
    Path = 9,
    /// Generic struct bundle.
    Struct = 10,
}

impl Behavior {
    const ALL: [Behavior; 11] = [
        Self::Null,
        Self::Bool,
        Self::Int,
        Self::Float,
        Self::String,
        Self::List,
        Self::Map,
        Self::Node,
        Self::Relationship,
        Self::Path,
        Self::Struct,
    ];

    /// Number of distinct bundles.
    pub const COUNT: usize = Self::ALL.len();

    /// Resolves the bundle for a kind.
    #[must_use]
    pub const fn of(ty: ValueType) -> Self {
        match ty {
            ValueType::Null => Self::Null,
            ValueType::Bool => Self::Bool,
            ValueType::Int | ValueType::Identity => Self::Int,
            ValueType::Float => Self::Float,
            ValueType::String => Self::String,
            ValueType::List => Self::List,
            ValueType::Map => Self::Map,
            ValueType::Node => Self::Node,
            ValueType::Relationship => Self::Relationship,
            ValueType::Path => Self::Path,
            ValueType::Struct => Self::Struct,
        }
    }

    /// Returns the raw dispatch index.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns true if values with this bundle encode as a signature-tagged struct.
    #[must_use]
    pub const fn encodes_as_struct(self) -> bool {
        matches!(
            self,
            Self::Node | Self::Relationship | Self::Path | Self::Struct
        )
    }
}

impl TryFrom<u8> for Behavior {
    type Error = Error;

    /// Decodes a raw dispatch index, rejecting indices outside the table.
    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(index))
            .copied()
            .ok_or_else(|| Error::new(ErrorKind::InvalidDispatchIndex(index)))
    }
}
