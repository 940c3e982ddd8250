//! The registry of value kinds.

use std::fmt;

use crate::error::{Error, ErrorKind};

/// Kind of a protocol value.
///
/// The discriminant is the stable type tag. There is no subtyping: a value
/// is an instance of exactly one kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum ValueType {
    /// The null value.
    Null = 0,
    /// Boolean.
    Bool = 1,
    /// 64-bit signed integer.
    Int = 2,
    /// Double precision float.
    Float = 3,
    /// Byte string.
    String = 4,
    /// Ordered list of values.
    List = 5,
    /// String-keyed map.
    Map = 6,
    /// Graph node.
    Node = 7,
    /// Graph relationship (bound or unbound).
    Relationship = 8,
    /// Graph path.
    Path = 9,
    /// Non-negative entity identity.
    Identity = 10,
    /// Generic signature-tagged structure.
    Struct = 11,
}

impl ValueType {
    /// Every kind, in tag order.
    pub const ALL: [ValueType; 12] = [
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
        Self::Identity,
        Self::Struct,
    ];

    /// Number of registered kinds.
    pub const COUNT: usize = Self::ALL.len();

    /// Returns the stable display name of this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Bool => "Boolean",
            Self::Int => "Integer",
            Self::Float => "Float",
            Self::String => "String",
            Self::List => "List",
            Self::Map => "Map",
            Self::Node => "Node",
            Self::Relationship => "Relationship",
            Self::Path => "Path",
            Self::Identity => "Identity",
            Self::Struct => "Struct",
        }
    }

    /// Returns the raw type tag.
    #[must_use]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Returns true for the graph composites built on the struct substrate.
    #[must_use]
    pub const fn is_structure(self) -> bool {
        matches!(
            self,
            Self::Node | Self::Relationship | Self::Path | Self::Struct
        )
    }
}

impl TryFrom<u8> for ValueType {
    type Error = Error;

    /// Decodes a raw type tag, rejecting tags outside the registry.
    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(tag))
            .copied()
            .ok_or_else(|| Error::new(ErrorKind::InvalidTypeTag(tag)))
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
