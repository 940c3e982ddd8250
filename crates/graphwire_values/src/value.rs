//! The value handle.

use std::fmt;

use crate::collections::{List, Map, MapEntry, Str};
use crate::dispatch::Behavior;
use crate::error::{Error, Result};
use crate::graph::{Node, Path, Relationship};
use crate::structure::Struct;
use crate::types::ValueType;

/// A protocol value.
///
/// Values are fixed-size and `Copy`. Scalars are stored inline; every other
/// variant is a view borrowing caller-owned storage for `'a`, so copying a
/// value never copies the data it refers to.
///
/// Composite variants can only be built through their checked constructors
/// ([`Value::map`], [`Value::node`], [`Value::path`], ...), which is what
/// guarantees the structural invariants every accessor relies on.
#[derive(Copy, Clone, Debug, Default)]
pub enum Value<'a> {
    /// The null value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// Double precision float.
    Float(f64),
    /// Byte string.
    String(Str<'a>),
    /// Ordered list.
    List(List<'a>),
    /// String-keyed map.
    Map(Map<'a>),
    /// Graph node.
    Node(Node<'a>),
    /// Graph relationship.
    Relationship(Relationship<'a>),
    /// Graph path.
    Path(Path<'a>),
    /// Entity identity.
    Identity(Identity),
    /// Generic structure.
    Struct(Struct<'a>),
}

/// A non-negative 64-bit entity identity.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identity(i64);

impl Identity {
    /// Creates an identity, or `None` if `value` is negative.
    #[must_use]
    pub const fn new(value: i64) -> Option<Self> {
        if value < 0 { None } else { Some(Self(value)) }
    }

    /// Creates an identity from an unsigned value, or `None` if it exceeds
    /// `i64::MAX`.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)] // range checked first
    pub const fn from_u64(value: u64) -> Option<Self> {
        if value > i64::MAX as u64 {
            None
        } else {
            Some(Self(value as i64))
        }
    }

    /// Returns the identity as a signed integer.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Returns the identity as an unsigned integer.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0.unsigned_abs()
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Clamps a wide integer into the 64-bit range.
#[must_use]
pub fn saturate_i64(value: i128) -> i64 {
    i64::try_from(value).unwrap_or(if value < 0 { i64::MIN } else { i64::MAX })
}

impl<'a> Value<'a> {
    // -------------------------------------------------------------------------
    // Constructors
    // -------------------------------------------------------------------------

    /// Creates a boolean.
    #[must_use]
    pub const fn bool(value: bool) -> Self {
        Self::Bool(value)
    }

    /// Creates an integer.
    #[must_use]
    pub const fn int(value: i64) -> Self {
        Self::Int(value)
    }

    /// Creates an integer from a wider value, clamping to the 64-bit range.
    #[must_use]
    pub fn int_saturating(value: i128) -> Self {
        Self::Int(saturate_i64(value))
    }

    /// Creates a float.
    #[must_use]
    pub const fn float(value: f64) -> Self {
        Self::Float(value)
    }

    /// Creates an identity. Negative input yields [`Value::Null`].
    #[must_use]
    pub const fn identity(value: i64) -> Self {
        match Identity::new(value) {
            Some(id) => Self::Identity(id),
            None => Self::Null,
        }
    }

    /// Creates an identity from an unsigned value. Values above `i64::MAX`
    /// yield [`Value::Null`].
    #[must_use]
    pub const fn identity_u64(value: u64) -> Self {
        match Identity::from_u64(value) {
            Some(id) => Self::Identity(id),
            None => Self::Null,
        }
    }

    /// Creates a string view.
    #[must_use]
    pub fn string(value: &'a str) -> Self {
        Self::String(Str::new(value))
    }

    /// Creates a string view over raw bytes.
    #[must_use]
    pub fn ustring(bytes: &'a [u8]) -> Self {
        Self::String(Str::from_bytes(bytes))
    }

    /// Creates a list view.
    #[must_use]
    pub fn list(items: &'a [Value<'a>]) -> Self {
        Self::List(List::new(items))
    }

    /// Creates a map view.
    ///
    /// # Errors
    ///
    /// Fails if any key is not a string.
    pub fn map(entries: &'a [MapEntry<'a>]) -> Result<Self> {
        Map::new(entries).map(Self::Map)
    }

    /// Creates a node from `[identity, labels, properties]`.
    ///
    /// # Errors
    ///
    /// Fails if a field has the wrong kind or a label is not a string.
    pub fn node(fields: &'a [Value<'a>; 3]) -> Result<Self> {
        Node::new(fields).map(Self::Node)
    }

    /// Creates a bound relationship from
    /// `[identity, start, end, type, properties]`.
    ///
    /// # Errors
    ///
    /// Fails if a field has the wrong kind.
    pub fn relationship(fields: &'a [Value<'a>; 5]) -> Result<Self> {
        Relationship::new(fields).map(Self::Relationship)
    }

    /// Creates an unbound relationship from `[identity, type, properties]`.
    ///
    /// # Errors
    ///
    /// Fails if a field has the wrong kind.
    pub fn unbound_relationship(fields: &'a [Value<'a>; 3]) -> Result<Self> {
        Relationship::unbound(fields).map(Self::Relationship)
    }

    /// Creates a path from `[nodes, relationships, sequence]`.
    ///
    /// # Errors
    ///
    /// Fails if a field has the wrong kind or the sequence does not describe
    /// a walk over the given nodes and relationships.
    pub fn path(fields: &'a [Value<'a>; 3]) -> Result<Self> {
        Path::new(fields).map(Self::Path)
    }

    /// Creates a generic structure.
    #[must_use]
    pub fn structure(signature: u8, fields: &'a [Value<'a>]) -> Self {
        Self::Struct(Struct::new(signature, fields))
    }

    // -------------------------------------------------------------------------
    // Type registry
    // -------------------------------------------------------------------------

    /// Returns the kind of this value.
    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        match self {
            Self::Null => ValueType::Null,
            Self::Bool(_) => ValueType::Bool,
            Self::Int(_) => ValueType::Int,
            Self::Float(_) => ValueType::Float,
            Self::String(_) => ValueType::String,
            Self::List(_) => ValueType::List,
            Self::Map(_) => ValueType::Map,
            Self::Node(_) => ValueType::Node,
            Self::Relationship(_) => ValueType::Relationship,
            Self::Path(_) => ValueType::Path,
            Self::Identity(_) => ValueType::Identity,
            Self::Struct(_) => ValueType::Struct,
        }
    }

    /// Returns the behavior bundle used for this value.
    #[must_use]
    pub const fn behavior(&self) -> Behavior {
        Behavior::of(self.value_type())
    }

    /// Returns the display name of this value's kind.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.value_type().name()
    }

    /// Returns true if this value is of exactly the given kind.
    #[must_use]
    pub fn instance_of(&self, ty: ValueType) -> bool {
        self.value_type() == ty
    }

    /// Returns true if this value is null.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    // -------------------------------------------------------------------------
    // Projections
    // -------------------------------------------------------------------------

    /// Attempts to extract a boolean.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to extract an integer. Identities are not integers.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a float.
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract an identity.
    #[must_use]
    pub const fn as_identity(&self) -> Option<Identity> {
        match self {
            Self::Identity(id) => Some(*id),
            _ => None,
        }
    }

    /// Attempts to extract a string view.
    #[must_use]
    pub const fn as_str(&self) -> Option<Str<'a>> {
        match self {
            Self::String(s) => Some(*s),
            _ => None,
        }
    }

    /// Attempts to extract a list view.
    #[must_use]
    pub const fn as_list(&self) -> Option<List<'a>> {
        match self {
            Self::List(l) => Some(*l),
            _ => None,
        }
    }

    /// Attempts to extract a map view.
    #[must_use]
    pub const fn as_map(&self) -> Option<Map<'a>> {
        match self {
            Self::Map(m) => Some(*m),
            _ => None,
        }
    }

    /// Attempts to extract a node.
    #[must_use]
    pub const fn as_node(&self) -> Option<Node<'a>> {
        match self {
            Self::Node(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a relationship.
    #[must_use]
    pub const fn as_relationship(&self) -> Option<Relationship<'a>> {
        match self {
            Self::Relationship(r) => Some(*r),
            _ => None,
        }
    }

    /// Attempts to extract a path.
    #[must_use]
    pub const fn as_path(&self) -> Option<Path<'a>> {
        match self {
            Self::Path(p) => Some(*p),
            _ => None,
        }
    }

    /// Attempts to extract a generic structure. Graph composites are not
    /// returned here; see [`Value::structure_view`].
    #[must_use]
    pub const fn as_struct(&self) -> Option<Struct<'a>> {
        match self {
            Self::Struct(s) => Some(*s),
            _ => None,
        }
    }

    /// Returns the signature and fields of any struct-encoded value,
    /// including nodes, relationships and paths.
    #[must_use]
    pub fn structure_view(&self) -> Option<Struct<'a>> {
        match self {
            Self::Node(n) => Some(n.as_struct()),
            Self::Relationship(r) => Some(r.as_struct()),
            Self::Path(p) => Some(p.as_struct()),
            Self::Struct(s) => Some(*s),
            _ => None,
        }
    }

    /// Returns the integer payload shared by the `Integer` and `Identity`
    /// kinds.
    #[must_use]
    pub(crate) const fn integer_payload(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Identity(id) => Some(id.get()),
            _ => None,
        }
    }
}

// Checked projections

macro_rules! impl_try_from_value {
    ($target:ty, $variant:ident, $kind:expr) => {
        impl<'a> TryFrom<Value<'a>> for $target {
            type Error = Error;

            fn try_from(value: Value<'a>) -> Result<Self> {
                match value {
                    Value::$variant(inner) => Ok(inner),
                    other => Err(Error::type_mismatch($kind, other.value_type())),
                }
            }
        }
    };
}

impl_try_from_value!(bool, Bool, ValueType::Bool);
impl_try_from_value!(i64, Int, ValueType::Int);
impl_try_from_value!(f64, Float, ValueType::Float);
impl_try_from_value!(Identity, Identity, ValueType::Identity);
impl_try_from_value!(Str<'a>, String, ValueType::String);
impl_try_from_value!(List<'a>, List, ValueType::List);
impl_try_from_value!(Map<'a>, Map, ValueType::Map);
impl_try_from_value!(Node<'a>, Node, ValueType::Node);
impl_try_from_value!(Relationship<'a>, Relationship, ValueType::Relationship);
impl_try_from_value!(Path<'a>, Path, ValueType::Path);
impl_try_from_value!(Struct<'a>, Struct, ValueType::Struct);

// Convenience From implementations

impl From<bool> for Value<'_> {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value<'_> {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Value<'_> {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<u32> for Value<'_> {
    fn from(n: u32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<i128> for Value<'_> {
    fn from(n: i128) -> Self {
        Self::int_saturating(n)
    }
}

impl From<u64> for Value<'_> {
    fn from(n: u64) -> Self {
        Self::int_saturating(i128::from(n))
    }
}

impl From<usize> for Value<'_> {
    fn from(n: usize) -> Self {
        Self::Int(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

impl From<f64> for Value<'_> {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<f32> for Value<'_> {
    fn from(n: f32) -> Self {
        Self::Float(f64::from(n))
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Self::string(s)
    }
}

impl From<Identity> for Value<'_> {
    fn from(id: Identity) -> Self {
        Self::Identity(id)
    }
}

impl<'a> From<Str<'a>> for Value<'a> {
    fn from(s: Str<'a>) -> Self {
        Self::String(s)
    }
}

impl<'a> From<List<'a>> for Value<'a> {
    fn from(l: List<'a>) -> Self {
        Self::List(l)
    }
}

impl<'a> From<Map<'a>> for Value<'a> {
    fn from(m: Map<'a>) -> Self {
        Self::Map(m)
    }
}

impl<'a> From<Node<'a>> for Value<'a> {
    fn from(n: Node<'a>) -> Self {
        Self::Node(n)
    }
}

impl<'a> From<Relationship<'a>> for Value<'a> {
    fn from(r: Relationship<'a>) -> Self {
        Self::Relationship(r)
    }
}

impl<'a> From<Path<'a>> for Value<'a> {
    fn from(p: Path<'a>) -> Self {
        Self::Path(p)
    }
}

impl<'a> From<Struct<'a>> for Value<'a> {
    fn from(s: Struct<'a>) -> Self {
        Self::Struct(s)
    }
}
