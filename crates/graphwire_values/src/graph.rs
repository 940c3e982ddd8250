//! Graph composites: nodes, relationships and paths.
//!
//! Each composite is a view over a fixed-size field array with a reserved
//! structure signature. Constructors check the field layout once; accessors
//! then project fields at fixed offsets without re-validating.
//!
//! # Path encoding
//!
//! A path holds three lists: the distinct nodes, the distinct relationships,
//! and a flattened sequence of integer pairs. For hop `i`:
//!
//! - `sequence[2i]` is a non-zero relationship reference. Its magnitude is a
//!   1-based index into the relationship list and its sign gives the
//!   traversal direction (positive is forward).
//! - `sequence[2i + 1]` is a 0-based index into the node list naming the node
//!   reached by that hop.
//!
//! The walk always starts at `nodes[0]`. Nodes and relationships may be
//! revisited.

use std::iter::FusedIterator;

use tracing::trace;

use crate::collections::{List, Map, Str};
use crate::error::{Error, ErrorContext, ErrorKind, Result};
use crate::structure::{Struct, signature};
use crate::types::ValueType;
use crate::value::{Identity, Value};

/// Checks that a field has the expected kind.
fn expect_field(
    value: &Value<'_>,
    expected: ValueType,
    target: &'static str,
    field: &'static str,
) -> Result<()> {
    if value.value_type() == expected {
        return Ok(());
    }
    trace!(composite = target, field, actual = %value.value_type(), %expected, "rejected field");
    Err(Error::type_mismatch(expected, value.value_type())
        .with_context(ErrorContext::new().with_target(target).with_field(field)))
}

// Fixed-offset projections. Constructors guarantee the kinds, so a mismatch
// here means a broken invariant.

fn identity_field(value: Value<'_>) -> Identity {
    debug_assert_eq!(value.value_type(), ValueType::Identity);
    value.as_identity().unwrap_or_default()
}

fn list_field(value: Value<'_>) -> List<'_> {
    debug_assert_eq!(value.value_type(), ValueType::List);
    value.as_list().unwrap_or_default()
}

fn map_field(value: Value<'_>) -> Map<'_> {
    debug_assert_eq!(value.value_type(), ValueType::Map);
    value.as_map().unwrap_or_default()
}

fn str_field(value: Value<'_>) -> Str<'_> {
    debug_assert_eq!(value.value_type(), ValueType::String);
    value.as_str().unwrap_or_default()
}

// =============================================================================
// Node
// =============================================================================

/// A graph node: `[identity, labels, properties]`.
#[derive(Copy, Clone, Debug)]
pub struct Node<'a> {
    fields: &'a [Value<'a>; 3],
}

impl<'a> Node<'a> {
    /// Creates a node, checking field kinds and that every label is a string.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::TypeMismatch`] for a field of the wrong kind and
    /// [`ErrorKind::InvalidLabelType`] for a non-string label.
    pub fn new(fields: &'a [Value<'a>; 3]) -> Result<Self> {
        expect_field(&fields[0], ValueType::Identity, "node", "identity")?;
        expect_field(&fields[1], ValueType::List, "node", "labels")?;
        expect_field(&fields[2], ValueType::Map, "node", "properties")?;

        if let Some((index, label)) = list_field(fields[1])
            .iter()
            .enumerate()
            .find(|(_, label)| !matches!(label, Value::String(_)))
        {
            trace!(index, actual = %label.value_type(), "rejected node label");
            return Err(Error::new(ErrorKind::InvalidLabelType {
                actual: label.value_type(),
            })
            .with_context(
                ErrorContext::new()
                    .with_target("node")
                    .with_field("labels")
                    .with_index(index),
            ));
        }

        Ok(Self { fields })
    }

    /// Returns the node identity.
    #[must_use]
    pub fn identity(&self) -> Identity {
        identity_field(self.fields[0])
    }

    /// Returns the label list. Every element is a string.
    #[must_use]
    pub fn labels(&self) -> List<'a> {
        list_field(self.fields[1])
    }

    /// Returns the property map.
    #[must_use]
    pub fn properties(&self) -> Map<'a> {
        map_field(self.fields[2])
    }

    /// Returns true if the node carries the given label.
    #[must_use]
    pub fn has_label(&self, label: &str) -> bool {
        self.labels()
            .iter()
            .any(|l| matches!(l, Value::String(s) if s.as_bytes() == label.as_bytes()))
    }

    /// Returns the raw fields.
    #[must_use]
    pub const fn fields(&self) -> &'a [Value<'a>] {
        self.fields
    }

    /// Returns the node as a generic structure.
    #[must_use]
    pub const fn as_struct(&self) -> Struct<'a> {
        Struct::from_fixed(signature::NODE, self.fields)
    }
}

// =============================================================================
// Relationship
// =============================================================================

/// A graph relationship.
///
/// The bound form, `[identity, start, end, type, properties]`, carries its
/// endpoint identities. The unbound form, `[identity, type, properties]`,
/// appears inside paths, where endpoints follow from the traversal. Both share
/// the relationship signature and kind.
#[derive(Copy, Clone, Debug)]
pub struct Relationship<'a> {
    repr: Repr<'a>,
}

#[derive(Copy, Clone, Debug)]
enum Repr<'a> {
    Bound(&'a [Value<'a>; 5]),
    Unbound(&'a [Value<'a>; 3]),
}

impl<'a> Relationship<'a> {
    /// Creates a bound relationship.
    ///
    /// Each endpoint may be an identity or null.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::TypeMismatch`] for a field of the wrong kind.
    pub fn new(fields: &'a [Value<'a>; 5]) -> Result<Self> {
        expect_field(&fields[0], ValueType::Identity, "relationship", "identity")?;
        for (value, field) in [(&fields[1], "start"), (&fields[2], "end")] {
            if !value.is_null() {
                expect_field(value, ValueType::Identity, "relationship", field)?;
            }
        }
        expect_field(&fields[3], ValueType::String, "relationship", "type")?;
        expect_field(&fields[4], ValueType::Map, "relationship", "properties")?;
        Ok(Self {
            repr: Repr::Bound(fields),
        })
    }

    /// Creates an unbound relationship.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::TypeMismatch`] for a field of the wrong kind.
    pub fn unbound(fields: &'a [Value<'a>; 3]) -> Result<Self> {
        expect_field(&fields[0], ValueType::Identity, "relationship", "identity")?;
        expect_field(&fields[1], ValueType::String, "relationship", "type")?;
        expect_field(&fields[2], ValueType::Map, "relationship", "properties")?;
        Ok(Self {
            repr: Repr::Unbound(fields),
        })
    }

    /// Returns true for the bound form.
    #[must_use]
    pub const fn is_bound(&self) -> bool {
        matches!(self.repr, Repr::Bound(_))
    }

    /// Returns the relationship identity.
    #[must_use]
    pub fn identity(&self) -> Identity {
        identity_field(self.fields()[0])
    }

    /// Returns the start node identity. Unbound relationships have none.
    #[must_use]
    pub fn start_node_identity(&self) -> Option<Identity> {
        match self.repr {
            Repr::Bound(fields) => fields[1].as_identity(),
            Repr::Unbound(_) => None,
        }
    }

    /// Returns the end node identity. Unbound relationships have none.
    #[must_use]
    pub fn end_node_identity(&self) -> Option<Identity> {
        match self.repr {
            Repr::Bound(fields) => fields[2].as_identity(),
            Repr::Unbound(_) => None,
        }
    }

    /// Returns the relationship type.
    #[must_use]
    pub fn rel_type(&self) -> Str<'a> {
        match self.repr {
            Repr::Bound(fields) => str_field(fields[3]),
            Repr::Unbound(fields) => str_field(fields[1]),
        }
    }

    /// Returns the property map.
    #[must_use]
    pub fn properties(&self) -> Map<'a> {
        match self.repr {
            Repr::Bound(fields) => map_field(fields[4]),
            Repr::Unbound(fields) => map_field(fields[2]),
        }
    }

    /// Returns the raw fields.
    #[must_use]
    pub const fn fields(&self) -> &'a [Value<'a>] {
        match self.repr {
            Repr::Bound(fields) => fields,
            Repr::Unbound(fields) => fields,
        }
    }

    /// Returns the relationship as a generic structure.
    #[must_use]
    pub const fn as_struct(&self) -> Struct<'a> {
        Struct::from_fixed(signature::RELATIONSHIP, self.fields())
    }
}

// =============================================================================
// Path
// =============================================================================

/// A graph path: `[nodes, relationships, sequence]`.
#[derive(Copy, Clone, Debug)]
pub struct Path<'a> {
    fields: &'a [Value<'a>; 3],
}

/// One step of a path walk.
#[derive(Copy, Clone, Debug)]
pub struct Hop<'a> {
    /// The relationship traversed.
    pub relationship: Relationship<'a>,
    /// True if the relationship was traversed in its own direction.
    pub forward: bool,
    /// The node reached.
    pub node: Node<'a>,
}

fn path_error(kind: ErrorKind, field: &'static str, index: usize) -> Error {
    trace!(field, index, kind = %kind, "rejected path");
    Error::new(kind).with_context(
        ErrorContext::new()
            .with_target("path")
            .with_field(field)
            .with_index(index),
    )
}

fn bound_of(len: usize) -> u64 {
    u64::try_from(len).unwrap_or(u64::MAX)
}

impl<'a> Path<'a> {
    /// Creates a path, checking that the sequence describes a walk over the
    /// given nodes and relationships.
    ///
    /// Checks run in order and the first failure is reported: field kinds,
    /// node element kinds, relationship element kinds, sequence parity, then
    /// each sequence pair (entry kinds, relationship reference range, node
    /// index range).
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::TypeMismatch`] if a field is not a list, or one of
    /// the `InvalidPath*` kinds naming the failed check.
    pub fn new(fields: &'a [Value<'a>; 3]) -> Result<Self> {
        expect_field(&fields[0], ValueType::List, "path", "nodes")?;
        expect_field(&fields[1], ValueType::List, "path", "relationships")?;
        expect_field(&fields[2], ValueType::List, "path", "sequence")?;
        let nodes = list_field(fields[0]);
        let rels = list_field(fields[1]);
        let seq = list_field(fields[2]);

        if let Some((i, v)) = nodes.iter().enumerate().find(|(_, v)| v.as_node().is_none()) {
            return Err(path_error(
                ErrorKind::InvalidPathNodeType {
                    actual: v.value_type(),
                },
                "nodes",
                i,
            ));
        }

        if let Some((i, v)) = rels
            .iter()
            .enumerate()
            .find(|(_, v)| v.as_relationship().is_none())
        {
            return Err(path_error(
                ErrorKind::InvalidPathRelationshipType {
                    actual: v.value_type(),
                },
                "relationships",
                i,
            ));
        }

        if seq.len() % 2 != 0 {
            let kind = ErrorKind::InvalidPathSequenceLength { length: seq.len() };
            trace!(field = "sequence", kind = %kind, "rejected path");
            return Err(Error::new(kind).with_context(
                ErrorContext::new().with_target("path").with_field("sequence"),
            ));
        }

        for (hop, pair) in seq.as_slice().chunks_exact(2).enumerate() {
            let at = hop * 2;
            let (Some(rel), Some(node)) = (pair[0].as_int(), pair[1].as_int()) else {
                let (offset, bad) = if pair[0].as_int().is_none() {
                    (at, pair[0])
                } else {
                    (at + 1, pair[1])
                };
                return Err(path_error(
                    ErrorKind::InvalidPathSequenceIndexType {
                        actual: bad.value_type(),
                    },
                    "sequence",
                    offset,
                ));
            };

            if rel == 0 || rel.unsigned_abs() > bound_of(rels.len()) {
                return Err(path_error(
                    ErrorKind::InvalidPathSequenceIndexRange {
                        value: rel,
                        bound: rels.len(),
                    },
                    "sequence",
                    at,
                ));
            }

            if !usize::try_from(node).is_ok_and(|n| n < nodes.len()) {
                return Err(path_error(
                    ErrorKind::InvalidPathSequenceIndexRange {
                        value: node,
                        bound: nodes.len(),
                    },
                    "sequence",
                    at + 1,
                ));
            }
        }

        Ok(Self { fields })
    }

    /// Returns the distinct nodes of the path.
    #[must_use]
    pub fn nodes(&self) -> List<'a> {
        list_field(self.fields[0])
    }

    /// Returns the distinct relationships of the path.
    #[must_use]
    pub fn relationships(&self) -> List<'a> {
        list_field(self.fields[1])
    }

    /// Returns the encoded traversal sequence.
    #[must_use]
    pub fn sequence(&self) -> List<'a> {
        list_field(self.fields[2])
    }

    /// Returns the number of hops.
    #[must_use]
    pub fn len(&self) -> usize {
        let seq = self.sequence();
        debug_assert_eq!(seq.len() % 2, 0);
        seq.len() / 2
    }

    /// Returns true if the path has no hops.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the node reached after `hops` hops.
    ///
    /// `node_at(0)` is the start node. Returns `None` past the end of the
    /// path, or for hop 0 of a path without nodes.
    #[must_use]
    pub fn node_at(&self, hops: usize) -> Option<Node<'a>> {
        if hops > self.len() {
            return None;
        }
        let nodes = self.nodes();
        let index = match hops {
            0 => 0,
            _ => {
                let encoded = self.sequence().get((hops - 1) * 2 + 1)?.as_int();
                debug_assert!(encoded.is_some());
                usize::try_from(encoded?).ok()?
            }
        };
        let node = nodes.get(index)?.as_node();
        debug_assert!(node.is_some() || (hops == 0 && nodes.is_empty()));
        node
    }

    /// Returns the relationship traversed by hop `hops` (0-based) and whether
    /// it was traversed forward. Returns `None` past the last hop.
    #[must_use]
    pub fn relationship_at(&self, hops: usize) -> Option<(Relationship<'a>, bool)> {
        if hops >= self.len() {
            return None;
        }
        let encoded = self.sequence().get(hops * 2)?.as_int();
        debug_assert!(encoded.is_some_and(|r| r != 0));
        let encoded = encoded?;
        let index = usize::try_from(encoded.unsigned_abs().checked_sub(1)?).ok()?;
        let rel = self.relationships().get(index)?.as_relationship();
        debug_assert!(rel.is_some());
        Some((rel?, encoded > 0))
    }

    /// Returns the first node of the walk.
    #[must_use]
    pub fn start(&self) -> Option<Node<'a>> {
        self.node_at(0)
    }

    /// Returns the last node of the walk.
    #[must_use]
    pub fn end(&self) -> Option<Node<'a>> {
        self.node_at(self.len())
    }

    /// Returns an iterator over the hops of the walk.
    #[must_use]
    pub fn hops(&self) -> Hops<'a> {
        Hops {
            path: *self,
            next: 0,
        }
    }

    /// Returns the raw fields.
    #[must_use]
    pub const fn fields(&self) -> &'a [Value<'a>] {
        self.fields
    }

    /// Returns the path as a generic structure.
    #[must_use]
    pub const fn as_struct(&self) -> Struct<'a> {
        Struct::from_fixed(signature::PATH, self.fields)
    }
}

/// Iterator over the hops of a [`Path`].
#[derive(Clone, Debug)]
pub struct Hops<'a> {
    path: Path<'a>,
    next: usize,
}

impl<'a> Iterator for Hops<'a> {
    type Item = Hop<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (relationship, forward) = self.path.relationship_at(self.next)?;
        let node = self.path.node_at(self.next + 1)?;
        self.next += 1;
        Some(Hop {
            relationship,
            forward,
            node,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.path.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Hops<'_> {}

impl FusedIterator for Hops<'_> {}
