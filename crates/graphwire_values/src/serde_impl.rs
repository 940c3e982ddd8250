//! `serde` support, enabled by the `serde` feature.
//!
//! Values map onto the serde data model directly: identities become `i64`,
//! strings become `str` (or bytes when not UTF-8), lists become sequences,
//! maps become maps in entry order, and every struct-encoded kind becomes the
//! tuple struct `Struct(signature, fields)`.
//!
//! Only serialization is provided. Values borrow their storage, so there is
//! nothing for a deserializer to build them into.

use serde::ser::{Serialize, SerializeTupleStruct, Serializer};

use crate::collections::{List, Map, Str};
use crate::graph::{Node, Path, Relationship};
use crate::structure::Struct;
use crate::value::{Identity, Value};

impl Serialize for Value<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Int(n) => serializer.serialize_i64(*n),
            Self::Float(x) => serializer.serialize_f64(*x),
            Self::String(s) => s.serialize(serializer),
            Self::List(l) => l.serialize(serializer),
            Self::Map(m) => m.serialize(serializer),
            Self::Node(n) => n.serialize(serializer),
            Self::Relationship(r) => r.serialize(serializer),
            Self::Path(p) => p.serialize(serializer),
            Self::Identity(id) => id.serialize(serializer),
            Self::Struct(s) => s.serialize(serializer),
        }
    }
}

impl Serialize for Identity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.get())
    }
}

impl Serialize for Str<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.to_str() {
            Ok(s) => serializer.serialize_str(s),
            Err(_) => serializer.serialize_bytes(self.as_bytes()),
        }
    }
}

impl Serialize for List<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl Serialize for Map<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter().map(|entry| (entry.key, entry.value)))
    }
}

impl Serialize for Struct<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_tuple_struct("Struct", 2)?;
        state.serialize_field(&self.signature())?;
        state.serialize_field(self.fields())?;
        state.end()
    }
}

impl Serialize for Node<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_struct().serialize(serializer)
    }
}

impl Serialize for Relationship<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_struct().serialize(serializer)
    }
}

impl Serialize for Path<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_struct().serialize(serializer)
    }
}
