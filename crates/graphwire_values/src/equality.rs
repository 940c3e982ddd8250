//! Structural equality.
//!
//! Values of different kinds are never equal. Within a kind, comparison is
//! selected by the value's [`Behavior`]:
//!
//! - scalars compare by value; floats follow IEEE `==`, so `NaN != NaN`
//! - strings compare byte-for-byte
//! - lists compare element-wise in order
//! - maps compare without regard to entry order: for every entry of either
//!   map, the first entry of the other map with an equal key must hold an
//!   equal value, so a shadowed duplicate must agree with the visible one
//! - struct-encoded kinds compare signature, field count, then fields in order
//!
//! Maps are compared in O(n·m) without hashing. Values are acyclic by
//! construction so recursion always terminates.

use crate::collections::{List, Map, MapEntry, Str};
use crate::dispatch::Behavior;
use crate::graph::{Node, Path, Relationship};
use crate::structure::Struct;
use crate::value::Value;

impl PartialEq for Value<'_> {
    fn eq(&self, other: &Self) -> bool {
        if self.value_type() != other.value_type() {
            return false;
        }
        match self.behavior() {
            Behavior::Null => true,
            Behavior::Bool => self.as_bool() == other.as_bool(),
            Behavior::Int => self.integer_payload() == other.integer_payload(),
            Behavior::Float => float_eq(self.as_float(), other.as_float()),
            Behavior::String => self.as_str() == other.as_str(),
            Behavior::List => match (self.as_list(), other.as_list()) {
                (Some(a), Some(b)) => list_eq(a, b),
                _ => false,
            },
            Behavior::Map => match (self.as_map(), other.as_map()) {
                (Some(a), Some(b)) => map_eq(a, b),
                _ => false,
            },
            Behavior::Node | Behavior::Relationship | Behavior::Path | Behavior::Struct => {
                match (self.structure_view(), other.structure_view()) {
                    (Some(a), Some(b)) => struct_eq(a, b),
                    _ => false,
                }
            }
        }
    }
}

// IEEE comparison, not bitwise.
#[allow(clippy::float_cmp)]
fn float_eq(a: Option<f64>, b: Option<f64>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

fn list_eq(a: List<'_>, b: List<'_>) -> bool {
    a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x == y)
}

// Checked both ways so that duplicate keys cannot make equality one-sided.
fn map_eq(a: Map<'_>, b: Map<'_>) -> bool {
    a.len() == b.len()
        && a.iter().all(|entry| contains_entry(b, entry))
        && b.iter().all(|entry| contains_entry(a, entry))
}

// Only the first entry with an equal key counts, as in `Map::get`.
fn contains_entry(map: Map<'_>, entry: &MapEntry<'_>) -> bool {
    map.iter()
        .find(|candidate| candidate.key == entry.key)
        .is_some_and(|candidate| candidate.value == entry.value)
}

fn struct_eq(a: Struct<'_>, b: Struct<'_>) -> bool {
    a.signature() == b.signature()
        && a.len() == b.len()
        && a.fields().iter().zip(b.fields()).all(|(x, y)| x == y)
}

impl PartialEq<str> for Str<'_> {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for Str<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq for List<'_> {
    fn eq(&self, other: &Self) -> bool {
        list_eq(*self, *other)
    }
}

impl PartialEq for Map<'_> {
    fn eq(&self, other: &Self) -> bool {
        map_eq(*self, *other)
    }
}

impl PartialEq for MapEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.value == other.value
    }
}

impl PartialEq for Struct<'_> {
    fn eq(&self, other: &Self) -> bool {
        struct_eq(*self, *other)
    }
}

impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        struct_eq(self.as_struct(), other.as_struct())
    }
}

impl PartialEq for Relationship<'_> {
    fn eq(&self, other: &Self) -> bool {
        struct_eq(self.as_struct(), other.as_struct())
    }
}

impl PartialEq for Path<'_> {
    fn eq(&self, other: &Self) -> bool {
        struct_eq(self.as_struct(), other.as_struct())
    }
}
