//! Value model for a graph-database wire protocol.
//!
//! This crate provides:
//! - [`Value`] - A copyable handle over every datum the protocol carries
//! - [`ValueType`] - The fixed registry of value kinds
//! - [`Behavior`] - The dispatch index selecting per-kind behavior
//! - Borrowed views ([`Str`], [`List`], [`Map`], [`Struct`])
//! - Graph composites ([`Node`], [`Relationship`], [`Path`])
//! - [`Sink`] - The serialization hook consumed by a wire codec
//! - [`Error`] - Construction and conversion errors
//!
//! Values never own memory. Every reference variant borrows caller-supplied
//! storage for `'a`, so a value (and every copy of it) is valid exactly as long
//! as the buffers it was built from.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod dispatch;
pub mod equality;
pub mod error;
pub mod graph;
pub mod render;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod sink;
pub mod structure;
pub mod types;
pub mod value;

pub use collections::{List, Map, MapEntry, Str};
pub use dispatch::Behavior;
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use graph::{Hop, Hops, Node, Path, Relationship};
pub use sink::Sink;
pub use structure::Struct;
pub use types::ValueType;
pub use value::{Identity, Value};
