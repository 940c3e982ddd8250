//! Serialization hook.
//!
//! The byte-level wire grammar lives outside this crate. A codec implements
//! [`Sink`] and [`Value::serialize`] walks the value, emitting one call per
//! datum. Collections announce their length before their elements. Every
//! struct-encoded kind (node, relationship, path and generic struct) is
//! announced as a signature and field count followed by its fields.

use crate::collections::wire_length;
use crate::dispatch::Behavior;
use crate::value::Value;

/// Receiver of serialized values.
///
/// Lengths are already capped to what the protocol can carry, so a sink
/// never has to truncate.
pub trait Sink {
    /// Error raised by the underlying output.
    type Error;

    /// Writes a null.
    ///
    /// # Errors
    ///
    /// Propagates output failures.
    fn write_null(&mut self) -> Result<(), Self::Error>;

    /// Writes a boolean.
    ///
    /// # Errors
    ///
    /// Propagates output failures.
    fn write_bool(&mut self, value: bool) -> Result<(), Self::Error>;

    /// Writes an integer. Identities are written as integers.
    ///
    /// # Errors
    ///
    /// Propagates output failures.
    fn write_int(&mut self, value: i64) -> Result<(), Self::Error>;

    /// Writes a float.
    ///
    /// # Errors
    ///
    /// Propagates output failures.
    fn write_float(&mut self, value: f64) -> Result<(), Self::Error>;

    /// Writes string bytes.
    ///
    /// # Errors
    ///
    /// Propagates output failures.
    fn write_string(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;

    /// Starts a list of `len` elements.
    ///
    /// # Errors
    ///
    /// Propagates output failures.
    fn begin_list(&mut self, len: u32) -> Result<(), Self::Error>;

    /// Starts a map of `len` key-value pairs. Each key is followed by its value.
    ///
    /// # Errors
    ///
    /// Propagates output failures.
    fn begin_map(&mut self, len: u32) -> Result<(), Self::Error>;

    /// Starts a structure with the given signature and `len` fields.
    ///
    /// # Errors
    ///
    /// Propagates output failures.
    fn begin_struct(&mut self, signature: u8, len: u16) -> Result<(), Self::Error>;
}

impl<S: Sink + ?Sized> Sink for &mut S {
    type Error = S::Error;

    fn write_null(&mut self) -> Result<(), Self::Error> {
        (**self).write_null()
    }

    fn write_bool(&mut self, value: bool) -> Result<(), Self::Error> {
        (**self).write_bool(value)
    }

    fn write_int(&mut self, value: i64) -> Result<(), Self::Error> {
        (**self).write_int(value)
    }

    fn write_float(&mut self, value: f64) -> Result<(), Self::Error> {
        (**self).write_float(value)
    }

    fn write_string(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        (**self).write_string(bytes)
    }

    fn begin_list(&mut self, len: u32) -> Result<(), Self::Error> {
        (**self).begin_list(len)
    }

    fn begin_map(&mut self, len: u32) -> Result<(), Self::Error> {
        (**self).begin_map(len)
    }

    fn begin_struct(&mut self, signature: u8, len: u16) -> Result<(), Self::Error> {
        (**self).begin_struct(signature, len)
    }
}

impl Value<'_> {
    /// Serializes the value into `sink`, depth first.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first sink error.
    pub fn serialize<S: Sink + ?Sized>(&self, sink: &mut S) -> Result<(), S::Error> {
        match self.behavior() {
            Behavior::Null => sink.write_null(),
            Behavior::Bool => sink.write_bool(self.as_bool().unwrap_or_default()),
            Behavior::Int => sink.write_int(self.integer_payload().unwrap_or_default()),
            Behavior::Float => sink.write_float(self.as_float().unwrap_or_default()),
            Behavior::String => {
                let s = self.as_str().unwrap_or_default();
                sink.write_string(s.as_bytes())
            }
            Behavior::List => {
                let list = self.as_list().unwrap_or_default();
                sink.begin_list(wire_length(list.len()))?;
                list.iter().try_for_each(|item| item.serialize(sink))
            }
            Behavior::Map => {
                let map = self.as_map().unwrap_or_default();
                sink.begin_map(wire_length(map.len()))?;
                map.iter().try_for_each(|entry| {
                    entry.key.serialize(sink)?;
                    entry.value.serialize(sink)
                })
            }
            Behavior::Node | Behavior::Relationship | Behavior::Path | Behavior::Struct => {
                let Some(s) = self.structure_view() else {
                    return sink.write_null();
                };
                sink.begin_struct(s.signature(), s.wire_len())?;
                s.fields().iter().try_for_each(|field| field.serialize(sink))
            }
        }
    }
}
