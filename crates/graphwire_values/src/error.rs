//! Error types for value construction and conversion.
//!
//! Uses `thiserror` for ergonomic error definition. Every structural invariant
//! has its own [`ErrorKind`] so callers can tell exactly which check failed.

use std::fmt;
use std::io;

use thiserror::Error;

use crate::types::ValueType;

/// Result alias for value-layer operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for value-layer operations.
#[derive(Debug, Error)]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context naming the rejected composite and element.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a type mismatch error.
    #[must_use]
    pub fn type_mismatch(expected: ValueType, actual: ValueType) -> Self {
        Self::new(ErrorKind::TypeMismatch { expected, actual })
    }

    /// Creates an invalid encoding error at the given byte offset.
    #[must_use]
    pub fn invalid_encoding(offset: usize) -> Self {
        Self::new(ErrorKind::InvalidEncoding { offset })
    }

    /// Returns true if this error reports a structural invariant violation
    /// raised by a constructor.
    #[must_use]
    pub const fn is_structural(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::InvalidMapKeyType { .. }
                | ErrorKind::InvalidLabelType { .. }
                | ErrorKind::InvalidPathNodeType { .. }
                | ErrorKind::InvalidPathRelationshipType { .. }
                | ErrorKind::InvalidPathSequenceLength { .. }
                | ErrorKind::InvalidPathSequenceIndexType { .. }
                | ErrorKind::InvalidPathSequenceIndexRange { .. }
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(context) = &self.context {
            write!(f, " ({context})")?;
        }
        Ok(())
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A field or argument had the wrong kind.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The expected kind.
        expected: ValueType,
        /// The kind encountered.
        actual: ValueType,
    },

    /// A map key was not a string.
    #[error("invalid map key type: expected String, got {actual}")]
    InvalidMapKeyType {
        /// Kind of the offending key.
        actual: ValueType,
    },

    /// A node label was not a string.
    #[error("invalid label type: expected String, got {actual}")]
    InvalidLabelType {
        /// Kind of the offending label.
        actual: ValueType,
    },

    /// A path node list element was not a node.
    #[error("invalid path node type: expected Node, got {actual}")]
    InvalidPathNodeType {
        /// Kind of the offending element.
        actual: ValueType,
    },

    /// A path relationship list element was not a relationship.
    #[error("invalid path relationship type: expected Relationship, got {actual}")]
    InvalidPathRelationshipType {
        /// Kind of the offending element.
        actual: ValueType,
    },

    /// A path sequence had an odd number of entries.
    #[error("invalid path sequence length: {length} is not even")]
    InvalidPathSequenceLength {
        /// Length of the sequence.
        length: usize,
    },

    /// A path sequence entry was not an integer.
    #[error("invalid path sequence index type: expected Integer, got {actual}")]
    InvalidPathSequenceIndexType {
        /// Kind of the offending entry.
        actual: ValueType,
    },

    /// A path sequence entry pointed outside its list.
    #[error("invalid path sequence index: {value} out of range for {bound} entries")]
    InvalidPathSequenceIndexRange {
        /// The offending index as encoded.
        value: i64,
        /// Number of entries in the referenced list.
        bound: usize,
    },

    /// A raw type tag outside the registry.
    #[error("invalid type tag: {0}")]
    InvalidTypeTag(u8),

    /// A raw dispatch index outside the behavior table.
    #[error("invalid dispatch index: {0}")]
    InvalidDispatchIndex(u8),

    /// String bytes could not be decoded to characters.
    #[error("invalid string encoding at byte {offset}")]
    InvalidEncoding {
        /// Offset of the first undecodable byte.
        offset: usize,
    },

    /// Writing to an output stream failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::new(ErrorKind::Io(err))
    }
}

/// Where inside a composite an error was detected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// The composite being built (`"map"`, `"node"`, `"path"`, ...).
    pub target: Option<&'static str>,
    /// The field of the composite.
    pub field: Option<&'static str>,
    /// Element index within the field.
    pub index: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the composite being built.
    #[must_use]
    pub fn with_target(mut self, target: &'static str) -> Self {
        self.target = Some(target);
        self
    }

    /// Sets the field name.
    #[must_use]
    pub fn with_field(mut self, field: &'static str) -> Self {
        self.field = Some(field);
        self
    }

    /// Sets the element index.
    #[must_use]
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(target) = self.target {
            write!(f, "in {target}")?;
        }
        if let Some(field) = self.field {
            if self.target.is_some() {
                write!(f, " ")?;
            }
            write!(f, "{field}")?;
        }
        if let Some(index) = self.index {
            write!(f, "[{index}]")?;
        }
        Ok(())
    }
}
