//! Graphwire - value model for a graph-database wire protocol client
//!
//! This crate re-exports the value layer for convenient access. For detailed
//! documentation, see [`graphwire_values`].
//!
//! # Layout
//!
//! ```text
//! graphwire_values::types       - type registry (kind tags and names)
//! graphwire_values::dispatch    - behavior bundle index
//! graphwire_values::value       - the copyable value handle and constructors
//! graphwire_values::collections - string, list and map views
//! graphwire_values::structure   - signature-tagged structures
//! graphwire_values::graph       - nodes, relationships and paths
//! graphwire_values::equality    - structural equality
//! graphwire_values::render      - text rendering and stream printing
//! graphwire_values::sink        - serialization hook for wire codecs
//! ```

pub use graphwire_values as values;
