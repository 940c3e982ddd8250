//! Integration tests for error reporting
//!
//! Tests error kinds, attached context and message formatting.

use graphwire_values::{Error, ErrorContext, ErrorKind, List, Map, Value, ValueType};

#[test]
fn constructor_errors_are_structural() {
    let seq = [Value::Int(1), Value::Int(0), Value::Int(1)];
    let fields = [Value::List(List::EMPTY), Value::List(List::EMPTY), Value::list(&seq)];
    let err = Value::path(&fields).unwrap_err();
    assert!(err.is_structural());
    assert_eq!(
        err.to_string(),
        "invalid path sequence length: 3 is not even (in path sequence)"
    );
    assert_eq!(err.context.and_then(|c| c.index), None);
}

#[test]
fn field_mismatch_is_not_structural() {
    let fields = [Value::identity(1), Value::Map(Map::EMPTY), Value::Map(Map::EMPTY)];
    let err = Value::node(&fields).unwrap_err();
    assert!(!err.is_structural());
    assert_eq!(
        err.to_string(),
        "type mismatch: expected List, got Map (in node labels)"
    );
}

#[test]
fn range_errors_name_the_entry() {
    let n = [Value::identity(1), Value::List(List::EMPTY), Value::Map(Map::EMPTY)];
    let r = [Value::identity(2), Value::string("R"), Value::Map(Map::EMPTY)];
    let nodes = [Value::node(&n).unwrap()];
    let rels = [Value::unbound_relationship(&r).unwrap()];
    let seq = [Value::Int(1), Value::Int(5)];
    let fields = [Value::list(&nodes), Value::list(&rels), Value::list(&seq)];
    let err = Value::path(&fields).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::InvalidPathSequenceIndexRange { value: 5, bound: 1 }
    ));
    assert_eq!(err.context.and_then(|c| c.index), Some(1));
}

#[test]
fn context_renders_partially() {
    let err = Error::type_mismatch(ValueType::Map, ValueType::Int)
        .with_context(ErrorContext::new().with_field("properties"));
    assert_eq!(
        err.to_string(),
        "type mismatch: expected Map, got Integer (properties)"
    );
}

#[test]
fn encoding_errors_carry_offset() {
    let err = Value::ustring(b"abc\xff")
        .as_str()
        .unwrap()
        .to_str()
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidEncoding { offset: 3 }));
    assert_eq!(err.to_string(), "invalid string encoding at byte 3");
}
