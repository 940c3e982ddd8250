//! Integration tests for scalar values and the type registry
//!
//! Tests kind tags, exact instance checks, saturation and identity rules.

use graphwire_values::{Behavior, ErrorKind, Identity, List, Map, Value, ValueType};

// =============================================================================
// Type Registry
// =============================================================================

#[test]
fn every_constructor_reports_its_kind() {
    let labels: [Value; 0] = [];
    let node = [Value::identity(1), Value::list(&labels), Value::Map(Map::EMPTY)];
    let rel = [Value::identity(2), Value::string("T"), Value::Map(Map::EMPTY)];
    let bound = [
        Value::identity(2),
        Value::identity(1),
        Value::identity(1),
        Value::string("T"),
        Value::Map(Map::EMPTY),
    ];
    let path = [
        Value::List(List::EMPTY),
        Value::List(List::EMPTY),
        Value::List(List::EMPTY),
    ];
    let items = [Value::Null];

    let cases = [
        (Value::Null, ValueType::Null),
        (Value::bool(true), ValueType::Bool),
        (Value::int(1), ValueType::Int),
        (Value::float(1.0), ValueType::Float),
        (Value::string("s"), ValueType::String),
        (Value::ustring(b"s"), ValueType::String),
        (Value::list(&items), ValueType::List),
        (Value::map(&[]).unwrap(), ValueType::Map),
        (Value::node(&node).unwrap(), ValueType::Node),
        (Value::relationship(&bound).unwrap(), ValueType::Relationship),
        (Value::unbound_relationship(&rel).unwrap(), ValueType::Relationship),
        (Value::path(&path).unwrap(), ValueType::Path),
        (Value::identity(0), ValueType::Identity),
        (Value::structure(0x01, &items), ValueType::Struct),
    ];

    for (value, expected) in cases {
        assert_eq!(value.value_type(), expected);
        assert_eq!(value.type_name(), expected.name());
        for other in ValueType::ALL {
            assert_eq!(value.instance_of(other), other == expected);
        }
    }
}

#[test]
fn type_names_are_stable() {
    let names: Vec<&str> = ValueType::ALL.iter().map(|t| t.name()).collect();
    assert_eq!(
        names,
        [
            "Null",
            "Boolean",
            "Integer",
            "Float",
            "String",
            "List",
            "Map",
            "Node",
            "Relationship",
            "Path",
            "Identity",
            "Struct",
        ]
    );
}

#[test]
fn raw_tags_are_bounds_checked() {
    for ty in ValueType::ALL {
        assert_eq!(ValueType::try_from(ty.tag()).unwrap(), ty);
    }
    let err = ValueType::try_from(12).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidTypeTag(12)));

    let err = Behavior::try_from(200).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidDispatchIndex(200)));
}

#[test]
fn integer_and_identity_share_behavior_but_not_kind() {
    let n = Value::int(7);
    let id = Value::identity(7);
    assert_eq!(n.behavior(), id.behavior());
    assert_ne!(n.value_type(), id.value_type());
    assert_ne!(n, id);
}

// =============================================================================
// Saturation
// =============================================================================

#[test]
fn wide_integers_saturate() {
    assert_eq!(Value::from(i128::MAX).as_int(), Some(i64::MAX));
    assert_eq!(Value::from(i128::MIN).as_int(), Some(i64::MIN));
    assert_eq!(Value::from(u64::MAX).as_int(), Some(i64::MAX));
    assert_eq!(Value::int_saturating(i128::from(i64::MAX) + 1).as_int(), Some(i64::MAX));
    assert_eq!(Value::from(123_u64).as_int(), Some(123));
}

// =============================================================================
// Identity
// =============================================================================

#[test]
fn negative_identity_is_null() {
    assert!(Value::identity(-1).is_null());
    assert!(Value::identity(i64::MIN).is_null());
    assert!(Identity::new(-5).is_none());
}

#[test]
fn unsigned_identity_above_range_is_null() {
    assert!(Value::identity_u64(u64::MAX).is_null());
    let max = Value::identity_u64(u64::try_from(i64::MAX).unwrap());
    assert_eq!(max.as_identity().map(Identity::get), Some(i64::MAX));
}

#[test]
fn identity_is_not_an_integer_projection() {
    let id = Value::identity(9);
    assert_eq!(id.as_int(), None);
    assert_eq!(id.as_identity().map(Identity::get), Some(9));
}

// =============================================================================
// Projections
// =============================================================================

#[test]
fn soft_projections_return_none_on_mismatch() {
    let v = Value::string("text");
    assert!(v.as_bool().is_none());
    assert!(v.as_int().is_none());
    assert!(v.as_float().is_none());
    assert!(v.as_list().is_none());
    assert!(v.as_map().is_none());
    assert!(v.as_node().is_none());
    assert!(v.as_path().is_none());
    assert!(v.as_str().is_some());
}

#[test]
fn checked_projections_report_the_mismatch() {
    let err = i64::try_from(Value::float(1.0)).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::TypeMismatch {
            expected: ValueType::Int,
            actual: ValueType::Float
        }
    ));
    assert_eq!(i64::try_from(Value::int(3)).unwrap(), 3);
}
