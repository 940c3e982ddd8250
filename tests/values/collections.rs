//! Integration tests for string, list and map views
//!
//! Tests borrowed views over caller storage and map key validation.

use graphwire_values::{ErrorKind, List, Map, MapEntry, Str, Value, ValueType};

// =============================================================================
// Strings
// =============================================================================

#[test]
fn string_borrows_caller_bytes() {
    let owned = String::from("graph");
    let v = Value::string(&owned);
    let s = v.as_str().unwrap();
    assert_eq!(s.as_bytes().as_ptr(), owned.as_ptr());
    assert_eq!(s.len(), 5);
}

#[test]
fn string_without_terminator_copies_with_one() {
    let s = Str::from_bytes(b"abc");
    let mut buf = [0xFF_u8; 8];
    assert_eq!(s.copy_to(&mut buf), 3);
    assert_eq!(&buf[..4], b"abc\0");
}

#[test]
fn strict_views_reject_invalid_utf8() {
    let s = Str::from_bytes(b"ok\xfe");
    let err = s.to_str().unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidEncoding { offset: 2 }));
    assert_eq!(s.to_string_lossy(), "ok\u{fffd}");

    let mut chars = ['\0'; 4];
    assert!(s.decode_into(&mut chars).is_err());
}

#[test]
fn wide_decode_sizes_then_fills() {
    let s = Str::new("añb");
    let needed = s.decode_into(&mut []).unwrap();
    let mut chars = vec!['\0'; needed];
    assert_eq!(s.decode_into(&mut chars).unwrap(), 3);
    assert_eq!(chars, ['a', 'ñ', 'b']);
}

// =============================================================================
// Lists
// =============================================================================

#[test]
fn list_access() {
    let items = [Value::Int(1), Value::string("two"), Value::Null];
    let list = Value::list(&items).as_list().unwrap();
    assert_eq!(list.len(), 3);
    assert_eq!(list.get(0).and_then(|v| v.as_int()), Some(1));
    assert!(list.get(3).is_none());
    let kinds: Vec<ValueType> = list.iter().map(|v| v.value_type()).collect();
    assert_eq!(kinds, [ValueType::Int, ValueType::String, ValueType::Null]);
}

#[test]
fn lists_nest() {
    let inner = [Value::Int(1)];
    let outer = [Value::list(&inner), Value::List(List::EMPTY)];
    let v = Value::list(&outer);
    let first = v.as_list().and_then(|l| l.get(0)).and_then(|v| v.as_list());
    assert_eq!(first.map(|l| l.len()), Some(1));
}

// =============================================================================
// Maps
// =============================================================================

#[test]
fn map_rejects_non_string_key() {
    let entries = [
        MapEntry::new(Value::string("a"), Value::Int(1)),
        MapEntry::new(Value::Int(2), Value::Int(2)),
    ];
    let err = Value::map(&entries).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::InvalidMapKeyType {
            actual: ValueType::Int
        }
    ));
    assert!(err.is_structural());
    let ctx = err.context.unwrap();
    assert_eq!(ctx.target, Some("map"));
    assert_eq!(ctx.index, Some(1));
}

#[test]
fn map_rejects_first_bad_key_only() {
    let entries = [
        MapEntry::new(Value::Bool(true), Value::Null),
        MapEntry::new(Value::Null, Value::Null),
    ];
    let err = Map::new(&entries).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::InvalidMapKeyType {
            actual: ValueType::Bool
        }
    ));
    assert_eq!(err.context.and_then(|c| c.index), Some(0));
}

#[test]
fn duplicate_keys_use_first_match() {
    let entries = [
        MapEntry::new(Value::string("k"), Value::Int(1)),
        MapEntry::new(Value::string("k"), Value::Int(2)),
    ];
    let map = Map::new(&entries).unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map.get_str("k").and_then(|v| v.as_int()), Some(1));
    assert_eq!(map.get(&Value::string("k")).and_then(|v| v.as_int()), Some(1));
    assert!(map.get_str("missing").is_none());
}

#[test]
fn map_entries_keep_their_order() {
    let entries = [
        MapEntry::new(Value::string("z"), Value::Int(26)),
        MapEntry::new(Value::string("a"), Value::Int(1)),
    ];
    let map = Map::new(&entries).unwrap();
    assert_eq!(map.entry(0).map(|e| e.key), Some(Value::string("z")));
    assert!(map.entry(2).is_none());
    let values: Vec<i64> = map.iter().filter_map(|e| e.value.as_int()).collect();
    assert_eq!(values, [26, 1]);
}
