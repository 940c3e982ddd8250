//! Integration tests for structural equality
//!
//! Tests per-kind comparison rules, including unordered maps and IEEE floats.

use graphwire_values::{List, Map, MapEntry, Value};
use proptest::prelude::*;

fn pair<'a>(key: &'a str, value: i64) -> MapEntry<'a> {
    MapEntry::new(Value::string(key), Value::Int(value))
}

#[test]
fn nan_is_not_equal_to_itself() {
    let nan = Value::float(f64::NAN);
    assert_ne!(nan, nan);
    assert_eq!(Value::float(1.25), Value::float(1.25));
}

#[test]
fn kind_mismatch_is_unequal() {
    assert_ne!(Value::Int(0), Value::Null);
    assert_ne!(Value::string("1"), Value::Int(1));
    assert_ne!(Value::List(List::EMPTY), Value::Map(Map::EMPTY));
}

#[test]
fn maps_ignore_entry_order() {
    let ab = [pair("a", 1), pair("b", 2)];
    let ba = [pair("b", 2), pair("a", 1)];
    assert_eq!(Value::map(&ab).unwrap(), Value::map(&ba).unwrap());
}

#[test]
fn maps_of_different_sizes_differ() {
    let a = [pair("a", 1)];
    let ab = [pair("a", 1), pair("b", 2)];
    assert_ne!(Value::map(&a).unwrap(), Value::map(&ab).unwrap());
    assert_ne!(Value::map(&ab).unwrap(), Value::map(&a).unwrap());
}

#[test]
fn duplicate_keys_compare_through_the_first_match() {
    let twice = [pair("k", 2), pair("k", 2)];
    let shadowed = [pair("k", 1), pair("k", 2)];
    let twice = Value::map(&twice).unwrap();
    let shadowed = Value::map(&shadowed).unwrap();
    assert_eq!(shadowed.as_map().unwrap().get_str("k"), Some(Value::Int(1)));
    assert_ne!(twice, shadowed);
    assert_ne!(shadowed, twice);

    let left = [pair("k", 1), pair("k", 9)];
    let right = [pair("k", 1), pair("j", 0)];
    let left = Value::map(&left).unwrap();
    let right = Value::map(&right).unwrap();
    assert_ne!(left, right);
    assert_ne!(right, left);

    let a = [pair("k", 1), pair("j", 2), pair("k", 1)];
    let b = [pair("j", 2), pair("k", 1), pair("k", 1)];
    let a = Value::map(&a).unwrap();
    let b = Value::map(&b).unwrap();
    assert_eq!(a, b);
    assert_eq!(b, a);
}

#[test]
fn map_values_compare_recursively() {
    let xs = [Value::Int(1), Value::Int(2)];
    let ys = [Value::Int(1), Value::Int(2)];
    let zs = [Value::Int(2), Value::Int(1)];
    let left = [MapEntry::new(Value::string("k"), Value::list(&xs))];
    let same = [MapEntry::new(Value::string("k"), Value::list(&ys))];
    let swapped = [MapEntry::new(Value::string("k"), Value::list(&zs))];
    assert_eq!(Value::map(&left).unwrap(), Value::map(&same).unwrap());
    assert_ne!(Value::map(&left).unwrap(), Value::map(&swapped).unwrap());
}

#[test]
fn strings_compare_bytes() {
    let a = String::from("same");
    let b = String::from("same");
    assert_eq!(Value::string(&a), Value::string(&b));
    assert_eq!(Value::string("é"), Value::ustring("é".as_bytes()));
    assert_ne!(Value::string("e"), Value::string("é"));
}

#[test]
fn structs_need_matching_signatures() {
    let fields = [Value::Int(1), Value::Int(2)];
    assert_ne!(
        Value::structure(0x01, &fields),
        Value::structure(0x02, &fields)
    );
    assert_ne!(
        Value::structure(0x01, &fields),
        Value::structure(0x01, &fields[..1])
    );
    assert_eq!(
        Value::structure(0x01, &fields),
        Value::structure(0x01, &[Value::Int(1), Value::Int(2)])
    );
}

proptest! {
    #[test]
    fn int_equality_matches_i64(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(Value::Int(a) == Value::Int(b), a == b);
    }

    #[test]
    fn float_equality_matches_ieee(a in any::<f64>(), b in any::<f64>()) {
        prop_assert_eq!(Value::Float(a) == Value::Float(b), a == b);
    }

    #[test]
    fn string_equality_matches_bytes(a in "[ab]{0,4}", b in "[ab]{0,4}") {
        prop_assert_eq!(Value::string(&a) == Value::string(&b), a == b);
    }

    #[test]
    fn list_equality_is_reflexive(items in proptest::collection::vec(any::<i64>(), 0..16)) {
        let values: Vec<Value> = items.iter().copied().map(Value::Int).collect();
        let copy = values.clone();
        prop_assert_eq!(Value::list(&values), Value::list(&copy));
    }
}
