//! Tests for the rectangle, JSON helpers and ROT13.

use std::collections::BTreeMap;

use quickcheck_macros::quickcheck;
use selkit_objects::{ObjectError, Rectangle, from_json, rot13, to_json};
use serde::Deserialize;

// ========== Rectangle ==========

#[test]
fn test_rectangle_fields_and_area() {
    let r = Rectangle::new(10.0, 20.0);
    assert!((r.width - 10.0).abs() < f64::EPSILON);
    assert!((r.height - 20.0).abs() < f64::EPSILON);
    assert!((r.area() - 200.0).abs() < f64::EPSILON);
}

#[test]
fn test_degenerate_rectangle_has_zero_area() {
    assert!(Rectangle::new(0.0, 5.0).area().abs() < f64::EPSILON);
}

// ========== JSON ==========

#[test]
fn test_to_json_array() {
    assert_eq!(to_json(&[1, 2, 3]).unwrap(), "[1,2,3]");
}

#[test]
fn test_to_json_rectangle() {
    let json = to_json(&Rectangle::new(10.0, 20.0)).unwrap();
    assert_eq!(json, r#"{"width":10.0,"height":20.0}"#);
}

#[test]
fn test_from_json_attaches_type() {
    let r: Rectangle = from_json(r#"{"width":10,"height":20}"#).unwrap();
    assert_eq!(r, Rectangle::new(10.0, 20.0));
    assert!((r.area() - 200.0).abs() < f64::EPSILON);
}

#[derive(Debug, Deserialize, PartialEq)]
struct Circle {
    radius: f64,
}

#[test]
fn test_from_json_other_type() {
    let c: Circle = from_json(r#"{"radius":10}"#).unwrap();
    assert_eq!(c, Circle { radius: 10.0 });
}

#[test]
fn test_from_json_malformed() {
    let err = from_json::<Rectangle>("{\"width\":").unwrap_err();
    assert!(matches!(err, ObjectError::Decode(_)));
    assert!(err.to_string().starts_with("failed to decode JSON"));
}

#[test]
fn test_from_json_missing_field() {
    assert!(from_json::<Rectangle>(r#"{"width":1}"#).is_err());
}

#[test]
fn test_to_json_non_string_keys_fail() {
    let mut map = BTreeMap::new();
    let _ = map.insert(vec![1], "a");
    let err = to_json(&map).unwrap_err();
    assert!(matches!(err, ObjectError::Encode(_)));
}

// ========== ROT13 ==========

#[test]
fn test_rot13_sentence() {
    assert_eq!(
        rot13("Why did the chicken cross the road?"),
        "Jul qvq gur puvpxra pebff gur ebnq?"
    );
}

#[test]
fn test_rot13_wraps_alphabet() {
    assert_eq!(rot13("nopqrstuvwxyz"), "abcdefghijklm");
    assert_eq!(rot13("NOPQRSTUVWXYZ"), "ABCDEFGHIJKLM");
}

#[test]
fn test_rot13_leaves_non_letters() {
    assert_eq!(rot13("a|b 123 ü!"), "n|o 123 ü!");
    assert_eq!(rot13(""), "");
}

#[quickcheck]
fn prop_rot13_is_involution(text: String) -> bool {
    rot13(&rot13(&text)) == text
}

#[quickcheck]
fn prop_rot13_preserves_char_count(text: String) -> bool {
    rot13(&text).chars().count() == text.chars().count()
}
