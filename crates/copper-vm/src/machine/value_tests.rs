//! Tests for register value clamping and accessors.

use super::value::Value;

#[test]
fn clamp_floors_at_zero() {
    assert_eq!(Value::clamped(i64::MIN), Value::Int(0));
    assert_eq!(Value::clamped(-1), Value::Int(0));
    assert_eq!(Value::clamped(0), Value::Int(0));
}

#[test]
fn clamp_caps_at_ffff() {
    assert_eq!(Value::clamped(0xffff), Value::Int(0xffff));
    assert_eq!(Value::clamped(0x10000), Value::Int(0xffff));
    assert_eq!(Value::clamped(i64::MAX), Value::Int(0xffff));
}

#[test]
fn clamp_passes_the_interior_through() {
    assert_eq!(Value::clamped(1), Value::Int(1));
    assert_eq!(Value::clamped(0x1234), Value::Int(0x1234));
    assert_eq!(Value::clamped(0xfffe), Value::Int(0xfffe));
}

#[test]
fn accessors_match_the_variant() {
    let int = Value::Int(7);
    assert_eq!(int.int(), Some(7));
    assert_eq!(int.bytes(), None);
    assert_eq!(int.type_name(), "int");

    let s = Value::Str(b"abc".to_vec());
    assert_eq!(s.int(), None);
    assert_eq!(s.bytes(), Some(&b"abc"[..]));
    assert_eq!(s.type_name(), "str");
}

#[test]
fn default_is_integer_zero() {
    assert_eq!(Value::default(), Value::Int(0));
}
