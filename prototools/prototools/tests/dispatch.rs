
use bytes::Bytes;
use prost_reflect::{DynamicMessage, Value};
use prototools::{FieldData, FieldError, ListData, ValueKind, resolve_field, set_field};
use test_helpers::*;

fn bunch() -> DynamicMessage {
    let pool = sample_pool();
    let mut msg = new_message(&pool, "r3.BunchOTypes");

    let mut first = new_message(&pool, "r3.Supported");
    first.set_field_by_name("vint32", Value::I32(1));
    let mut second = new_message(&pool, "r3.Supported");
    second.set_field_by_name("vint32", Value::I32(2));

    msg.set_field_by_name(
        "l_ev",
        Value::List(vec![Value::EnumNumber(1), Value::EnumNumber(3)]),
    );
    msg.set_field_by_name(
        "l_string",
        Value::List(vec![
            Value::String("a".to_string()),
            Value::String("b".to_string()),
        ]),
    );
    msg.set_field_by_name("l_int32", Value::List(vec![Value::I32(-1), Value::I32(2)]));
    msg.set_field_by_name("l_int64", Value::List(vec![Value::I64(1 << 40)]));
    msg.set_field_by_name(
        "l_bool",
        Value::List(vec![Value::Bool(true), Value::Bool(false)]),
    );
    msg.set_field_by_name("l_float", Value::List(vec![Value::F32(1.5)]));
    msg.set_field_by_name("l_double", Value::List(vec![Value::F64(2.25)]));
    msg.set_field_by_name(
        "l_message",
        Value::List(vec![Value::Message(first), Value::Message(second)]),
    );
    msg.set_field_by_name("vbytes", Value::Bytes(Bytes::from_static(b"\x01\x02\x03")));
    msg.set_field_by_name("vuint64", Value::U64(u64::MAX));
    msg.set_field_by_name("vsint32", Value::I32(-7));
    msg
}

#[test]
fn scalar_lists() {
    let msg = bunch();

    let fv = resolve_field(&msg, "l_ev").unwrap();
    assert!(fv.is_list());
    assert_eq!(fv.kind(), ValueKind::Enum);
    assert_eq!(fv.value, FieldData::List(ListData::EnumNumber(vec![1, 3])));

    let fv = resolve_field(&msg, "l_string").unwrap();
    assert_eq!(fv.kind(), ValueKind::String);
    assert_eq!(
        fv.value,
        FieldData::List(ListData::String(vec!["a".to_string(), "b".to_string()]))
    );

    assert_eq!(
        resolve_field(&msg, "l_int32").unwrap().value,
        FieldData::List(ListData::I32(vec![-1, 2]))
    );
    assert_eq!(
        resolve_field(&msg, "l_int64").unwrap().value,
        FieldData::List(ListData::I64(vec![1 << 40]))
    );
    assert_eq!(
        resolve_field(&msg, "l_bool").unwrap().value,
        FieldData::List(ListData::Bool(vec![true, false]))
    );
    assert_eq!(
        resolve_field(&msg, "l_float").unwrap().value,
        FieldData::List(ListData::F32(vec![1.5]))
    );
    assert_eq!(
        resolve_field(&msg, "l_double").unwrap().value,
        FieldData::List(ListData::F64(vec![2.25]))
    );
}

#[test]
fn message_list_carries_descriptor() {
    let msg = bunch();
    let fv = resolve_field(&msg, "l_message").unwrap();
    assert!(fv.is_list());
    assert_eq!(fv.kind(), ValueKind::Message);
    assert_eq!(fv.message_descriptor.unwrap().full_name(), "r3.Supported");

    let FieldData::List(ListData::Message(items)) = &fv.value else {
        panic!("expected message list, got {:?}", fv.value);
    };
    assert_eq!(items.len(), 2);
    assert_eq!(
        items[1].get_field_by_name("vint32").unwrap().as_i32(),
        Some(2)
    );
}

#[test]
fn empty_list() {
    let pool = sample_pool();
    let msg = new_message(&pool, "r3.BunchOTypes");
    let fv = resolve_field(&msg, "l_string").unwrap();
    let FieldData::List(list) = fv.value else {
        panic!("expected list");
    };
    assert!(list.is_empty());
    assert_eq!(list.kind(), ValueKind::String);
}

#[test]
fn unsupported_lists_and_maps() {
    let msg = bunch();
    for name in ["l_uint32", "l_bytes", "l_sint32", "counts"] {
        let err = resolve_field(&msg, name).unwrap_err();
        assert!(
            matches!(err, FieldError::Unsupported { ref path, .. } if path == name),
            "{name}: {err}"
        );
    }
}

#[test]
fn singular_scalars_keep_native_type() {
    let msg = bunch();
    assert_eq!(
        resolve_field(&msg, "vbytes").unwrap().value,
        FieldData::Bytes(vec![1, 2, 3])
    );
    assert_eq!(
        resolve_field(&msg, "vuint64").unwrap().value,
        FieldData::U64(u64::MAX)
    );
    let fv = resolve_field(&msg, "vsint32").unwrap();
    assert_eq!(fv.kind(), ValueKind::I32);
    assert_eq!(fv.value, FieldData::I32(-7));

    // Unset proto3 scalars read as their defaults.
    assert_eq!(resolve_field(&msg, "vfloat").unwrap().value, FieldData::F32(0.0));
}

#[test]
fn enum_default_is_first_value() {
    let pool = sample_pool();
    let msg = new_message(&pool, "r3.Supported");
    let fv = resolve_field(&msg, "ev").unwrap();
    assert_eq!(fv.value, FieldData::EnumNumber(0));
    assert_eq!(fv.enum_value.unwrap().name(), "EV_Unknown");
}

#[test]
fn undeclared_enum_number_has_no_value_descriptor() {
    let pool = sample_pool();
    let mut msg = new_message(&pool, "r3.Supported");
    msg.set_field_by_name("ev", Value::EnumNumber(99));
    let fv = resolve_field(&msg, "ev").unwrap();
    assert_eq!(fv.value, FieldData::EnumNumber(99));
    assert!(fv.enum_value.is_none());
}

#[test]
fn set_field_on_message() {
    let pool = sample_pool();
    let mut msg = new_message(&pool, "r3.Supported");
    set_field(&mut msg, "vstring", "x").unwrap();
    set_field(&mut msg, "ev", 3i32).unwrap();
    assert_eq!(resolve_field(&msg, "vstring").unwrap().value.as_str(), Some("x"));
    assert_eq!(resolve_field(&msg, "ev").unwrap().enum_value.unwrap().name(), "EV_Eh");

    let err = set_field(&mut msg, "vstring.inner", "x").unwrap_err();
    assert!(matches!(err, FieldError::BadFieldName { .. }));
}
