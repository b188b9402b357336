
use prost_reflect::{DynamicMessage, Value};
use prototools::{FieldError, FormatError, ValueKind, field_as_str};
use test_helpers::*;

fn layer1() -> DynamicMessage {
    let pool = sample_pool();
    let mut supported = new_message(&pool, "r3.Supported");
    supported.set_field_by_name("vint32", Value::I32(32));
    supported.set_field_by_name("vint64", Value::I64(64));
    supported.set_field_by_name("vstring", Value::String("string".to_string()));
    supported.set_field_by_name("vbool", Value::Bool(true));
    supported.set_field_by_name("ev", Value::EnumNumber(1));
    supported.set_field_by_name("v_time", Value::I64(1619820228));
    supported.set_field_by_name("vfloat", Value::F32(3.4569));
    supported.set_field_by_name("vdouble", Value::F64(8.9645));

    let mut layer1 = new_message(&pool, "r3.Layer1");
    layer1.set_field_by_name("vstring", Value::String("Hello".to_string()));
    attach(&mut layer1, "supported", supported);
    layer1
}

#[test]
fn fields_as_strings() {
    let msg = layer1();
    let cases = [
        ("supported.vint32", false, "32", ValueKind::I32),
        ("supported.vint64", false, "64", ValueKind::I64),
        ("supported.vstring", false, "string", ValueKind::String),
        ("supported.vbool", false, "true", ValueKind::Bool),
        ("supported.vbool", true, "True", ValueKind::Bool),
        ("supported.ev", false, "EV_Ok", ValueKind::Enum),
        ("supported.ev", true, "Ok", ValueKind::Enum),
        (
            "supported.v_time",
            false,
            "2021-04-30 22:03:48 +0000 UTC",
            ValueKind::I64,
        ),
        ("supported.vfloat", false, "3.46", ValueKind::F32),
        ("supported.vdouble", false, "8.96", ValueKind::F64),
        ("vstring", true, "Hello", ValueKind::String),
    ];

    for (path, pretty, want, want_kind) in cases {
        let (got, kind) = field_as_str(&msg, path, pretty).unwrap();
        assert_eq!(got, want, "path {path} pretty {pretty}");
        assert_eq!(kind, want_kind, "path {path}");
    }
}

#[test]
fn bytes_and_messages() {
    let pool = sample_pool();
    let mut bunch = new_message(&pool, "r3.BunchOTypes");
    bunch.set_field_by_name("vbytes", Value::Bytes(bytes::Bytes::from_static(b"abcd")));
    let (text, kind) = field_as_str(&bunch, "vbytes", false).unwrap();
    assert_eq!(text, "[4]bytes");
    assert_eq!(kind, ValueKind::Bytes);

    let msg = layer1();
    let (text, kind) = field_as_str(&msg, "supported", false).unwrap();
    assert_eq!(kind, ValueKind::Message);
    assert!(text.contains("vstring") && text.contains("\"string\""), "{text}");

    let empty = new_message(&pool, "r3.Layer1");
    let (text, _) = field_as_str(&empty, "supported", false).unwrap();
    assert!(text.is_empty());
}

#[test]
fn lists_are_not_rendered() {
    let pool = sample_pool();
    let msg = new_message(&pool, "r3.BunchOTypes");
    let err = field_as_str(&msg, "l_string", false).unwrap_err();
    assert!(matches!(
        err,
        FormatError::Unsupported {
            kind: ValueKind::String,
            ..
        }
    ));
}

#[test]
fn resolution_errors_pass_through() {
    let pool = sample_pool();
    let msg = new_message(&pool, "r3.Layer1");
    let err = field_as_str(&msg, "supported.vbool", false).unwrap_err();
    assert!(matches!(
        err,
        FormatError::Field(FieldError::IntermediateNotSet { .. })
    ));
}
