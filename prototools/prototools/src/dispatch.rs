//! Field lookup by name, classification by kind, and value extraction.

use prost_reflect::{DynamicMessage, FieldDescriptor, Kind, MessageDescriptor, ReflectMessage, Value};

use crate::{
    FieldError,
    value::{FieldData, FieldValue, ListData, SetValue, ValueKind},
};

/// Resolve the field called `name` on `msg`.
///
/// `name` is a single field name as written in the `.proto` file, not a path.
/// See [`get_field`](crate::get_field) for dotted paths.
///
/// The following is the kind to [`FieldData`] mapping:
///
/// | protobuf kind                      | `FieldData`   |
/// |------------------------------------|---------------|
/// | `bool`                             | `Bool`        |
/// | `int32`, `sint32`, `sfixed32`      | `I32`         |
/// | `int64`, `sint64`, `sfixed64`      | `I64`         |
/// | `uint32`, `fixed32`                | `U32`         |
/// | `uint64`, `fixed64`                | `U64`         |
/// | `float`                            | `F32`         |
/// | `double`                           | `F64`         |
/// | `string`                           | `String`      |
/// | `bytes`                            | `Bytes`       |
/// | enum                               | `EnumNumber`  |
/// | message, group                     | `Message`     |
///
/// Repeated fields become [`FieldData::List`] and are limited to `bool`,
/// `int32`, `int64`, `float`, `double`, `string`, enum and message elements.
/// Map fields are rejected.
pub fn resolve_field(msg: &DynamicMessage, name: &str) -> Result<FieldValue, FieldError> {
    resolve_named(msg, name, name)
}

/// Set the field called `name` on `msg`. See [`SetValue`] for which values
/// each field kind accepts.
pub fn set_field(
    msg: &mut DynamicMessage,
    name: &str,
    value: impl Into<SetValue>,
) -> Result<(), FieldError> {
    set_named(msg, name, value.into(), name)
}

pub(crate) fn lookup_field(
    desc: &MessageDescriptor,
    name: &str,
    path: &str,
) -> Result<FieldDescriptor, FieldError> {
    desc.get_field_by_name(name)
        .ok_or_else(|| FieldError::BadFieldName {
            path: path.to_string(),
        })
}

pub(crate) fn resolve_named(
    msg: &DynamicMessage,
    name: &str,
    path: &str,
) -> Result<FieldValue, FieldError> {
    let fd = lookup_field(&msg.descriptor(), name, path)?;
    if fd.is_map() {
        return Err(unsupported(path, "map fields are not supported"));
    }
    if fd.is_list() {
        return list_field_value(msg, fd, path);
    }

    let value = msg.get_field(&fd);
    match fd.kind() {
        Kind::Message(md) => {
            let nested = if msg.has_field(&fd) {
                value.as_message().cloned()
            } else {
                None
            };
            Ok(FieldValue {
                value: FieldData::Message(nested),
                descriptor: fd,
                enum_value: None,
                message_descriptor: Some(md),
            })
        }
        Kind::Enum(ed) => {
            let number = value
                .as_enum_number()
                .unwrap_or_else(|| ed.default_value().number());
            Ok(FieldValue {
                value: FieldData::EnumNumber(number),
                enum_value: ed.get_value(number),
                descriptor: fd,
                message_descriptor: None,
            })
        }
        _ => {
            let data = scalar_data(&value, path)?;
            Ok(FieldValue {
                value: data,
                descriptor: fd,
                enum_value: None,
                message_descriptor: None,
            })
        }
    }
}

fn scalar_data(value: &Value, path: &str) -> Result<FieldData, FieldError> {
    let data = match value {
        Value::Bool(v) => FieldData::Bool(*v),
        Value::I32(v) => FieldData::I32(*v),
        Value::I64(v) => FieldData::I64(*v),
        Value::U32(v) => FieldData::U32(*v),
        Value::U64(v) => FieldData::U64(*v),
        Value::F32(v) => FieldData::F32(*v),
        Value::F64(v) => FieldData::F64(*v),
        Value::String(s) => FieldData::String(s.clone()),
        Value::Bytes(b) => FieldData::Bytes(b.to_vec()),
        other => {
            return Err(unsupported(
                path,
                format!("unexpected scalar value {other:?}"),
            ));
        }
    };
    Ok(data)
}

fn list_field_value(
    msg: &DynamicMessage,
    fd: FieldDescriptor,
    path: &str,
) -> Result<FieldValue, FieldError> {
    if fd.is_group() {
        return Err(unsupported(path, "repeated groups are not supported"));
    }

    let value = msg.get_field(&fd);
    let items = value.as_list().unwrap_or_default();
    let mut message_descriptor = None;
    let list = match fd.kind() {
        Kind::Bool => ListData::Bool(collect(items, Value::as_bool)),
        Kind::Int32 => ListData::I32(collect(items, Value::as_i32)),
        Kind::Int64 => ListData::I64(collect(items, Value::as_i64)),
        Kind::Float => ListData::F32(collect(items, Value::as_f32)),
        Kind::Double => ListData::F64(collect(items, Value::as_f64)),
        Kind::String => ListData::String(collect(items, |v| v.as_str().map(str::to_owned))),
        Kind::Enum(_) => ListData::EnumNumber(collect(items, Value::as_enum_number)),
        Kind::Message(md) => {
            message_descriptor = Some(md);
            ListData::Message(collect(items, |v| v.as_message().cloned()))
        }
        other => {
            return Err(unsupported(
                path,
                format!("repeated {} fields are not supported", kind_name(&other)),
            ));
        }
    };

    Ok(FieldValue {
        value: FieldData::List(list),
        descriptor: fd,
        enum_value: None,
        message_descriptor,
    })
}

fn collect<T>(items: &[Value], f: impl Fn(&Value) -> Option<T>) -> Vec<T> {
    items.iter().filter_map(f).collect()
}

pub(crate) fn set_named(
    msg: &mut DynamicMessage,
    name: &str,
    value: SetValue,
    path: &str,
) -> Result<(), FieldError> {
    let fd = lookup_field(&msg.descriptor(), name, path)?;
    if fd.is_map() {
        return Err(unsupported(path, "map fields are not supported"));
    }
    if fd.is_list() {
        return Err(mismatch(
            path,
            format!("repeated {}", kind_name(&fd.kind())),
            &value,
        ));
    }

    let kind = fd.kind();
    let proto_value = match (&value, &kind) {
        (SetValue::String(s), Kind::String) => Value::String(s.clone()),
        (SetValue::Int64(v), Kind::Int64) => Value::I64(*v),
        (SetValue::Bool(v), Kind::Bool) => Value::Bool(*v),
        (SetValue::Int32(n), _) => int32_value(&kind, *n, path, &value)?,
        (SetValue::Enum(ev), _) => int32_value(&kind, ev.number(), path, &value)?,
        _ => return Err(mismatch(path, kind_name(&kind), &value)),
    };

    log::trace!("setting field({path}) to {proto_value:?}");
    msg.set_field(&fd, proto_value);
    Ok(())
}

fn int32_value(kind: &Kind, n: i32, path: &str, value: &SetValue) -> Result<Value, FieldError> {
    match kind {
        Kind::Int32 => Ok(Value::I32(n)),
        Kind::Enum(ed) if ed.get_value(n).is_some() => Ok(Value::EnumNumber(n)),
        Kind::Enum(_) => Err(FieldError::InvalidEnumValue {
            path: path.to_string(),
            number: n,
        }),
        _ => Err(mismatch(path, kind_name(kind), value)),
    }
}

fn mismatch(path: &str, expected: impl Into<String>, value: &SetValue) -> FieldError {
    FieldError::TypeMismatch {
        path: path.to_string(),
        expected: expected.into(),
        got: value.type_name(),
    }
}

fn unsupported(path: &str, detail: impl Into<String>) -> FieldError {
    FieldError::Unsupported {
        path: path.to_string(),
        detail: detail.into(),
    }
}

/// The [`ValueKind`] a singular field of `kind` resolves to.
pub(crate) fn value_kind(kind: &Kind) -> ValueKind {
    match kind {
        Kind::Double => ValueKind::F64,
        Kind::Float => ValueKind::F32,
        Kind::Int32 | Kind::Sint32 | Kind::Sfixed32 => ValueKind::I32,
        Kind::Int64 | Kind::Sint64 | Kind::Sfixed64 => ValueKind::I64,
        Kind::Uint32 | Kind::Fixed32 => ValueKind::U32,
        Kind::Uint64 | Kind::Fixed64 => ValueKind::U64,
        Kind::Bool => ValueKind::Bool,
        Kind::String => ValueKind::String,
        Kind::Bytes => ValueKind::Bytes,
        Kind::Enum(_) => ValueKind::Enum,
        Kind::Message(_) => ValueKind::Message,
    }
}

/// Declared kind as it is spelled in a `.proto` file.
pub(crate) fn kind_name(kind: &Kind) -> String {
    let name = match kind {
        Kind::Double => "double",
        Kind::Float => "float",
        Kind::Int32 => "int32",
        Kind::Int64 => "int64",
        Kind::Uint32 => "uint32",
        Kind::Uint64 => "uint64",
        Kind::Sint32 => "sint32",
        Kind::Sint64 => "sint64",
        Kind::Fixed32 => "fixed32",
        Kind::Fixed64 => "fixed64",
        Kind::Sfixed32 => "sfixed32",
        Kind::Sfixed64 => "sfixed64",
        Kind::Bool => "bool",
        Kind::String => "string",
        Kind::Bytes => "bytes",
        Kind::Message(md) => return format!("message {}", md.full_name()),
        Kind::Enum(ed) => return format!("enum {}", ed.full_name()),
    };
    name.to_string()
}
