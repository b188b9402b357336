//! Values produced by field resolution and accepted by field updates.

use std::fmt;

use prost_reflect::{DynamicMessage, EnumValueDescriptor, FieldDescriptor, MessageDescriptor};

/// Tag identifying which variant a [`FieldData`] holds.
///
/// For lists this is the kind of the elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Bool,
    I32,
    I64,
    U32,
    U64,
    F32,
    F64,
    String,
    Bytes,
    Enum,
    Message,
}

impl ValueKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            ValueKind::Bool => "bool",
            ValueKind::I32 => "int32",
            ValueKind::I64 => "int64",
            ValueKind::U32 => "uint32",
            ValueKind::U64 => "uint64",
            ValueKind::F32 => "float",
            ValueKind::F64 => "double",
            ValueKind::String => "string",
            ValueKind::Bytes => "bytes",
            ValueKind::Enum => "enum",
            ValueKind::Message => "message",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Native value of a single field.
///
/// Integer encodings collapse onto their native width: `sint32` and
/// `sfixed32` are [`FieldData::I32`], `fixed64` is [`FieldData::U64`], and
/// so on. Enums are kept as their number.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldData {
    Bool(bool),
    I32(i32),
    I64(i64),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    String(String),
    Bytes(Vec<u8>),
    EnumNumber(i32),
    /// `None` when the message field is not set.
    Message(Option<DynamicMessage>),
    List(ListData),
}

/// Homogeneous contents of a repeated field.
#[derive(Debug, Clone, PartialEq)]
pub enum ListData {
    Bool(Vec<bool>),
    I32(Vec<i32>),
    I64(Vec<i64>),
    F32(Vec<f32>),
    F64(Vec<f64>),
    String(Vec<String>),
    EnumNumber(Vec<i32>),
    Message(Vec<DynamicMessage>),
}

impl ListData {
    pub fn kind(&self) -> ValueKind {
        match self {
            ListData::Bool(_) => ValueKind::Bool,
            ListData::I32(_) => ValueKind::I32,
            ListData::I64(_) => ValueKind::I64,
            ListData::F32(_) => ValueKind::F32,
            ListData::F64(_) => ValueKind::F64,
            ListData::String(_) => ValueKind::String,
            ListData::EnumNumber(_) => ValueKind::Enum,
            ListData::Message(_) => ValueKind::Message,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ListData::Bool(v) => v.len(),
            ListData::I32(v) => v.len(),
            ListData::I64(v) => v.len(),
            ListData::F32(v) => v.len(),
            ListData::F64(v) => v.len(),
            ListData::String(v) => v.len(),
            ListData::EnumNumber(v) => v.len(),
            ListData::Message(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FieldData {
    pub fn kind(&self) -> ValueKind {
        match self {
            FieldData::Bool(_) => ValueKind::Bool,
            FieldData::I32(_) => ValueKind::I32,
            FieldData::I64(_) => ValueKind::I64,
            FieldData::U32(_) => ValueKind::U32,
            FieldData::U64(_) => ValueKind::U64,
            FieldData::F32(_) => ValueKind::F32,
            FieldData::F64(_) => ValueKind::F64,
            FieldData::String(_) => ValueKind::String,
            FieldData::Bytes(_) => ValueKind::Bytes,
            FieldData::EnumNumber(_) => ValueKind::Enum,
            FieldData::Message(_) => ValueKind::Message,
            FieldData::List(list) => list.kind(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldData::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_message(&self) -> Option<&DynamicMessage> {
        match self {
            FieldData::Message(m) => m.as_ref(),
            _ => None,
        }
    }
}

/// Result of resolving one field of a message.
#[derive(Debug, Clone)]
pub struct FieldValue {
    pub value: FieldData,
    /// Descriptor of the field the value was read from.
    pub descriptor: FieldDescriptor,
    /// Declared value matching the number of a singular enum field. `None`
    /// for other kinds, or when the number is not declared.
    pub enum_value: Option<EnumValueDescriptor>,
    /// Type of the nested message for message fields, singular or repeated.
    pub message_descriptor: Option<MessageDescriptor>,
}

impl FieldValue {
    pub fn kind(&self) -> ValueKind {
        self.value.kind()
    }

    pub fn is_list(&self) -> bool {
        matches!(self.value, FieldData::List(_))
    }

    /// True when this is a singular message field that is not set.
    ///
    /// Having a `FieldValue` of message kind says nothing about whether the
    /// message exists; check this first.
    pub fn is_null(&self) -> bool {
        matches!(self.value, FieldData::Message(None))
    }
}

/// A value that can be written into a field with
/// [`set_field`](crate::set_field) or [`update_field`](crate::update_field).
///
/// | variant  | accepted field kinds              |
/// |----------|-----------------------------------|
/// | `String` | `string`                          |
/// | `Int64`  | `int64`                           |
/// | `Int32`  | `int32`, enum (declared numbers)  |
/// | `Bool`   | `bool`                            |
/// | `Enum`   | same as `Int32`, using its number |
#[derive(Debug, Clone, PartialEq)]
pub enum SetValue {
    String(String),
    Int64(i64),
    Int32(i32),
    Bool(bool),
    Enum(EnumValueDescriptor),
}

impl SetValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            SetValue::String(_) => "string",
            SetValue::Int64(_) => "int64",
            SetValue::Int32(_) => "int32",
            SetValue::Bool(_) => "bool",
            SetValue::Enum(_) => "enum value",
        }
    }
}

impl From<&str> for SetValue {
    fn from(v: &str) -> Self {
        SetValue::String(v.to_string())
    }
}

impl From<String> for SetValue {
    fn from(v: String) -> Self {
        SetValue::String(v)
    }
}

impl From<i64> for SetValue {
    fn from(v: i64) -> Self {
        SetValue::Int64(v)
    }
}

/// Platform integers update 64-bit fields.
impl From<isize> for SetValue {
    fn from(v: isize) -> Self {
        SetValue::Int64(v as i64)
    }
}

impl From<i32> for SetValue {
    fn from(v: i32) -> Self {
        SetValue::Int32(v)
    }
}

impl From<bool> for SetValue {
    fn from(v: bool) -> Self {
        SetValue::Bool(v)
    }
}

impl From<EnumValueDescriptor> for SetValue {
    fn from(v: EnumValueDescriptor) -> Self {
        SetValue::Enum(v)
    }
}
