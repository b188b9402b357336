//! Render a single field as display text.

use chrono::DateTime;
use prost_reflect::DynamicMessage;

use crate::{
    FormatError, get_field,
    naming::to_readable_enum,
    value::{FieldData, ValueKind},
};

/// Return the field at `path` as a string, along with its kind.
///
/// With `pretty`, booleans are titled (`True`) and enum names are made
/// readable by [`to_readable_enum`]. A signed 64-bit field whose name ends
/// in `_time` is treated as Unix seconds and printed as a UTC timestamp.
/// Floating point values are printed with two decimals. Messages use the
/// protobuf text format.
///
/// The output is meant for people. Do not parse it.
pub fn field_as_str(
    msg: &DynamicMessage,
    path: &str,
    pretty: bool,
) -> Result<(String, ValueKind), FormatError> {
    let fv = get_field(msg, path)?;
    let kind = fv.kind();

    let text = match &fv.value {
        FieldData::Bool(v) => match (pretty, *v) {
            (true, true) => "True".to_string(),
            (true, false) => "False".to_string(),
            (false, v) => v.to_string(),
        },
        FieldData::String(s) => s.clone(),
        FieldData::Bytes(b) => format!("[{}]bytes", b.len()),
        FieldData::I32(v) => v.to_string(),
        FieldData::I64(v) if path.ends_with("_time") => {
            let time = DateTime::from_timestamp(*v, 0).ok_or_else(|| FormatError::Timestamp {
                path: path.to_string(),
                seconds: *v,
            })?;
            time.format("%Y-%m-%d %H:%M:%S +0000 UTC").to_string()
        }
        FieldData::I64(v) => v.to_string(),
        FieldData::U32(v) => v.to_string(),
        FieldData::U64(v) => v.to_string(),
        FieldData::F32(v) => format!("{v:.2}"),
        FieldData::F64(v) => format!("{v:.2}"),
        FieldData::EnumNumber(n) => match &fv.enum_value {
            Some(ev) if pretty => to_readable_enum(ev.name()),
            Some(ev) => ev.name().to_string(),
            None => n.to_string(),
        },
        FieldData::Message(Some(m)) => m.to_text_format(),
        FieldData::Message(None) => String::new(),
        FieldData::List(_) => {
            return Err(FormatError::Unsupported {
                path: path.to_string(),
                kind,
            });
        }
    };
    Ok((text, kind))
}
