//! Dotted-path access into nested messages.
//!
//! A path is a list of field names joined by `.` (`layer1.supported.vint32`).
//! Every segment but the last must name a singular message field. Names are
//! the proto spellings, not the JSON ones.

use std::borrow::Cow;

use prost_reflect::{DynamicMessage, FieldDescriptor, Kind, MessageDescriptor, ReflectMessage, Value};

use crate::{
    CreatePolicy, FieldError,
    dispatch::{lookup_field, resolve_named, set_named, value_kind},
    value::{FieldValue, SetValue},
};

/// Separate `path` at `.`.
pub fn split_path(path: &str) -> Vec<&str> {
    path.split('.').collect()
}

/// The name of the field `path` points at, i.e. its last segment.
pub fn path_field(path: &str) -> &str {
    path.rsplit('.').next().unwrap_or(path)
}

/// Resolve the field at `path` inside `msg`.
///
/// ```ignore
/// let fv = get_field(&msg, "layer1.supported.ev")?;
/// assert_eq!(fv.enum_value.unwrap().name(), "EV_Ok");
/// ```
pub fn get_field(msg: &DynamicMessage, path: &str) -> Result<FieldValue, FieldError> {
    let segments = split_path(path);
    let Some((last, parents)) = segments.split_last() else {
        return Err(FieldError::BadFieldName {
            path: path.to_string(),
        });
    };

    let mut current = msg;
    for (i, segment) in parents.iter().enumerate() {
        let partial = parents[..=i].join(".");
        let fd = match step(current, segment, &partial, CreatePolicy::FailIfAbsent)? {
            Step::Present(fd) => fd,
            Step::Create(..) => {
                return Err(FieldError::IntermediateNotSet { path: partial });
            }
        };
        current = match current.get_field(&fd) {
            Cow::Borrowed(Value::Message(nested)) => nested,
            _ => return Err(FieldError::NotMessage { path: partial }),
        };
    }

    resolve_named(current, last, path)
}

/// Set the field at `path` inside `msg`, failing if an intermediate message
/// is not set.
pub fn update_field(
    msg: &mut DynamicMessage,
    path: &str,
    value: impl Into<SetValue>,
) -> Result<(), FieldError> {
    update_field_with_policy(msg, path, value, CreatePolicy::default())
}

/// Set the field at `path` inside `msg`, handling unset intermediate
/// messages according to `policy`.
///
/// With [`CreatePolicy::CreateMissing`] the intermediates are created even
/// if the final set then fails.
pub fn update_field_with_policy(
    msg: &mut DynamicMessage,
    path: &str,
    value: impl Into<SetValue>,
    policy: CreatePolicy,
) -> Result<(), FieldError> {
    let segments = split_path(path);
    let Some((last, parents)) = segments.split_last() else {
        return Err(FieldError::BadFieldName {
            path: path.to_string(),
        });
    };

    let owner = owner_message_mut(msg, parents, policy)?;
    set_named(owner, last, value.into(), path)
}

fn owner_message_mut<'m>(
    msg: &'m mut DynamicMessage,
    parents: &[&str],
    policy: CreatePolicy,
) -> Result<&'m mut DynamicMessage, FieldError> {
    let mut current = msg;
    for (i, segment) in parents.iter().enumerate() {
        let partial = parents[..=i].join(".");
        let fd = match step(current, segment, &partial, policy)? {
            Step::Present(fd) => fd,
            Step::Create(fd, desc) => {
                log::debug!("creating empty {} at field({partial})", desc.full_name());
                current.set_field(&fd, Value::Message(DynamicMessage::new(desc)));
                fd
            }
        };
        current = match current.get_field_mut(&fd) {
            Value::Message(nested) => nested,
            _ => return Err(FieldError::NotMessage { path: partial }),
        };
    }
    Ok(current)
}

enum Step {
    /// The nested message is set.
    Present(FieldDescriptor),
    /// The nested message is not set and the policy allows creating it.
    Create(FieldDescriptor, MessageDescriptor),
}

/// Check that `segment` names a set, singular message field of `msg`.
///
/// Both reads and updates walk intermediates through here so they agree on
/// every failure case; they only differ in `policy`.
fn step(
    msg: &DynamicMessage,
    segment: &str,
    partial: &str,
    policy: CreatePolicy,
) -> Result<Step, FieldError> {
    log::trace!("descending into field({partial})");
    let fd = lookup_field(&msg.descriptor(), segment, partial)?;
    if fd.is_map() {
        return Err(FieldError::Unsupported {
            path: partial.to_string(),
            detail: "map fields are not supported".to_string(),
        });
    }
    let Kind::Message(desc) = fd.kind() else {
        return Err(FieldError::IntermediateNotMessage {
            path: partial.to_string(),
            kind: value_kind(&fd.kind()),
        });
    };
    if fd.is_list() {
        return Err(FieldError::NotMessage {
            path: partial.to_string(),
        });
    }

    if msg.has_field(&fd) {
        return Ok(Step::Present(fd));
    }
    match policy {
        CreatePolicy::CreateMissing => Ok(Step::Create(fd, desc)),
        CreatePolicy::FailIfAbsent => Err(FieldError::IntermediateNotSet {
            path: partial.to_string(),
        }),
    }
}
