//! Reflection helpers for protobuf messages built on `prost-reflect`.
//!
//! This crate reads and writes fields deep inside a [`DynamicMessage`]
//! through dotted paths ([`get_field`], [`update_field`]) rather than
//! generated accessors, and builds name lookup tables for every enum
//! reachable from a set of message types ([`build_lookups`]).
//!
//! Field and enum names are expected to follow the protobuf style guide:
//! fields are `lower_snake_case`, enum values carry a leading word for
//! uniqueness (`EV_NOT_OK`). The [`naming`] module converts between the
//! proto, JSON and readable spellings.
//!
//! Map fields, extensions and repeated groups are not supported and are
//! reported as errors.
//!
//! [`DynamicMessage`]: prost_reflect::DynamicMessage

mod dispatch;
mod enums;
mod error;
mod format;
pub mod naming;
mod path;
mod policy;
mod value;

pub use dispatch::{resolve_field, set_field};
pub use enums::{EnumAlias, ForwardLookup, ReverseLookup, build_lookups, enum_lookup_for_messages};
pub use error::{FieldError, FormatError};
pub use format::field_as_str;
pub use path::{get_field, path_field, split_path, update_field, update_field_with_policy};
pub use policy::CreatePolicy;
pub use value::{FieldData, FieldValue, ListData, SetValue, ValueKind};
