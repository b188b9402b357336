//! Name lookup tables for every enum reachable from a set of messages.

use std::{
    borrow::Borrow,
    collections::{HashMap, HashSet},
};

use prost_reflect::{DynamicMessage, EnumDescriptor, Kind, MessageDescriptor, ReflectMessage};

use crate::naming::{to_json_name, to_readable_enum};

/// The spellings of a single enum value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnumAlias {
    /// Short name of the enum type the value belongs to (`EnumValues`).
    pub enum_name: String,
    pub number: i32,
    /// Name as declared in the `.proto` file (`EV_Not_Ok`).
    pub proto_name: String,
    /// JSON form of the name (`evNotOk`).
    pub json_name: String,
    /// Leading word removed, remaining words titled (`Not Ok`). Not
    /// generated for values whose last word is `unknown`, since every enum
    /// tends to have one and they would all collide.
    pub title_name: Option<String>,
}

impl EnumAlias {
    pub fn new(enum_name: &str, proto_name: &str, number: i32) -> Self {
        Self {
            enum_name: enum_name.to_string(),
            number,
            proto_name: proto_name.to_string(),
            json_name: to_json_name(proto_name),
            title_name: (!ends_with_unknown(proto_name)).then(|| to_readable_enum(proto_name)),
        }
    }
}

fn ends_with_unknown(name: &str) -> bool {
    name.rsplit('_')
        .next()
        .is_some_and(|word| word.eq_ignore_ascii_case("unknown"))
}

/// Maps every spelling of an enum value to its [`EnumAlias`].
///
/// If two values share a proto name, the first one registered keeps it and
/// the second is dropped from this table with all its spellings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForwardLookup(HashMap<String, EnumAlias>);

impl ForwardLookup {
    pub fn find(&self, name: &str) -> Option<&EnumAlias> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &EnumAlias)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    fn register(&mut self, alias: &EnumAlias) {
        if let Some(existing) = self.0.get(&alias.proto_name) {
            log::debug!(
                "dropping {}.{}: name already registered by {}",
                alias.enum_name,
                alias.proto_name,
                existing.enum_name
            );
            return;
        }
        self.0.insert(alias.proto_name.clone(), alias.clone());
        self.0.insert(alias.json_name.clone(), alias.clone());
        if let Some(title) = &alias.title_name {
            self.0.insert(title.clone(), alias.clone());
        }
    }
}

/// Maps an enum type's short name and a number to the [`EnumAlias`] of that
/// value.
///
/// Every value walked is registered here, including values that a proto
/// name collision dropped from the [`ForwardLookup`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReverseLookup(HashMap<String, HashMap<i32, EnumAlias>>);

impl ReverseLookup {
    pub fn find(&self, enum_name: &str, number: i32) -> Option<&EnumAlias> {
        self.0.get(enum_name)?.get(&number)
    }

    /// All values registered for one enum type.
    pub fn values(&self, enum_name: &str) -> Option<&HashMap<i32, EnumAlias>> {
        self.0.get(enum_name)
    }

    /// Number of enum types in the table.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn register(&mut self, alias: EnumAlias) {
        self.0
            .entry(alias.enum_name.clone())
            .or_default()
            .insert(alias.number, alias);
    }
}

/// Build forward and reverse lookups for the enums used by `roots` or any
/// message type reachable from them.
///
/// Fields are walked in declaration order and roots in the order given. That
/// order decides which value wins when proto names collide across enum types.
/// Only the schema is walked, so unset nested messages are included.
pub fn build_lookups<I>(roots: I) -> (ForwardLookup, ReverseLookup)
where
    I: IntoIterator,
    I::Item: Borrow<MessageDescriptor>,
{
    let mut walk = EnumWalk::default();
    for root in roots {
        walk.visit_message(root.borrow());
    }
    (walk.forward, walk.reverse)
}

/// [`build_lookups`] over the types of message instances.
pub fn enum_lookup_for_messages(msgs: &[DynamicMessage]) -> (ForwardLookup, ReverseLookup) {
    build_lookups(msgs.iter().map(|msg| msg.descriptor()))
}

#[derive(Default)]
struct EnumWalk {
    messages_seen: HashSet<String>,
    enums_seen: HashSet<String>,
    forward: ForwardLookup,
    reverse: ReverseLookup,
}

impl EnumWalk {
    fn visit_message(&mut self, desc: &MessageDescriptor) {
        if !self.messages_seen.insert(desc.full_name().to_string()) {
            return;
        }
        for field in desc.fields() {
            match field.kind() {
                Kind::Enum(enum_desc) => self.visit_enum(&enum_desc),
                Kind::Message(nested) => self.visit_message(&nested),
                _ => {}
            }
        }
    }

    fn visit_enum(&mut self, desc: &EnumDescriptor) {
        if !self.enums_seen.insert(desc.full_name().to_string()) {
            return;
        }
        for value in desc.values() {
            let alias = EnumAlias::new(desc.name(), value.name(), value.number());
            log::trace!("registering {}.{} = {}", alias.enum_name, alias.proto_name, alias.number);
            self.forward.register(&alias);
            self.reverse.register(alias);
        }
    }
}
