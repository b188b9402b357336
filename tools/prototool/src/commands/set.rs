use std::{
    fs,
    io::{self, Write as _},
    path::PathBuf,
    str::FromStr,
};

use anyhow::{Context, Result, bail};
use clap::{Args, ValueEnum};
use prost::Message as _;
use prost_reflect::ReflectMessage;
use prototools::{CreatePolicy, SetValue, build_lookups, update_field_with_policy};

use crate::input::MessageSource;

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum ValueType {
    String,
    Int32,
    Int64,
    Bool,
    Enum,
}

#[derive(Args)]
pub struct SetArgs {
    #[command(flatten)]
    source: MessageSource,

    /// Dotted field path (e.g. `layer1.supported.vint32`)
    #[arg(short, long)]
    path: String,

    /// New value of the field
    #[arg(long)]
    value: String,

    /// How to interpret --value
    #[arg(short, long, value_enum, default_value_t = ValueType::String)]
    kind: ValueType,

    /// Unset intermediate messages: fail | create
    #[arg(long, value_parser = parse_create_policy, default_value = "fail")]
    intermediates: CreatePolicy,

    /// Output file path (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl SetArgs {
    pub fn run(self) -> Result<()> {
        let mut msg = self.source.load()?;
        let value = self.parse_value(&msg)?;
        update_field_with_policy(&mut msg, &self.path, value, self.intermediates)?;

        let data = msg.encode_to_vec();
        match self.output {
            Some(path) => {
                fs::write(&path, &data).with_context(|| format!("writing {}", path.display()))?
            }
            None => io::stdout().write_all(&data)?,
        }
        Ok(())
    }

    fn parse_value(&self, msg: &prost_reflect::DynamicMessage) -> Result<SetValue> {
        let raw = self.value.as_str();
        let value = match self.kind {
            ValueType::String => SetValue::from(raw),
            ValueType::Int32 => SetValue::Int32(raw.parse()?),
            ValueType::Int64 => SetValue::Int64(raw.parse()?),
            ValueType::Bool => SetValue::Bool(raw.parse()?),
            ValueType::Enum => match raw.parse::<i32>() {
                Ok(n) => SetValue::Int32(n),
                Err(_) => {
                    // Any spelling of any enum value reachable from the message.
                    let (forward, _) = build_lookups([msg.descriptor()]);
                    let Some(alias) = forward.find(raw) else {
                        bail!("'{raw}' is not a known enum value name");
                    };
                    log::debug!("enum name '{raw}' is {}.{}", alias.enum_name, alias.proto_name);
                    SetValue::Int32(alias.number)
                }
            },
        };
        Ok(value)
    }
}

fn parse_create_policy(raw: &str) -> Result<CreatePolicy, String> {
    CreatePolicy::from_str(raw)
}
