use std::{fs, path::Path};

use anyhow::{Context, Result};
use clap::Args;
use prost_reflect::{DescriptorPool, DynamicMessage, MessageDescriptor};

/// Where the schema and the message come from.
#[derive(Args)]
pub struct MessageSource {
    /// Serialized `google.protobuf.FileDescriptorSet`
    #[arg(short, long)]
    pub descriptor: std::path::PathBuf,

    /// Fully-qualified message name (e.g. `my.package.MyMessage`)
    #[arg(short, long)]
    pub message: String,

    /// Wire-format message to read (an empty message if not specified)
    #[arg(short, long)]
    pub input: Option<std::path::PathBuf>,
}

impl MessageSource {
    pub fn load(&self) -> Result<DynamicMessage> {
        let pool = load_pool(&self.descriptor)?;
        let desc = message_descriptor(&pool, &self.message)?;
        let Some(path) = &self.input else {
            return Ok(DynamicMessage::new(desc));
        };
        let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        DynamicMessage::decode(desc, data.as_slice())
            .with_context(|| format!("decoding {} as {}", path.display(), self.message))
    }
}

pub fn load_pool(path: &Path) -> Result<DescriptorPool> {
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    DescriptorPool::decode(data.as_slice())
        .with_context(|| format!("parsing descriptor set {}", path.display()))
}

pub fn message_descriptor(pool: &DescriptorPool, name: &str) -> Result<MessageDescriptor> {
    pool.get_message_by_name(name)
        .with_context(|| format!("message descriptor not found: '{name}'"))
}
