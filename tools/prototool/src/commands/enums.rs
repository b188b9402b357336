use anyhow::Result;
use clap::Args;
use prototools::build_lookups;

use crate::input::{load_pool, message_descriptor};

#[derive(Args)]
pub struct EnumsArgs {
    /// Serialized `google.protobuf.FileDescriptorSet`
    #[arg(short, long)]
    descriptor: std::path::PathBuf,

    /// Root message names, walked in the order given
    #[arg(short, long, required = true)]
    message: Vec<String>,
}

impl EnumsArgs {
    pub fn run(self) -> Result<()> {
        let pool = load_pool(&self.descriptor)?;
        let roots = self
            .message
            .iter()
            .map(|name| message_descriptor(&pool, name))
            .collect::<Result<Vec<_>>>()?;

        let (forward, _) = build_lookups(roots);
        let mut entries: Vec<_> = forward.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        for (spelling, alias) in entries {
            println!("{spelling}\t{}\t{}", alias.enum_name, alias.number);
        }
        Ok(())
    }
}
