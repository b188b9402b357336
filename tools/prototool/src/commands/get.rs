use anyhow::Result;
use clap::Args;
use prototools::field_as_str;

use crate::input::MessageSource;

#[derive(Args)]
pub struct GetArgs {
    #[command(flatten)]
    source: MessageSource,

    /// Dotted field path (e.g. `layer1.supported.vint32`)
    #[arg(short, long)]
    path: String,

    /// Title booleans and make enum names readable
    #[arg(long)]
    pretty: bool,
}

impl GetArgs {
    pub fn run(self) -> Result<()> {
        let msg = self.source.load()?;
        let (text, kind) = field_as_str(&msg, &self.path, self.pretty)?;
        log::debug!("field({}) resolved as {kind}", self.path);
        println!("{text}");
        Ok(())
    }
}
