mod commands;
mod input;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{enums::EnumsArgs, get::GetArgs, set::SetArgs};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "prototool",
    about = "Read and update protobuf message fields by dotted path"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the value of a field
    Get(GetArgs),
    /// Set a field and write the re-encoded message
    Set(SetArgs),
    /// List every spelling of every enum value reachable from messages
    Enums(EnumsArgs),
}

fn main() -> Result<()> {
    // `log` records from the library are forwarded by the tracing-log bridge.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Get(args) => args.run(),
        Commands::Set(args) => args.run(),
        Commands::Enums(args) => args.run(),
    }
}
