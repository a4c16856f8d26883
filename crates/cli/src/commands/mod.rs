//! CLI commands module.

use anyhow::Result;
use clap::Subcommand;

mod entries;
mod init;
mod raw;
mod read;

#[derive(Subcommand)]
pub enum Commands {
    /// Install runtime metadata into a store
    Init(init::InitArgs),
    /// List the pallets and storage entries a store knows about
    Entries(entries::EntriesArgs),
    /// Read a storage entry through its metadata
    Read(read::ReadArgs),
    /// Read an arbitrary raw storage key
    Raw(raw::RawArgs),
}

pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Init(args) => init::run(args),
        Commands::Entries(args) => entries::run(args),
        Commands::Read(args) => read::run(args),
        Commands::Raw(args) => raw::run(args),
    }
}
