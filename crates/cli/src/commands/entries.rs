//! List storage entries command.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use stateprobe_accessor::load_metadata;
use stateprobe_core::{StorageEntryModifier, StorageShape};
use stateprobe_storage::Storage;
use std::path::PathBuf;

#[derive(Args)]
pub struct EntriesArgs {
    /// Directory holding the state store
    #[arg(short, long, default_value = "./data")]
    data_dir: PathBuf,
}

pub fn run(args: EntriesArgs) -> Result<()> {
    let storage = Storage::open(&args.data_dir).with_context(|| "Failed to open storage")?;
    let metadata = load_metadata(&storage)?
        .context("No metadata installed. Use 'stateprobe init' first.")?;

    for pallet in &metadata.pallets {
        println!("{}", pallet.name.bold().cyan());

        for entry in &pallet.entries {
            let shape = match &entry.shape {
                StorageShape::Plain => "plain".to_string(),
                StorageShape::Map { hasher } => format!("map ({:?})", hasher),
                StorageShape::DoubleMap { hasher1, hasher2 } => {
                    format!("double map ({:?}, {:?})", hasher1, hasher2)
                }
            };

            let default = match &entry.modifier {
                StorageEntryModifier::Optional => String::new(),
                StorageEntryModifier::Default(bytes) => {
                    format!(", default 0x{}", hex::encode(bytes))
                }
            };

            println!(
                "  {}  {}",
                entry.name.bright_yellow(),
                format!("{}{}", shape, default).bright_black()
            );
        }
    }

    Ok(())
}
