//! Install runtime metadata command.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use stateprobe_accessor::{encode_metadata, METADATA_KEY};
use stateprobe_core::RuntimeMetadata;
use stateprobe_storage::Storage;
use std::fs;
use std::path::PathBuf;

#[derive(Args)]
pub struct InitArgs {
    /// Directory holding the state store
    #[arg(short, long, default_value = "./data")]
    data_dir: PathBuf,

    /// Runtime metadata JSON file
    #[arg(short, long)]
    metadata: PathBuf,
}

pub fn run(args: InitArgs) -> Result<()> {
    println!("{}", "Installing runtime metadata...".bold().cyan());
    println!();

    let contents = fs::read_to_string(&args.metadata)
        .with_context(|| format!("Failed to read metadata file: {:?}", args.metadata))?;
    let metadata: RuntimeMetadata = serde_json::from_str(&contents)
        .with_context(|| format!("Invalid metadata JSON: {:?}", args.metadata))?;

    fs::create_dir_all(&args.data_dir)
        .with_context(|| format!("Failed to create data directory: {:?}", args.data_dir))?;
    let storage = Storage::open(&args.data_dir).with_context(|| "Failed to open storage")?;

    let blob = encode_metadata(&metadata)?;
    storage.insert(METADATA_KEY, &blob)?;
    storage.flush()?;

    let entries: usize = metadata.pallets.iter().map(|p| p.entries.len()).sum();
    println!(
        "{}  Installed metadata for {} pallets ({} storage entries)",
        "✓".green().bold(),
        metadata.pallets.len().to_string().bright_cyan(),
        entries.to_string().bright_cyan()
    );
    println!();
    println!(
        "Use {} to list them, {} to look values up.",
        "stateprobe entries".bright_cyan(),
        "stateprobe read".bright_cyan()
    );

    Ok(())
}
