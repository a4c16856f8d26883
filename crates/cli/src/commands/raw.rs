//! Raw-key lookup command.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use stateprobe_accessor::read_raw;
use stateprobe_core::ReadWindow;
use stateprobe_storage::Storage;
use std::path::PathBuf;

#[derive(Args)]
pub struct RawArgs {
    /// Directory holding the state store
    #[arg(short, long, default_value = "./data")]
    data_dir: PathBuf,

    /// Full storage key, hex encoded
    key: String,

    /// Byte offset into the value
    #[arg(long)]
    offset: Option<u32>,

    /// Max bytes to return
    #[arg(long)]
    length: Option<u32>,
}

pub fn run(args: RawArgs) -> Result<()> {
    let storage = Storage::open(&args.data_dir).with_context(|| "Failed to open storage")?;

    let key = hex::decode(args.key.trim_start_matches("0x"))
        .with_context(|| format!("Invalid key hex: {}", args.key))?;

    let window = ReadWindow::new(args.offset.unwrap_or(0), args.length);
    let result = read_raw(&storage, &key, window)?;

    if !result.found {
        println!("{}  Key not found in state", "✗".yellow().bold());
        return Ok(());
    }

    println!(
        "{}  Found {} bytes",
        "✓".green().bold(),
        result.data.len().to_string().bright_cyan()
    );
    println!("  0x{}", hex::encode(&result.data).bright_yellow());

    Ok(())
}
