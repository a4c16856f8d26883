//! Metadata-driven lookup command.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use stateprobe_accessor::{dispatch, load_metadata, AccessRequest, StorageAccessor};
use stateprobe_storage::Storage;
use std::path::PathBuf;

#[derive(Args)]
pub struct ReadArgs {
    /// Directory holding the state store
    #[arg(short, long, default_value = "./data")]
    data_dir: PathBuf,

    /// Pallet name
    pallet: String,

    /// Storage entry name
    item: String,

    /// Raw map key, hex encoded (repeat for double maps)
    #[arg(short, long)]
    key: Vec<String>,

    /// Byte offset into the value
    #[arg(long)]
    offset: Option<u32>,

    /// Max bytes to return
    #[arg(long)]
    length: Option<u32>,
}

pub fn run(args: ReadArgs) -> Result<()> {
    let storage = Storage::open(&args.data_dir).with_context(|| "Failed to open storage")?;
    let metadata = load_metadata(&storage)?
        .context("No metadata installed. Use 'stateprobe init' first.")?;

    let keys = args
        .key
        .iter()
        .map(|k| {
            hex::decode(k.trim_start_matches("0x"))
                .with_context(|| format!("Invalid key hex: {}", k))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut request = match keys.as_slice() {
        [] => AccessRequest::plain(args.pallet.as_str(), args.item.as_str()),
        [k1] => AccessRequest::map(args.pallet.as_str(), args.item.as_str(), k1.clone()),
        [k1, k2] => AccessRequest::double_map(
            args.pallet.as_str(),
            args.item.as_str(),
            k1.clone(),
            k2.clone(),
        ),
        more => anyhow::bail!("At most two keys are supported, got {}", more.len()),
    };
    if let Some(offset) = args.offset {
        request = request.with_offset(offset);
    }
    if let Some(length) = args.length {
        request = request.with_len(length);
    }

    let accessor = StorageAccessor::new(&metadata, &storage);
    let result = dispatch(&accessor, &request)?;

    if !result.resolved {
        println!(
            "{}  Lookup did not resolve (unknown pallet/entry or wrong key count)",
            "✗".red().bold()
        );
        return Ok(());
    }
    if !result.found {
        println!("{}  Entry holds no value", "✗".yellow().bold());
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
