//! stateprobe CLI entry point.

use clap::Parser;

mod commands;

#[derive(Parser)]
#[command(name = "stateprobe")]
#[command(about = "Metadata-driven runtime storage reader", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<commands::Commands>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(cmd) => {
            if let Err(e) = commands::run(cmd) {
                eprintln!("Error: {:#}", e);
                std::process::exit(1);
            }
        }
        None => {
            println!("stateprobe - metadata-driven runtime storage reader");
            println!("Run 'stateprobe --help' for usage information.");
        }
    }
}
