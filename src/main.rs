use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{self, EnvFilter};

use ethereum_primitives::cli::{decode_to_json, encode_json};
use ethereum_primitives::{client_version, Config};
use ethereum_rlp::{Format, MAX_DEPTH_LIMIT};

#[derive(Parser)]
#[command(name = "ethereum-rlp")]
#[command(about = "Encode and decode Ethereum RLP data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Overrides the configured log level
    #[arg(short, long)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a JSON tree of hex strings and arrays
    Encode {
        /// JSON input, e.g. '["0x636174", []]'
        input: String,

        /// Output format: hex or bytes
        #[arg(short, long)]
        format: Option<Format>,
    },

    /// Decode hex-encoded RLP into JSON
    Decode {
        /// 0x-prefixed RLP bytes
        input: String,

        /// Accept trailing bytes and report how many were consumed
        #[arg(long)]
        partial: bool,

        /// Maximum list nesting
        #[arg(long)]
        max_depth: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    // Initialize logging
    let level = cli.log_level.as_deref().unwrap_or(&config.log.level);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting {}", client_version());

    match cli.command {
        Commands::Encode { input, format } => {
            let format = format.unwrap_or(config.codec.output_format);
            println!("{}", encode_json(&input, format)?);
        }
        Commands::Decode {
            input,
            partial,
            max_depth,
        } => {
            let mut options = config.decode.options();
            options.allow_trailing |= partial;
            if let Some(max_depth) = max_depth {
                anyhow::ensure!(
                    (1..=MAX_DEPTH_LIMIT).contains(&max_depth),
                    "--max-depth must be between 1 and {}",
                    MAX_DEPTH_LIMIT
                );
                options.max_depth = max_depth;
            }
            println!("{}", decode_to_json(&input, &options)?);
        }
    }

    Ok(())
}
