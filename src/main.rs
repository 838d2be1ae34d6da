//! huffpack command-line interface

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use huffpack::codec;

#[derive(Parser, Debug)]
#[command(name = "huffpack", version, about = "Byte-oriented Huffman file compression", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compress a file into a payload stream and a coding-table stream
    Compress {
        /// File to compress
        input: PathBuf,
        /// Compressed payload output path
        #[arg(long, default_value = codec::DEFAULT_PAYLOAD_NAME)]
        output: PathBuf,
        /// Coding table output path
        #[arg(long, default_value = codec::DEFAULT_TABLE_NAME)]
        table: PathBuf,
        /// Print compression statistics as JSON
        #[arg(long)]
        stats: bool,
    },
    /// Reconstruct the original bytes from a payload and coding table
    Decompress {
        /// Compressed payload stream
        compressed: PathBuf,
        /// Coding table stream
        table: PathBuf,
        /// Where to write the reconstructed bytes
        output: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    match Cli::parse().command {
        Command::Compress {
            input,
            output,
            table,
            stats,
        } => {
            let report = codec::compress(&input, &output, &table)
                .with_context(|| format!("compressing {}", input.display()))?;
            if stats {
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
        }
        Command::Decompress {
            compressed,
            table,
            output,
        } => {
            codec::decompress(&compressed, &table, &output)
                .with_context(|| format!("decompressing {}", compressed.display()))?;
        }
    }
    Ok(())
}
