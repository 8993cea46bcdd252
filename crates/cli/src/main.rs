//! XEX loader and 6502 disassembler CLI.
//!
//! This binary exposes the core crate from the command line. It performs:
//! 1. **Segments:** List the segments found in an executable.
//! 2. **Disassembly:** Print the listing (or table, or JSON) for one segment.
//! 3. **Hex view:** Dump a segment's raw bytes.
//! 4. **Prompt:** Print the bounded listing that is handed to an external decompiler.
//! 5. **Stats:** Print coverage and instruction mix for one segment.

use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use xexray_core::config::Config;
use xexray_core::isa::{decode, disasm};
use xexray_core::loader::{self, LoadReport, Segment};
use xexray_core::stats::DisasmStats;

#[derive(Parser, Debug)]
#[command(
    name = "xexray",
    author,
    version,
    about = "Atari XEX segment loader and 6502 disassembler",
    long_about = "Split an Atari 8-bit executable into segments and disassemble them.\n\nExamples:\n  xexray segments game.xex\n  xexray disasm game.xex --segment 1 --bytes\n  xexray prompt game.xex --segment 1 --limit 200"
)]
struct Cli {
    /// JSON configuration file (fallback address, prompt limit, hex width).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the segments found in a binary.
    Segments {
        /// Executable to load.
        file: PathBuf,

        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Disassemble one segment.
    Disasm {
        /// Executable to load.
        file: PathBuf,

        /// Segment index (see `segments`).
        #[arg(short, long, default_value_t = 0)]
        segment: usize,

        /// Show raw instruction bytes in a table.
        #[arg(short, long)]
        bytes: bool,

        /// Emit decoded instructions as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Hex dump one segment.
    Hex {
        /// Executable to load.
        file: PathBuf,

        /// Segment index (see `segments`).
        #[arg(short, long, default_value_t = 0)]
        segment: usize,

        /// Bytes per row (overrides the configuration).
        #[arg(short, long)]
        width: Option<usize>,
    },

    /// Print the bounded listing forwarded to an external decompiler.
    Prompt {
        /// Executable to load.
        file: PathBuf,

        /// Segment index (see `segments`).
        #[arg(short, long, default_value_t = 0)]
        segment: usize,

        /// Maximum instruction lines (overrides the configuration).
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Print listing statistics for one segment.
    Stats {
        /// Executable to load.
        file: PathBuf,

        /// Segment index (see `segments`).
        #[arg(short, long, default_value_t = 0)]
        segment: usize,

        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("[!] {e:#}");
        process::exit(1);
    }
}

/// Dispatches a parsed command line.
fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("loading configuration {}", path.display()))?,
        None => Config::default(),
    };
    debug!(?config, "configuration");

    match cli.command {
        Commands::Segments { file, json } => cmd_segments(&file, &config, json),
        Commands::Disasm {
            file,
            segment,
            bytes,
            json,
        } => cmd_disasm(&file, &config, segment, bytes, json),
        Commands::Hex {
            file,
            segment,
            width,
        } => cmd_hex(&file, &config, segment, width),
        Commands::Prompt {
            file,
            segment,
            limit,
        } => cmd_prompt(&file, &config, segment, limit),
        Commands::Stats {
            file,
            segment,
            json,
        } => cmd_stats(&file, &config, segment, json),
    }
}

/// Loads `file`. Loader advisories reach stderr through the `warn` filter.
fn load(file: &Path, config: &Config) -> Result<LoadReport> {
    let report = loader::load_file(file, &config.loader)?;
    if report.fallback {
        info!(
            address = format!("${:04X}", config.loader.fallback_address),
            "no segment headers; treating file as a raw image"
        );
    }
    Ok(report)
}

/// Loads `file` and returns the segment at `index`.
fn load_segment(file: &Path, config: &Config, index: usize) -> Result<Segment> {
    let report = load(file, config)?;
    Ok(loader::select(&report.segments, index)?.clone())
}

/// Lists every segment with its address range and size.
fn cmd_segments(file: &Path, config: &Config, json: bool) -> Result<()> {
    let report = load(file, config)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report.segments)?);
        return Ok(());
    }
    println!("{}: {} segments found", file.display(), report.segments.len());
    for (index, segment) in report.segments.iter().enumerate() {
        println!("  {}  ({} bytes)", segment.label(index), segment.len());
    }
    Ok(())
}

/// Prints the disassembly of one segment.
fn cmd_disasm(file: &Path, config: &Config, index: usize, bytes: bool, json: bool) -> Result<()> {
    let segment = load_segment(file, config, index)?;
    let instructions = decode(&segment.data, segment.start);
    if json {
        println!("{}", serde_json::to_string_pretty(&instructions)?);
    } else if bytes || config.listing.show_bytes {
        println!("{}", disasm::render_table(&instructions));
    } else {
        println!("{}", disasm::render_listing(&instructions));
    }
    Ok(())
}

/// Prints a hex dump of one segment.
fn cmd_hex(file: &Path, config: &Config, index: usize, width: Option<usize>) -> Result<()> {
    let segment = load_segment(file, config, index)?;
    let width = width.unwrap_or(config.listing.hex_width);
    println!("{}", disasm::hex_dump(&segment.data, segment.start, width));
    Ok(())
}

/// Prints the prompt listing for one segment.
fn cmd_prompt(file: &Path, config: &Config, index: usize, limit: Option<usize>) -> Result<()> {
    let segment = load_segment(file, config, index)?;
    let instructions = decode(&segment.data, segment.start);
    let limit = limit.unwrap_or(config.listing.prompt_limit);
    println!("{}", disasm::render_prompt(&instructions, limit));
    Ok(())
}

/// Prints statistics for one segment.
fn cmd_stats(file: &Path, config: &Config, index: usize, json: bool) -> Result<()> {
    let segment = load_segment(file, config, index)?;
    let stats = DisasmStats::from_instructions(&decode(&segment.data, segment.start));
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("{}", segment.label(index));
        stats.print();
    }
    Ok(())
}
