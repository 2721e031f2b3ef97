//! notify-codec: decode, encode and validate notification descriptors.
//!
//! Textual descriptors come from positional arguments, `--file`, or stdin
//! (one per line). Results go to stdout; logs go to stderr.

use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};

use notiwire_core::CodecConfig;
use notiwire_notify::{
    encode_list, DecodeOptions, Decoder, NotificationDescriptor, NotificationKind,
};

// ── CLI ─────────────────────────────────────────────────────────────

/// Convert notification descriptors between text and API JSON.
#[derive(Parser, Debug)]
#[command(name = "notify-codec", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode textual descriptors into a JSON array of API payloads.
    Decode {
        #[command(flatten)]
        input: InputArgs,

        /// Pretty-print the JSON output.
        #[arg(long)]
        pretty: bool,
    },
    /// Encode a JSON array of API payloads into textual descriptors.
    Encode {
        /// Read the JSON array from this file instead of stdin.
        #[arg(long, short)]
        file: Option<PathBuf>,
    },
    /// Check textual descriptors, stopping at the first invalid one.
    Validate {
        #[command(flatten)]
        input: InputArgs,
    },
    /// List every notification type with its field count.
    Kinds,
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Descriptors such as `Slack,credential,alerts`. Read from --file or
    /// stdin when omitted.
    items: Vec<String>,

    /// Read descriptors from this file, one per line.
    #[arg(long, short)]
    file: Option<PathBuf>,
}

// ── Input ───────────────────────────────────────────────────────────

fn read_source(file: Option<&Path>, stdin: &mut dyn Read) -> anyhow::Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            stdin
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn read_items(
    input: &InputArgs,
    config: &CodecConfig,
    stdin: &mut dyn Read,
) -> anyhow::Result<Vec<String>> {
    if !input.items.is_empty() {
        return Ok(input.items.clone());
    }

    let text = read_source(input.file.as_deref(), stdin)?;
    Ok(text
        .lines()
        .filter(|line| !(config.skip_blank_lines && line.trim().is_empty()))
        .map(str::to_string)
        .collect())
}

fn decode_items(decoder: &Decoder, items: &[String]) -> anyhow::Result<Vec<NotificationDescriptor>> {
    decoder.decode_list(items).map_err(|e| {
        warn!(index = e.index, error = %e.error, "invalid notification");
        anyhow::Error::new(e)
    })
}

// ── Commands ────────────────────────────────────────────────────────

fn run(
    cli: Cli,
    config: &CodecConfig,
    stdin: &mut dyn Read,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let decoder = Decoder::new(DecodeOptions::from(config));

    match cli.command {
        Command::Decode { input, pretty } => {
            let items = read_items(&input, config, stdin)?;
            let descriptors = decode_items(&decoder, &items)?;
            let json = if pretty || config.pretty_json {
                serde_json::to_string_pretty(&descriptors)?
            } else {
                serde_json::to_string(&descriptors)?
            };
            writeln!(out, "{json}")?;
            info!(count = descriptors.len(), "decoded notifications");
        }
        Command::Encode { file } => {
            let text = read_source(file.as_deref(), stdin)?;
            let descriptors: Vec<NotificationDescriptor> =
                serde_json::from_str(&text).context("invalid notification payload JSON")?;
            for line in encode_list(&descriptors) {
                writeln!(out, "{line}")?;
            }
            info!(count = descriptors.len(), "encoded notifications");
        }
        Command::Validate { input } => {
            let items = read_items(&input, config, stdin)?;
            decode_items(&decoder, &items)?;
            for item in &items {
                writeln!(out, "ok {item}")?;
            }
        }
        Command::Kinds => {
            for kind in NotificationKind::ALL {
                writeln!(out, "{kind}\t{}", kind.arity())?;
            }
        }
    }

    Ok(())
}

// ── main ────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    notiwire_core::load_dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = CodecConfig::from_env();
    config.log_summary();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run(cli, &config, &mut stdin.lock(), &mut stdout.lock())
}
