//! pg-epoch CLI - inspect 8-byte epoch timestamps
//!
//! Encodes timestamps into big-endian microsecond offsets from
//! 2000-01-01 00:00:00 UTC and decodes them back, printing each step.

use std::process::ExitCode;

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt};

use pg_epoch::{EncodedBuffer, EpochEncoder, OverflowPolicy, UtcTimestamp, decode_offset};

/// Overflow handling for offsets beyond 64 bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Overflow {
    Wrap,
    Saturate,
    Error,
}

impl From<Overflow> for OverflowPolicy {
    fn from(o: Overflow) -> Self {
        match o {
            Overflow::Wrap => OverflowPolicy::Wrap,
            Overflow::Saturate => OverflowPolicy::Saturate,
            Overflow::Error => OverflowPolicy::Error,
        }
    }
}

/// pg-epoch - binary timestamps relative to 2000-01-01 UTC
#[derive(Parser, Debug)]
#[command(name = "pg-epoch")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// What to do when the offset does not fit into 64 bits
    #[arg(long, value_enum, default_value_t = Overflow::Error, global = true)]
    overflow: Overflow,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode a `YYYY-MM-DD HH:MM:SS` timestamp (read as UTC)
    Encode { text: String },

    /// Encode a raw Unix instant, which may lie beyond the calendar range
    Unix {
        #[arg(allow_hyphen_values = true)]
        seconds: i64,

        #[arg(long, default_value_t = 0)]
        nanos: u32,
    },

    /// Encode the current time
    Now,

    /// Decode 16 hex digits back into a timestamp
    Decode { hex: String },
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Set up logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let enc = EpochEncoder::with_policy(args.overflow.into());
    tracing::debug!("Epoch {}, overflow policy {:?}", enc.epoch(), enc.policy());

    match args.command {
        Command::Encode { text } => {
            let buf = enc.encode_str(&text)?;
            print_timestamp(&enc, &buf)
        }
        Command::Unix { seconds, nanos } => {
            match DateTime::from_timestamp(seconds, nanos) {
                Some(ts) => print_input(&ts),
                None => tracing::info!("Unix instant {seconds}s {nanos}ns is beyond calendar range"),
            }
            let buf = enc.encode_unix(seconds, nanos)?;
            print_buffer(&buf)
        }
        Command::Now => {
            let buf = enc.encode_now(&UtcTimestamp)?;
            print_timestamp(&enc, &buf)
        }
        Command::Decode { hex } => {
            let bytes = hex::decode(hex.trim()).context("Invalid hex input")?;
            let offset = decode_offset(&bytes)?;
            println!("offset (microseconds): {offset}");
            let ts = enc.decode(&bytes)?;
            println!("timestamp: {ts}");
            Ok(())
        }
    }
}

fn print_timestamp(enc: &EpochEncoder, buf: &EncodedBuffer) -> anyhow::Result<()> {
    let ts = enc.decode(buf)?;
    print_input(&ts);
    print_buffer(buf)
}

fn print_input(ts: &DateTime<Utc>) {
    let text = ts.to_string();
    println!("timestamp: {text}");
    println!("text bytes: {:?}", text.as_bytes());
}

fn print_buffer(buf: &EncodedBuffer) -> anyhow::Result<()> {
    println!("offset (microseconds): {}", decode_offset(buf)?);
    println!("binary: {buf:?}");
    println!("hex: {}", hex::encode(buf));
    Ok(())
}
