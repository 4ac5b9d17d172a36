//! CLI argument definitions for the rule review admin tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "featws-admin",
    version,
    about = "FeatWS rule review - browse rule sheets and their review queue",
    long_about = "Browse FeatWS rule sheets, filter their rules by code, author and\n\
                  status, and inspect the deferral queue.\n\n\
                  Data comes from the fixture backend until the rules API is wired up."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List all rule sheets.
    Sheets(SheetsArgs),

    /// Show one sheet's rules, with optional filters and selection.
    Rules(RulesArgs),
}

#[derive(Parser)]
pub struct SheetsArgs {
    /// Simulated backend latency in milliseconds.
    #[arg(long = "delay-ms", default_value_t = 0)]
    pub delay_ms: u64,
}

#[derive(Parser)]
pub struct RulesArgs {
    /// Identifier of the rule sheet to load.
    #[arg(value_name = "SHEET_ID")]
    pub sheet_id: String,

    /// Keep only the rule with this code (exact match).
    #[arg(long = "code", value_name = "CODE")]
    pub code: Option<String>,

    /// Keep only rules by this author (exact match).
    #[arg(long = "author", value_name = "AUTHOR")]
    pub author: Option<String>,

    /// Keep only rules with this status label (exact match,
    /// e.g. "Deferida", "Aguardando deferimento", "Rascunho").
    #[arg(long = "status", value_name = "STATUS")]
    pub status: Option<String>,

    /// Rows per page (one of 5, 10, 25, 50, 100).
    #[arg(long = "page-size", default_value_t = 10)]
    pub page_size: usize,

    /// Zero-based page to display.
    #[arg(long = "page", default_value_t = 0)]
    pub page: usize,

    /// Select these rule codes, as the deferral view's checkboxes would.
    #[arg(long = "select", value_name = "CODE")]
    pub select: Vec<String>,

    /// Retrieval timeout in seconds.
    #[arg(long = "timeout-secs", default_value_t = 10)]
    pub timeout_secs: u64,

    /// Simulated backend latency in milliseconds.
    #[arg(long = "delay-ms", default_value_t = 0)]
    pub delay_ms: u64,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
