//! Command line arguments

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use santali_translator_core::LookupDirection;

/// Dictionary-driven Hindi ↔ Santali (Ol Chiki) translator
#[derive(Parser, Debug, Clone)]
#[command(name = "santali-translator")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct CliArgs {
    /// Directory holding `default.toml` and per-environment overrides
    #[arg(long, default_value = "config", global = true)]
    pub config_dir: PathBuf,

    /// Configuration profile layered over the defaults
    #[arg(long = "env", env = "SANTALI_TRANSLATOR_ENV", global = true)]
    pub profile: Option<String>,

    /// Dictionary CSV, overriding the configured path
    #[arg(short, long, global = true)]
    pub dictionary: Option<PathBuf>,

    /// Skip the curated override tables
    #[arg(long, global = true)]
    pub no_curated: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Translate one text
    Translate(TranslateArgs),

    /// Translate every line of a file
    Batch(BatchArgs),

    /// Exact dictionary lookup
    Lookup(LookupArgs),

    /// Substring search over dictionary keys
    Search(SearchArgs),

    /// Hindi entries starting with a prefix
    Prefix(PrefixArgs),

    /// Dictionary load statistics
    Stats,

    /// Supported languages and pairs
    Languages,

    /// Write the loaded dictionary to a CSV file
    Export(ExportArgs),

    /// Spell Ol Chiki text phonetically in Latin letters
    Pronounce(PronounceArgs),
}

#[derive(Args, Debug, Clone)]
pub struct TranslateArgs {
    pub text: String,

    /// Source language code or name
    #[arg(short, long, default_value = "hi")]
    pub from: String,

    /// Target language code or name
    #[arg(short, long, default_value = "sat")]
    pub to: String,
}

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    /// File with one text per line; blank lines are skipped
    pub input: PathBuf,

    #[arg(short, long, default_value = "hi")]
    pub from: String,

    #[arg(short, long, default_value = "sat")]
    pub to: String,
}

#[derive(Args, Debug, Clone)]
pub struct LookupArgs {
    pub word: String,

    #[arg(long, value_enum, default_value_t = Direction::HiSat)]
    pub direction: Direction,
}

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    pub query: String,

    #[arg(long, value_enum, default_value_t = Direction::HiSat)]
    pub direction: Direction,
}

#[derive(Args, Debug, Clone)]
pub struct PrefixArgs {
    pub prefix: String,

    /// Maximum number of entries
    #[arg(short, long, default_value_t = 20)]
    pub limit: usize,
}

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    pub output: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct PronounceArgs {
    pub text: String,
}

/// Lookup direction as spelled on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    HiSat,
    SatHi,
}

impl From<Direction> for LookupDirection {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::HiSat => LookupDirection::HindiToSantali,
            Direction::SatHi => LookupDirection::SantaliToHindi,
        }
    }
}
