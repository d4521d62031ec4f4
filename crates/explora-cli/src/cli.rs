use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum, ValueHint};

#[derive(Parser, Debug)]
#[command(name = "explora", author, version, about = "Walk through guided nature explorations", long_about = None)]
pub struct Cli {
    /// Set the logging level (overridden by RUST_LOG)
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: tracing::Level,

    /// Also write JSON logs to daily-rotated files in this directory
    #[arg(long, value_hint = ValueHint::DirPath, global = true)]
    pub log_dir: Option<PathBuf>,

    /// Configuration file (defaults to ~/.explora/config.toml)
    #[arg(long, value_hint = ValueHint::FilePath, global = true)]
    pub config: Option<PathBuf>,

    /// Backend URL, overriding [backend].url
    #[arg(long, global = true, conflicts_with = "pages_file")]
    pub url: Option<String>,

    /// Read pages from a JSON file instead of the backend
    #[arg(long, value_hint = ValueHint::FilePath, global = true)]
    pub pages_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the pages of an exploration in display order
    Pages {
        /// Exploration id (or slug with --slug)
        exploration: String,
        /// Treat the argument as a URL slug
        #[arg(long)]
        slug: bool,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
        format: OutputFormat,
    },
    /// Walk through an exploration page by page
    Walk {
        /// Exploration id (or slug with --slug)
        exploration: String,
        /// Treat the argument as a URL slug
        #[arg(long)]
        slug: bool,
        /// Advance through every page without waiting for input
        #[arg(long)]
        auto: bool,
    },
    /// Configuration helpers
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the configuration file path
    Path,
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Plain,
    Json,
}
