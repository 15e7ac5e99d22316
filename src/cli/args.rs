//! CLI argument parsing using clap.
//!
//! Contains the Cli struct and the Commands enum.

use clap::{
    Parser, Subcommand,
    builder::styling::{AnsiColor, Effects, Styles},
};
use std::path::PathBuf;

use crate::config::OutputFormat;

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Emacs lookup index generator for Java API documentation
#[derive(Parser)]
#[command(
    name = "javadoc-index",
    version = env!("CARGO_PKG_VERSION"),
    about = "Build an Emacs javadoc-lookup index from API documentation",
    long_about = "Scan index-all.html pages of generated API documentation and print an \
                  index that the Emacs function javadoc-lookup can load.\n\n\
                  With no command, the files listed in ~/.javadoc-index-files are indexed.",
    after_help = "Examples:\n  javadoc-index > ~/.javadoc-index.el\n  javadoc-index index /opt/jdk/docs/api/index-all.html\n  javadoc-index index --list docs.txt --format json -o index.json",
    next_line_help = true,
    styles = clap_cargo_style()
)]
pub struct Cli {
    /// Path to custom settings.toml file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Index API documentation files
    #[command(about = "Scan index pages and print the lookup index")]
    Index {
        /// Index pages to scan, used verbatim (overrides the list file)
        #[arg(value_name = "FILE")]
        files: Vec<PathBuf>,

        /// File listing the index pages, one per line (wildcards allowed)
        #[arg(short, long, value_name = "LIST", conflicts_with = "files")]
        list: Option<PathBuf>,

        /// Write the index to a file instead of stdout
        #[arg(short, long, value_name = "OUT")]
        output: Option<PathBuf>,

        /// Output format (overrides settings.toml)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Write a default settings file
    #[command(about = "Create settings.toml with default values")]
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Show current configuration settings
    #[command(about = "Display active settings")]
    Config,
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Index {
            files: Vec::new(),
            list: None,
            output: None,
            format: None,
        }
    }
}
