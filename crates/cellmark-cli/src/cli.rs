use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command line interface for cellmark
#[derive(Parser, Debug)]
#[command(author, version, about = "Convert spreadsheet cell text into rich document blocks")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a config file, instead of ~/.config/cellmark/config.toml
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print how the cell text is classified: markdown, html or plain
    Classify {
        /// Input file, or `-` for stdin
        #[arg(default_value = "-")]
        input: PathBuf,
    },

    /// Print the Markdown block tokens as JSON
    Tokens {
        /// Input file, or `-` for stdin
        #[arg(default_value = "-")]
        input: PathBuf,
    },

    /// Render the cell and print the written document
    Render {
        /// Input file, or `-` for stdin
        #[arg(default_value = "-")]
        input: PathBuf,

        /// Print the rich blocks as JSON instead of the document dump
        #[arg(long)]
        json: bool,

        /// Fail on malformed HTML instead of rendering it as plain text
        #[arg(long)]
        strict: bool,
    },

    /// Rewrite a dash-prefixed outline as an HTML list
    Outline {
        /// Input file, or `-` for stdin
        #[arg(default_value = "-")]
        input: PathBuf,
    },
}
