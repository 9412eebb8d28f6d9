use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use cellmark_config::Config;
use cellmark_engine::{
    MemoryDocument, RenderOptions, classify, convert_or_plain_with, convert_with,
    outline_to_html, parse_markdown_with, write_blocks,
};
use clap::Parser;
use log::LevelFilter;

mod cli;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .parse_default_env()
        .init();

    let stdout = std::io::stdout();
    run(&cli, &mut stdout.lock())
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    match &cli.command {
        Commands::Classify { input } => {
            let text = read_input(input)?;
            writeln!(out, "{}", classify(&text))?;
        }
        Commands::Tokens { input } => {
            let text = read_input(input)?;
            let options = load_options(cli.config.as_deref())?;
            let tokens = parse_markdown_with(&text, options.indent_width);
            writeln!(out, "{}", serde_json::to_string_pretty(&tokens)?)?;
        }
        Commands::Render {
            input,
            json,
            strict,
        } => {
            let text = read_input(input)?;
            let options = load_options(cli.config.as_deref())?;
            let blocks = if *strict {
                convert_with(&text, &options)
                    .with_context(|| format!("Failed to render {}", input.display()))?
            } else {
                convert_or_plain_with(&text, &options)
            };

            if *json {
                writeln!(out, "{}", serde_json::to_string_pretty(&blocks)?)?;
            } else {
                let mut doc = MemoryDocument::new();
                write_blocks(&blocks, &mut doc, &options);
                writeln!(out, "{doc}")?;
            }
        }
        Commands::Outline { input } => {
            let text = read_input(input)?;
            writeln!(out, "{}", outline_to_html(&text))?;
        }
    }
    Ok(())
}

/// Reads a file, or stdin when the path is `-`.
fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Loads render settings from `--config`, the default config file, or the
/// built-in defaults, in that order.
fn load_options(config_path: Option<&Path>) -> Result<RenderOptions> {
    let config = match config_path {
        Some(path) => {
            let path = Config::expand_path(path).unwrap_or_else(|| path.to_path_buf());
            Config::load_from_path(&path)?
                .with_context(|| format!("Config file not found: {}", path.display()))?
        }
        None => {
            log::debug!("Config path: {}", Config::config_path().display());
            Config::load()?.unwrap_or_default()
        }
    };
    Ok(render_options(&config))
}

fn render_options(config: &Config) -> RenderOptions {
    RenderOptions {
        indent_width: config.render.indent_width,
        indent_with_tabs: config.render.indent_with_tabs,
        code_background: config.render.code_background.clone(),
    }
}
