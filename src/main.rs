//! termlink - FAQ page generator with automatic term-to-hyperlink annotation.

#![allow(dead_code)]

mod annotate;
mod cli;
mod config;
mod content;
mod core;
mod generator;
mod logger;
mod render;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(cli)?;

    match &cli.command {
        Commands::Init { dry, .. } => cli::init::new_project(&config, *dry),
        Commands::Build { .. } => generator::build_site(&config),
        Commands::Check { args } => cli::check::check_site(args, &config),
        Commands::Query { args } => cli::query::run_query(args, &config),
    }
}
