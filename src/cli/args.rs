//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// termlink FAQ page generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Content directory path (relative to project root)
    #[arg(long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub content: Option<PathBuf>,

    /// Output directory path (relative to project root)
    #[arg(long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Config file path (default: termlink.toml)
    #[arg(short = 'C', long, global = true, default_value = "termlink.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Initialize a new project from template
    #[command(visible_alias = "i")]
    Init {
        /// Project directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the config template instead of writing files
        #[arg(long)]
        dry: bool,
    },

    /// Build the FAQ pages
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Check entries for broken trigger links
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        args: CheckArgs,
    },

    /// Query entry metadata as JSON
    #[command(visible_alias = "q")]
    Query {
        #[command(flatten)]
        args: QueryArgs,
    },
}

/// Build command arguments
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Clean output directory completely before building
    #[arg(long)]
    pub clean: bool,

    /// Include draft entries
    #[arg(short = 'D', long)]
    pub drafts: bool,

    /// Enable sitemap generation
    #[arg(short = 'S', long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub sitemap: Option<bool>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// Check command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    /// Validate link target URLs
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub urls: Option<bool>,

    /// Warn on trigger phrases that never match their answer text
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub phrases: Option<bool>,

    /// Treat check failures as warnings instead of errors
    #[arg(long, short = 'w')]
    pub warn_only: bool,
}

/// Query command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct QueryArgs {
    /// Include draft entries in results
    #[arg(short, long)]
    pub drafts: bool,

    /// Include annotated segments for each entry
    #[arg(short, long)]
    pub segments: bool,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub out: Option<PathBuf>,
}

#[allow(unused)]
impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
    pub const fn is_build(&self) -> bool {
        matches!(self.command, Commands::Build { .. })
    }
    pub const fn is_check(&self) -> bool {
        matches!(self.command, Commands::Check { .. })
    }
    pub const fn is_query(&self) -> bool {
        matches!(self.command, Commands::Query { .. })
    }
}
