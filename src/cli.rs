//! CLI argument definitions using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Component descriptor extractor for JSX/TSX source
#[derive(Parser, Debug)]
#[command(name = "jsx-distill")]
#[command(about = "Extracts a language-neutral descriptor from a JSX/TSX component")]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Tracing filter directive (e.g. `debug`, `jsx_distill=trace`)
    #[arg(long, global = true, env = "JSX_DISTILL_LOG", default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Extract the descriptor of one component file and print it as JSON
    Extract(ExtractArgs),

    /// Answer line-delimited `{"code": ...}` requests on stdin/stdout
    Serve,
}

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Path to a .tsx, .jsx, .ts or .js file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Print single-line JSON
    #[arg(long)]
    pub compact: bool,

    /// Fail when the descriptor has structural issues (no component, empty names)
    #[arg(long)]
    pub strict: bool,

    /// Print the parsed syntax tree to stderr (for debugging)
    #[arg(long)]
    pub print_ast: bool,
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
