//! cdoc: extract `/** ... */` function documentation from C sources.
//!
//! Reads one C file and prints a LaTeX fragment per documented function:
//!
//! ```text
//! cdoc BP.c > functions.tex
//! cdoc --defines --lang en -f markdown BP.c
//! ```
//!
//! Only functions returning `void`, `int` or `double` (optionally `*`) whose
//! declaration starts on the line right after the closing `*/` are picked up,
//! with exactly one space between the return type and the name.

mod logger;
mod model;
mod parser;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Parser)]
#[command(
    name = "cdoc",
    about = "Generate LaTeX documentation fragments from C doc comments"
)]
struct Cli {
    /// C source file. If omitted, prints a usage line and exits.
    file: Option<PathBuf>,

    /// Everything after FILE that is not a known flag is accepted and ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    ignored: Vec<String>,

    /// Output format: latex (default), markdown, json
    #[arg(short = 'f', long, default_value = "latex")]
    format: String,

    /// Language of the fixed sub-headings: ja (default), en
    #[arg(long, default_value = "ja")]
    lang: String,

    /// Also document `#define NAME value /* doc */` constants
    #[arg(long)]
    defines: bool,

    /// Debug logging on stderr
    #[arg(short = 'v', long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short = 'q', long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose, cli.quiet);

    let Some(path) = cli.file.as_deref() else {
        println!("usage: {} [FILE]", program_name());
        return Ok(());
    };

    if !cli.ignored.is_empty() {
        debug!(args = ?cli.ignored, "ignoring extra arguments");
    }

    let labels = render::Labels::for_lang(&cli.lang)?;
    let renderer = render::create_renderer(&cli.format, labels)?;

    let source = read_source(path)?;
    let doc = parser::parse(&source, cli.defines);
    info!(
        file = %path.display(),
        functions = doc.functions.len(),
        constants = doc.constants.len(),
        "extracted documentation"
    );

    print!("{}", renderer.render(&doc));
    Ok(())
}

/// Name the binary was invoked as, for the usage line.
fn program_name() -> String {
    std::env::args().next().unwrap_or_else(|| "cdoc".to_string())
}

/// Read the whole file, with `\r\n` and lone `\r` turned into `\n`.
fn read_source(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(normalize_newlines(content))
}

fn normalize_newlines(content: String) -> String {
    if content.contains('\r') {
        content.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        content
    }
}
