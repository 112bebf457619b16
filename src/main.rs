//! doxdoc — extract API documentation from Doxygen-generated XML.
//!
//! Reads a compound-definition XML file (or stdin) and emits the documented
//! functions, macros, enum values, and typedefs as a plain-text listing or
//! as a JSON object keyed by symbol name.

mod model;
mod parser;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "doxdoc",
    about = "Extract API documentation from Doxygen XML"
)]
struct Cli {
    /// Input Doxygen XML file. If omitted, reads from stdin.
    file: Option<PathBuf>,

    /// Output format: text (default), json
    #[arg(short = 'f', long, default_value = "text")]
    format: String,

    /// Write output to a file instead of stdout
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let input = match &cli.file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    let symbols = parser::parse(&input)?;
    let renderer = render::create_renderer(&cli.format)?;
    let rendered = renderer.render(&symbols)?;

    match &cli.output {
        Some(path) => fs::write(path, &rendered)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{rendered}"),
    }

    Ok(())
}
