//! Command-line interface for glossary2rst.

use std::path::PathBuf;

use clap::Parser;
use console::style;

use crate::config::DEFAULT_INPUT_PATH;
use crate::converter::{GlossaryConverter, ParseMode};
use crate::error::Result;
use crate::output::write_output;

/// Convert a DocBook glossary to a reStructuredText glossary.
#[derive(Debug, Parser)]
#[command(name = "glossary2rst")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output file (default: print to standard output)
    pub output: Option<PathBuf>,

    /// DocBook glossary to convert
    #[arg(short, long, default_value = DEFAULT_INPUT_PATH)]
    pub input: PathBuf,

    /// Fail on malformed XML instead of printing a warning
    #[arg(long)]
    pub strict: bool,
}

impl Cli {
    /// Treatment of malformed XML selected on the command line.
    #[must_use]
    pub fn parse_mode(&self) -> ParseMode {
        if self.strict {
            ParseMode::Strict
        } else {
            ParseMode::Lenient
        }
    }
}

/// Run the CLI.
pub fn run() -> Result<()> {
    execute(&Cli::parse())
}

/// Convert the input and write the result as selected by `cli`.
///
/// Nothing is written when conversion fails. Warnings go to stderr
/// regardless of the log filter.
pub fn execute(cli: &Cli) -> Result<()> {
    let rendered = GlossaryConverter::new().render_file(&cli.input, cli.parse_mode())?;

    for warning in &rendered.warnings {
        eprintln!("{} {warning}", style("Warning:").yellow().bold());
    }

    write_output(&rendered.content, cli.output.as_deref())?;

    if let Some(path) = &cli.output {
        eprintln!("{} {}", style("Saved to:").green().bold(), path.display());
    }

    Ok(())
}
