//! Command-line interface for the template reader.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;

use crate::config::DEFAULT_MAX_INPUT_SIZE;
use crate::error::Result;
use crate::loader::load_issue;
use crate::output::{render, OutputFormat};

/// RegelRecht Template - Read budget/report templates into a content model.
#[derive(Parser)]
#[command(name = "regelrecht-template")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the content model of a template.
    Show {
        /// Path to the template file
        path: PathBuf,

        /// Output format: yaml or json
        #[arg(short, long, default_value = "yaml", value_parser = OutputFormat::parse)]
        format: OutputFormat,

        /// Maximum input size in bytes
        #[arg(long, default_value_t = DEFAULT_MAX_INPUT_SIZE)]
        max_size: u64,
    },

    /// Print metadata and per-article counts of a template.
    Summary {
        /// Path to the template file
        path: PathBuf,

        /// Maximum input size in bytes
        #[arg(long, default_value_t = DEFAULT_MAX_INPUT_SIZE)]
        max_size: u64,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Show {
            path,
            format,
            max_size,
        } => show_command(&path, format, max_size),
        Commands::Summary { path, max_size } => summary_command(&path, max_size),
    }
}

/// Execute the show command.
fn show_command(path: &Path, format: OutputFormat, max_size: u64) -> Result<()> {
    let issue = load_issue(path, max_size)?;
    print!("{}", render(&issue, format)?);
    Ok(())
}

/// Execute the summary command.
fn summary_command(path: &Path, max_size: u64) -> Result<()> {
    let issue = load_issue(path, max_size)?;
    let unset = || style("-").dim().to_string();

    println!("{} {}", style("Template").bold(), style(path.display()).cyan());
    println!();
    println!(
        "  Language: {}",
        issue.language.as_deref().map_or_else(unset, |v| style(v).green().to_string())
    );
    println!(
        "  Currency: {}",
        issue.currency.as_deref().map_or_else(unset, |v| style(v).green().to_string())
    );
    println!(
        "  Version: {}",
        issue.version.as_deref().map_or_else(unset, |v| style(v).green().to_string())
    );
    println!("  Articles: {}", issue.articles.len());
    println!("  Terminology: {}", issue.terminology.len());
    println!();

    for (index, article) in issue.articles.iter().enumerate() {
        println!(
            "  {}. {} ({} content)",
            index + 1,
            article.title.as_deref().unwrap_or("(untitled)"),
            style(article.content.len()).yellow()
        );
    }

    Ok(())
}
