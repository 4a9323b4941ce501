mod model;
mod output;
mod search;
mod stream;
mod suffix;
mod types;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use model::SubstringIndex;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sxi")]
#[command(about = "In-memory substring search over the lines of a file")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Index a file's lines and search them
    Search {
        /// File whose lines become the indexed records
        file: PathBuf,

        /// Substrings to look up, each reported separately
        #[arg(required = true)]
        queries: Vec<String>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// Show index statistics for a file
    Stats {
        /// File whose lines become the indexed records
        file: PathBuf,

        /// Emit statistics as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            file,
            queries,
            no_color,
        } => {
            let index = build_line_index(&file)?;
            for query in &queries {
                let matches = index.search(query);
                output::print_matches(query, &matches, !no_color)?;
            }
        }
        Commands::Stats { file, json } => {
            let index = build_line_index(&file)?;
            let stats = index.stats();
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("Indexed: {}", file.display());
                println!("Records:   {}", stats.entry_count);
                println!("Text size: {} symbols", stats.text_size);
                println!("Suffixes:  {}", stats.suffix_count);
            }
        }
    }

    Ok(())
}

/// Index the non-empty lines of `file` as individual records
fn build_line_index(file: &Path) -> Result<SubstringIndex<String>> {
    let content = fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let lines: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    SubstringIndex::construct(lines, |line: &String| Ok(line.clone()))
}
