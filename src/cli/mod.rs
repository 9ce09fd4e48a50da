//! Command-line interface for rhyme-detector.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **analyze**: Find rhymes in a verse
//! - **spans**: List the candidate spans of a verse
//!
//! ## Usage
//!
//! ```text
//! # Analyse raw text through a phonetic table
//! rhyme-detector analyze poem.txt --table rhymes.tsv
//!
//! # Analyse an already labelled verse from stdin
//! cat verse.json | rhyme-detector analyze -
//!
//! # JSON output for renderers
//! rhyme-detector analyze verse.json --format json
//!
//! # Only end rhymes, up to two lines apart
//! rhyme-detector analyze verse.json --no-inter-line-rhyme --no-internal-rhyme --line-diff-tolerance 2
//! ```

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::core::verse::Verse;
use crate::parsing::table::PhoneticTable;
use crate::parsing::verse::parse_verse_text;

pub mod analyze;
pub mod spans;

#[derive(Parser)]
#[command(name = "rhyme-detector")]
#[command(version)]
#[command(about = "Find end, inter-line and internal rhymes in verse")]
#[command(
    long_about = "rhyme-detector finds rhymes in verse and lyrics.\n\nEach character is labelled with a rhyme group, either by a phonetic table (--table) or in a pre-labelled verse JSON document. Matching label sequences are reported as:\n- End rhymes between line endings\n- Inter-line rhymes at similar positions on nearby lines\n- Internal rhymes within a line"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find rhymes in a verse
    Analyze(analyze::AnalyzeArgs),

    /// List candidate spans in priority order
    Spans(spans::SpansArgs),
}

/// Where the verse comes from, shared by all subcommands
#[derive(clap::Args)]
pub struct InputArgs {
    /// Verse JSON, or raw text when --table is given. Use '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,

    /// Phonetic table (TSV: character, transcription, normal group, strict group)
    #[arg(short, long)]
    pub table: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read '{}': {e}", path.display()))
    }
}

/// Load the verse named by the input arguments
///
/// # Errors
///
/// Returns an error if the input or table cannot be read, or if the input is
/// not a valid verse document.
pub fn load_verse(args: &InputArgs, verbose: bool) -> anyhow::Result<Verse> {
    let text = read_input(&args.input)?;

    let verse = if let Some(table_path) = &args.table {
        let table = PhoneticTable::load_from_file(table_path)?;
        if verbose {
            eprintln!("Loaded phonetic table with {} characters", table.len());
        }
        table.to_verse(&text)
    } else {
        parse_verse_text(&text)?
    };

    if verbose {
        let chars: usize = verse.lines.iter().map(|l| l.len()).sum();
        eprintln!("Read {} lines ({chars} characters)", verse.len());
    }

    Ok(verse)
}
