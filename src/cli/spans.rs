use std::path::PathBuf;

use clap::Args;

use crate::cli::{load_verse, InputArgs, OutputFormat};
use crate::matching::engine::{AnalysisOptions, RhymeEngine};
use crate::matching::extractor::CandidateSpan;

#[derive(Args)]
pub struct SpansArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Options file (JSON); only the verse size limits apply here
    #[arg(long)]
    pub options: Option<PathBuf>,

    /// Number of spans to show (all by default)
    #[arg(short = 'n', long)]
    pub max_spans: Option<usize>,

    /// Only show spans that end their line
    #[arg(long)]
    pub end_of_line_only: bool,
}

/// Execute spans subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be loaded or the verse is rejected.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: SpansArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let options = match &args.options {
        Some(path) => AnalysisOptions::load_from_file(path)?,
        None => AnalysisOptions::default(),
    };
    let verse = load_verse(&args.input, verbose)?;
    let spans = RhymeEngine::new(options).extract_spans(&verse)?;

    if verbose {
        eprintln!("Extracted {} candidate spans", spans.len());
    }

    let spans: Vec<&CandidateSpan> = spans
        .iter()
        .filter(|s| !args.end_of_line_only || s.is_end_of_line)
        .take(args.max_spans.unwrap_or(usize::MAX))
        .collect();

    match format {
        OutputFormat::Text => print_text_spans(&spans),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&spans)?),
        OutputFormat::Tsv => print_tsv_spans(&spans),
    }

    Ok(())
}

fn print_text_spans(spans: &[&CandidateSpan]) {
    if spans.is_empty() {
        println!("No candidate spans found.");
        return;
    }

    println!(
        "{:<8} {:<10} {:<8} {:<24} Text",
        "Line", "Chars", "Score", "Sequence"
    );
    println!("{}", "-".repeat(60));
    for s in spans {
        println!(
            "{:<8} {:<10} {:<8} {:<24} {}{}",
            s.line_index + 1,
            format!("{}-{}", s.start_index + 1, s.end_index + 1),
            s.priority_score,
            s.sequence_key,
            s.characters.concat(),
            if s.is_end_of_line { "  (end)" } else { "" }
        );
    }
}

fn print_tsv_spans(spans: &[&CandidateSpan]) {
    println!("line\tstart\tend\tlength\tsequence\ttext\tend_of_line\tpriority");
    for s in spans {
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            s.line_index,
            s.start_index,
            s.end_index,
            s.length,
            s.sequence_key,
            s.characters.concat(),
            s.is_end_of_line,
            s.priority_score
        );
    }
}
