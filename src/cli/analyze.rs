use std::path::PathBuf;

use clap::Args;

use crate::cli::{load_verse, InputArgs, OutputFormat};
use crate::core::result::{AnalysisResult, Position, RhymeResult};
use crate::matching::engine::{AnalysisOptions, RhymeEngine};

#[derive(Args)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Options file (JSON); flags below override it
    #[arg(long)]
    pub options: Option<PathBuf>,

    /// Do not detect end rhymes
    #[arg(long)]
    pub no_end_rhyme: bool,

    /// Do not detect inter-line rhymes
    #[arg(long)]
    pub no_inter_line_rhyme: bool,

    /// Do not detect internal rhymes
    #[arg(long)]
    pub no_internal_rhyme: bool,

    /// Maximum position offset for inter-line rhymes (default 2)
    #[arg(long)]
    pub inter_line_tolerance: Option<usize>,

    /// Maximum number of lines between two rhyming spans (default 4)
    #[arg(long)]
    pub line_diff_tolerance: Option<usize>,

    /// Extra gap allowed within a line for internal rhymes (default 0)
    #[arg(long)]
    pub internal_tolerance: Option<usize>,
}

impl AnalyzeArgs {
    /// Options file (or defaults) with command-line flags applied on top
    ///
    /// # Errors
    ///
    /// Returns an error if the options file cannot be read or parsed.
    pub fn analysis_options(&self) -> anyhow::Result<AnalysisOptions> {
        let mut options = match &self.options {
            Some(path) => AnalysisOptions::load_from_file(path)?,
            None => AnalysisOptions::default(),
        };

        if self.no_end_rhyme {
            options.detect_end_rhyme = false;
        }
        if self.no_inter_line_rhyme {
            options.detect_inter_line_rhyme = false;
        }
        if self.no_internal_rhyme {
            options.detect_internal_rhyme = false;
        }
        if let Some(t) = self.inter_line_tolerance {
            options.inter_line_tolerance = t;
        }
        if let Some(t) = self.line_diff_tolerance {
            options.inter_line_line_diff_tolerance = t;
        }
        if let Some(t) = self.internal_tolerance {
            options.internal_rhyme_tolerance = t;
        }

        Ok(options)
    }
}

/// Execute analyze subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be loaded or the verse is rejected.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: AnalyzeArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let options = args.analysis_options()?;
    let verse = load_verse(&args.input, verbose)?;

    if verbose {
        eprintln!(
            "Detecting: end={} inter-line={} internal={} (tolerances: position {}, lines {}, gap {})",
            options.detect_end_rhyme,
            options.detect_inter_line_rhyme,
            options.detect_internal_rhyme,
            options.inter_line_tolerance,
            options.inter_line_line_diff_tolerance,
            options.internal_rhyme_tolerance,
        );
    }

    let engine = RhymeEngine::new(options);
    let result = engine.analyze(&verse)?;

    match format {
        OutputFormat::Text => print_text_results(&result),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Tsv => print_tsv_results(&result),
    }

    Ok(())
}

/// Human-readable location, 1-based
fn describe_position(pos: &Position) -> String {
    if pos.length == 1 {
        format!("line {}, char {}", pos.line + 1, pos.start_char + 1)
    } else {
        format!(
            "line {}, chars {}-{}",
            pos.line + 1,
            pos.start_char + 1,
            pos.start_char + pos.length
        )
    }
}

fn print_text_results(result: &AnalysisResult) {
    let summary = &result.summary;

    println!("Rhyme Analysis");
    println!("{}", "=".repeat(60));
    println!("\nLines: {}", summary.total_lines);
    println!(
        "Rhymes: {} ({} end, {} internal)",
        summary.total_rhyme_count, summary.rhyme_types.end_rhyme, summary.rhyme_types.internal_rhyme
    );

    if result.results.is_empty() {
        println!("\nNo rhymes found.");
        return;
    }

    for rhyme in &result.results {
        print_text_rhyme(rhyme);
    }
}

fn print_text_rhyme(rhyme: &RhymeResult) {
    println!(
        "\n{}  {}  [{}]  {}",
        rhyme.id,
        rhyme.rhyme_type,
        rhyme.sequence.join(" "),
        rhyme.color
    );
    for (pos, (chars, transcriptions)) in rhyme
        .positions
        .iter()
        .zip(rhyme.characters.iter().zip(&rhyme.transcriptions))
    {
        println!(
            "  {:<20} {} ({})",
            describe_position(pos),
            chars.concat(),
            transcriptions.join(" ")
        );
    }
}

fn print_tsv_results(result: &AnalysisResult) {
    println!("id\ttype\tsequence\tline_a\tstart_a\tlength_a\ttext_a\tline_b\tstart_b\tlength_b\ttext_b\tcolor");
    for r in &result.results {
        let [a, b] = &r.positions;
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            r.id,
            r.rhyme_type.as_str(),
            r.sequence.join(" "),
            a.line,
            a.start_char,
            a.length,
            r.characters[0].concat(),
            b.line,
            b.start_char,
            b.length,
            r.characters[1].concat(),
            r.color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    use crate::cli::{Cli, Commands};

    fn parse(args: &[&str]) -> AnalyzeArgs {
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Analyze(a) => a,
            Commands::Spans(_) => panic!("expected analyze"),
        }
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = parse(&[
            "rhyme-detector",
            "analyze",
            "verse.json",
            "--no-internal-rhyme",
            "--line-diff-tolerance",
            "1",
        ]);
        let options = args.analysis_options().unwrap();

        assert!(options.detect_end_rhyme);
        assert!(options.detect_inter_line_rhyme);
        assert!(!options.detect_internal_rhyme);
        assert_eq!(options.inter_line_line_diff_tolerance, 1);
        assert_eq!(options.inter_line_tolerance, 2);
    }

    #[test]
    fn test_describe_position() {
        let single = Position {
            line: 0,
            start_char: 4,
            length: 1,
        };
        let multi = Position {
            line: 2,
            start_char: 3,
            length: 2,
        };
        assert_eq!(describe_position(&single), "line 1, char 5");
        assert_eq!(describe_position(&multi), "line 3, chars 4-5");
    }
}
