use clap::Parser;
use tracing_subscriber::EnvFilter;

use rhyme_detector::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("rhyme_detector=debug,info")
    } else {
        EnvFilter::new("rhyme_detector=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Analyze(args) => {
            cli::analyze::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Spans(args) => {
            cli::spans::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
