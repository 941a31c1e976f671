use clap::Parser;
use tracing_subscriber::EnvFilter;

use seqscan::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("seqscan=debug,info")
    } else {
        EnvFilter::new("seqscan=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Search(args) => {
            cli::search::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Distance(args) => {
            cli::distance::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Overlaps(args) => {
            cli::overlaps::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Assemble(args) => {
            cli::assemble::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Quality(args) => {
            cli::quality::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
