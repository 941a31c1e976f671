use clap::Args;

use crate::cli::OutputFormat;
use crate::matching::{approximate_match, edit_distance, hamming_distance};
use crate::utils::validation::check_dp_cells;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum DistanceMode {
    /// Edit distance between the two strings
    #[default]
    Global,
    /// Edit distance of X against the best-matching substring of Y
    EndFree,
    /// Mismatch count between equal-length strings
    Hamming,
}

#[derive(Args)]
pub struct DistanceArgs {
    /// First string (the pattern in end-free mode)
    #[arg(required = true)]
    pub x: String,

    /// Second string (the text in end-free mode)
    #[arg(required = true)]
    pub y: String,

    /// Distance to compute
    #[arg(long, value_enum, default_value = "global")]
    pub mode: DistanceMode,
}

/// Execute distance subcommand
///
/// # Errors
///
/// Returns an error if the strings are too long for the DP matrix, or differ
/// in length in Hamming mode.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: DistanceArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let (x, y) = (args.x.as_bytes(), args.y.as_bytes());

    if args.mode != DistanceMode::Hamming {
        if let Some(msg) = check_dp_cells(x.len(), y.len()) {
            anyhow::bail!(msg);
        }
    }
    if verbose {
        eprintln!(
            "Comparing {} and {} symbols ({:?})",
            x.len(),
            y.len(),
            args.mode
        );
    }

    let (distance, end_offsets) = match args.mode {
        DistanceMode::Global => (edit_distance(x, y), None),
        DistanceMode::EndFree => {
            let best = approximate_match(x, y);
            (best.distance, Some(best.end_offsets))
        }
        DistanceMode::Hamming => (hamming_distance(x, y)?, None),
    };

    match format {
        OutputFormat::Text => {
            println!("Distance ({:?}): {distance}", args.mode);
            if let Some(ends) = &end_offsets {
                let ends: Vec<String> = ends.iter().map(ToString::to_string).collect();
                println!("End offsets: {}", ends.join(", "));
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "x": args.x,
                "y": args.y,
                "mode": format!("{:?}", args.mode),
                "distance": distance,
                "end_offsets": end_offsets,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("mode\tdistance");
            println!("{:?}\t{distance}", args.mode);
        }
    }

    Ok(())
}
