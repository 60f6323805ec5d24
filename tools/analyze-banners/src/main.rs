use argh::FromArgs;
use banner_variability::api::sample_set::{SampleSet, SampleSetError};
use banner_variability::report::builder::build_report;
use banner_variability::report::persist::{write_report, ReportError, DEFAULT_OUTPUT_FILE};
use banner_variability::report::summary::{format_summary_table, summarize};
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

/// Finds which columns of captured banner lines vary between samples
#[derive(FromArgs, Debug)]
pub struct Args {
    /// json sample file to analyze (default: built-in banner captures)
    #[argh(option, short = 'i')]
    input: Option<PathBuf>,

    /// where to write the result (default: analysis_result.json)
    #[argh(option, short = 'o', default = "PathBuf::from(DEFAULT_OUTPUT_FILE)")]
    output: PathBuf,

    /// don't print the per-group summary table
    #[argh(switch, short = 'q')]
    quiet: bool,
}

/// Errors that can occur during a run
#[derive(Error, Debug)]
pub enum AnalyzeBannersError {
    #[error("Sample loading error: {0}")]
    Samples(#[from] SampleSetError),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),
}

type Result<T> = core::result::Result<T, AnalyzeBannersError>;

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let args: Args = argh::from_env();
    if let Some(summary) = run(&args)? {
        println!("{summary}");
    }

    Ok(())
}

/// Loads the samples, writes the report and returns the summary table unless quiet.
fn run(args: &Args) -> Result<Option<String>> {
    let sample_set = match &args.input {
        Some(path) => {
            debug!(path = %path.display(), "loading sample file");
            SampleSet::load(path)?
        }
        None => SampleSet::builtin(),
    };

    let result = build_report(&sample_set);
    write_report(&result, &args.output)?;

    if args.quiet {
        return Ok(None);
    }

    let rows = summarize(&sample_set);
    Ok(Some(format_summary_table(
        &rows,
        Some("Banner Variability Summary"),
    )))
}
