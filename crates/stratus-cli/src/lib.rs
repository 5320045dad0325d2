/// Stratus CLI — the terminal front-end over `stratus-core`.
///
/// Everything here is presentation glue: load the snapshot and pricing
/// config, run the one-shot analysis, render it. The engine itself never
/// touches a file or the clock; this crate owns both boundaries.
pub mod export;
pub mod loader;
pub mod render;

use anyhow::bail;
use chrono::Utc;
use std::path::PathBuf;
use stratus_core::report::{analyze, AnalysisOptions};

const USAGE: &str = "usage: stratus <snapshot.json> <pricing.json> [--csv DIR]";

/// Parsed command line.
#[derive(Debug, PartialEq)]
pub struct CliArgs {
    pub snapshot: PathBuf,
    pub pricing: PathBuf,
    /// Directory to write CSV reports into, when requested.
    pub csv_dir: Option<PathBuf>,
}

/// Parse argv (without the program name).
pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> anyhow::Result<CliArgs> {
    let mut positional: Vec<PathBuf> = Vec::new();
    let mut csv_dir = None;
    let mut iter = args.into_iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--csv" => match iter.next() {
                Some(dir) => csv_dir = Some(PathBuf::from(dir)),
                None => bail!("--csv requires a directory\n{USAGE}"),
            },
            _ if arg.starts_with('-') => bail!("unknown flag {arg}\n{USAGE}"),
            _ => positional.push(PathBuf::from(arg)),
        }
    }

    match <[PathBuf; 2]>::try_from(positional) {
        Ok([snapshot, pricing]) => Ok(CliArgs {
            snapshot,
            pricing,
            csv_dir,
        }),
        Err(_) => bail!("expected exactly two input files\n{USAGE}"),
    }
}

/// Load, analyse, render. The analysis clock is pinned once here so the
/// whole report describes a single instant.
pub fn run(args: CliArgs) -> anyhow::Result<()> {
    let files = loader::load_snapshot(&args.snapshot)?;
    let pricing = loader::load_pricing(&args.pricing)?;
    tracing::info!(files = files.len(), providers = pricing.providers.len(), "inputs loaded");

    let options = AnalysisOptions::at(Utc::now());
    let report = analyze(&files, &pricing, &options);

    print!("{}", render::render_report(&report));

    if let Some(dir) = &args.csv_dir {
        export::export_csv(&report, dir)?;
        tracing::info!(dir = %dir.display(), "CSV reports written");
    }

    Ok(())
}
