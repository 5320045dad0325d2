//! Stratus — cloud storage cost and duplication analyser.
//!
//! Thin binary entry point. All logic lives in the `stratus-core`
//! and `stratus-cli` crates.

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args = stratus_cli::parse_args(std::env::args().skip(1))?;
    stratus_cli::run(args)
}
