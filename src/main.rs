use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use tsdb_analysis::settings::Settings;
use tsdb_analysis::streams::{self, STDIO};

#[derive(Parser)]
#[command(
    name = "tsdb_analysis",
    version,
    about = "Convert a TSDB block analysis dump into JSON"
)]
struct Cli {
    /// Report to parse ("-" reads stdin)
    #[arg(short, long, default_value = STDIO)]
    input: PathBuf,
    /// File to append the JSON document to ("-" writes stdout)
    #[arg(short, long, default_value = STDIO)]
    output: PathBuf,
    /// Pretty-print the JSON document
    #[arg(long)]
    pretty: bool,
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let settings = Settings::load();
    info!(settings = ?settings, input = %cli.input.display(), output = %cli.output.display(), "starting");

    let input = streams::open_input(&cli.input)?;
    let report = tsdb_analysis::parse(input)
        .with_context(|| format!("parsing {}", cli.input.display()))?;
    info!(
        block = %report.block_id,
        series = report.series,
        "parsed block analysis"
    );

    let output = streams::open_output(&cli.output)?;
    streams::write_report(output, &report, cli.pretty || settings.pretty)
        .with_context(|| format!("writing {}", cli.output.display()))?;
    Ok(())
}
