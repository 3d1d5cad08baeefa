//! lanterngen CLI entrypoint
//! Parses command-line arguments and dispatches to the core generator.

// Internal imports (std, crate)
use std::path::PathBuf;

// External imports (alphabetized)
use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use lanterngen_core::{
    generate_with_progress, Config, EndMarkerPolicy, GenerateRequest, Progress, RewriteMode,
    RewriteOutcome,
};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: lanterngen declarations.yaml lantern.cpp lantern.h";

#[derive(Parser, Debug)]
#[command(name = "lanterngen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Declarations schema (YAML, or JSON with a .json extension)
    declarations: PathBuf,
    /// Source file receiving the stub bodies
    source: PathBuf,
    /// Header receiving the function-pointer declarations and symbol loaders
    header: PathBuf,
    /// Generator config overriding the prefix and markers (YAML or JSON)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Report stale regions without writing; exits 1 if any region is stale
    #[arg(long)]
    check: bool,
    /// Fail when a start marker has no end marker after it
    #[arg(long)]
    strict_markers: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.print()?;
            return Ok(());
        }
        Err(e) => {
            tracing::debug!("Invalid arguments: {}", e);
            println!("{USAGE}");
            std::process::exit(1);
        }
    };

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)
            .await
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::default(),
    };
    if cli.strict_markers {
        config.end_marker_policy = EndMarkerPolicy::Strict;
    }

    let mut request = GenerateRequest::new(&cli.declarations, &cli.source, &cli.header);
    if cli.check {
        request.mode = RewriteMode::Check;
    }

    let report = generate_with_progress(&request, &config, |progress| match progress {
        Progress::SchemaLoaded {
            path,
            function_count,
        } => println!("Loaded {} with {} nodes", path.display(), function_count),
        Progress::Region(region) => match (request.mode, region.outcome) {
            (_, RewriteOutcome::MarkerNotFound) => tracing::debug!(
                "No {} markers in {}",
                region.kind,
                region.path.display()
            ),
            (RewriteMode::Write, _) => println!("Replacing {}", region.path.display()),
            (RewriteMode::Check, RewriteOutcome::Replaced) => {
                println!("Stale region {} in {}", region.kind, region.path.display())
            }
            (RewriteMode::Check, RewriteOutcome::Unchanged) => tracing::debug!(
                "{} region in {} is up to date",
                region.kind,
                region.path.display()
            ),
        },
    })
    .await
    .context("Failed to regenerate Lantern bindings")?;

    if cli.check && report.stale_regions().next().is_some() {
        std::process::exit(1);
    }
    Ok(())
}
