//! issue-infographic CLI - Developer tooling for the issue infographic
//!
//! Renders the dashboard as text, exports and lints the dataset, and writes
//! the host page the WASM dashboard mounts into.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info, warn};

mod error;
mod page;
mod summary;

use issue_infographic_core::{
    dataset_json, filtered_issues_by_key, validate_dataset, DashboardConfig, DashboardView,
    SeverityTier, HERO, ISSUES,
};

/// issue-infographic: inspect the issue dataset and prepare the dashboard host page
#[derive(Parser, Debug)]
#[command(name = "issue-infographic")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the dashboard as text
    Summary(SummaryArgs),
    /// Write the dataset as JSON to stdout
    Export(ExportArgs),
    /// Validate the dataset and hero copy
    Check,
    /// Generate the host page for the WASM dashboard
    Page(PageArgs),
}

#[derive(Parser, Debug)]
struct SummaryArgs {
    /// Only show one severity tier (sev-1 .. sev-4)
    #[arg(short, long)]
    severity: Option<String>,
}

#[derive(Parser, Debug)]
struct ExportArgs {
    /// Pretty-print the JSON
    #[arg(long, default_value = "false")]
    pretty: bool,
}

#[derive(Parser, Debug)]
struct PageArgs {
    /// Output directory for index.html
    #[arg(short, long, default_value = "dist")]
    output_dir: PathBuf,

    /// Page title
    #[arg(long)]
    title: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Summary(args) => summary_command(args),
        Commands::Export(args) => export_command(args),
        Commands::Check => check_command(),
        Commands::Page(args) => page_command(args),
    }
}

fn summary_command(args: SummaryArgs) -> Result<()> {
    let view = match args.severity.as_deref() {
        None => DashboardView::new(ISSUES, None),
        Some(key) => match key.parse::<SeverityTier>() {
            Ok(tier) => DashboardView::new(ISSUES, Some(tier)),
            Err(e) => {
                warn!("{}, showing no issues", e);
                DashboardView::from_filtered(ISSUES, None, filtered_issues_by_key(ISSUES, key))
            }
        },
    };

    debug!(
        "Rendering {} of {} issues (max mentions {})",
        view.issues.len(),
        ISSUES.len(),
        view.max_mentions
    );
    print!("{}", summary::render_summary(&view));
    Ok(())
}

fn export_command(args: ExportArgs) -> Result<()> {
    let json = dataset_json(ISSUES, args.pretty)
        .map_err(error::Error::from)
        .context("Failed to serialize dataset")?;

    println!("{}", json);
    Ok(())
}

fn check_command() -> Result<()> {
    let notices = validate_dataset(ISSUES, &HERO)
        .map_err(error::Error::from)
        .context("Dataset validation failed")?;

    for notice in &notices {
        warn!("{}", notice);
        println!("notice: {}", notice);
    }

    info!(
        "Dataset OK: {} issues, {} notice(s)",
        ISSUES.len(),
        notices.len()
    );
    Ok(())
}

fn page_command(args: PageArgs) -> Result<()> {
    let mut config = DashboardConfig::default();
    if let Some(title) = args.title {
        config.title = title;
    }

    let path = page::write_host_page(&config, &args.output_dir)
        .with_context(|| format!("Failed to write host page to {:?}", args.output_dir))?;

    info!("Generated: {}", path.display());
    Ok(())
}
