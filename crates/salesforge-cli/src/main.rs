use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use salesforge_core::DataLayout;
use salesforge_generate::{DatasetGenerator, GenerateError, GenerateOptions};
use salesforge_load::{LoadError, load_dataset};

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generate(#[from] GenerateError),
    #[error("load error: {0}")]
    Load(#[from] LoadError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "salesforge", version, about = "Synthetic sales dataset toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a pseudo-random products/salesmen/sales dataset.
    Generate(GenerateArgs),
    /// Load a dataset back and report inconsistencies.
    Check(CheckArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Number of products in the catalog.
    #[arg(long, default_value_t = 10)]
    products: u32,
    /// Number of salesmen on the roster.
    #[arg(long, default_value_t = 5)]
    salesmen: u32,
    /// Dataset directory.
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,
    /// Seed for reproducible datasets; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// Dataset directory.
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,
    /// Emit the load report as JSON.
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<(), CliError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::Check(args) => run_check(args),
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let mut generator = DatasetGenerator::new(GenerateOptions {
        data_dir: args.data_dir,
        seed: args.seed,
    });
    info!(
        products = args.products,
        salesmen = args.salesmen,
        seed = generator.seed(),
        "generation pass started"
    );
    let report = generator.run(args.products, args.salesmen)?;
    println!(
        "Files generated successfully: {} products, {} salesmen, {} sales in {} (seed {})",
        report.products_written,
        report.salesmen_written,
        report.sale_lines_written,
        report.data_dir.display(),
        report.seed,
    );
    Ok(())
}

fn run_check(args: CheckArgs) -> Result<(), CliError> {
    let layout = DataLayout::new(args.data_dir);
    info!(root = %layout.root().display(), "checking dataset");
    let dataset = load_dataset(&layout)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&dataset.report)?);
    } else {
        println!(
            "Loaded {} products, {} salesmen, {} sales ({} warnings)",
            dataset.report.products_loaded,
            dataset.report.salesmen_loaded,
            dataset.report.sales_loaded,
            dataset.report.warnings.len(),
        );
    }
    Ok(())
}
