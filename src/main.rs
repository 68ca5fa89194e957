use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lutviz::models::{parse_color, GridSize, LutConfig};
use lutviz::report::{present, HtmlReporter, JsonReporter, ReportFormat, TextReporter};
use lutviz::services::LutAnalysis;

const REPORT_TITLE: &str = "LUT reference counts";

#[derive(Parser)]
#[command(name = "lutviz")]
#[command(about = "Inspect coarse 3-D color LUT grids and color-checker reference counts")]
struct Cli {
    /// YAML configuration file (grid size and samples)
    #[arg(long, global = true, env = "LUTVIZ_CONFIG")]
    config: Option<PathBuf>,

    /// Grid size as NXxNYxNZ, overriding the config file (e.g. 4x3x3)
    #[arg(long, global = true, env = "LUTVIZ_SIZE")]
    size: Option<GridSize>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the sample table and the grid reference-count table
    Report {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },
    /// Show the cell a color falls into and its trilinear mapping
    Map {
        /// Color as rrrr,gggg,bbbb (16-bit hex) or #rrggbb
        color: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so reports on stdout stay clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lutviz=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let mut config = match &cli.config {
        Some(path) => LutConfig::load(path)?,
        None => LutConfig::default(),
    };
    if let Some(size) = cli.size {
        tracing::debug!(from = %config.grid, to = %size, "Grid size overridden");
        config.grid = size;
    }

    match cli.command {
        Some(Commands::Report { format }) => run_report_command(&config, format),
        Some(Commands::Map { color }) => run_map_command(&config, &color),
        None => run_status_command(&config),
    }
}

fn run_report_command(config: &LutConfig, format: ReportFormat) -> anyhow::Result<()> {
    let analysis = LutAnalysis::run(config.grid, &config.samples())?;
    let stdout = std::io::stdout().lock();

    match format {
        ReportFormat::Text => present(&analysis, &mut TextReporter::new(stdout))?,
        ReportFormat::Html => present(&analysis, &mut HtmlReporter::new(stdout, REPORT_TITLE))?,
        ReportFormat::Json => present(&analysis, &mut JsonReporter::new(stdout, REPORT_TITLE))?,
    }
    Ok(())
}

fn run_map_command(config: &LutConfig, color: &str) -> anyhow::Result<()> {
    let color = parse_color(color)?;
    let analysis = LutAnalysis::run(config.grid, &[])?;
    let grid = &analysis.grid;

    let root = grid.find_root(color);
    let blocks = grid.axes().map(|a| a.block_size());
    let mapped = grid.map_color(color);

    println!("input   {color}  {}", color.hex_swatch());
    println!("grid    {}", config.grid);
    println!("cell    {}", root.base);
    println!(
        "weights {}/{}, {}/{}, {}/{}",
        root.remainder[0], blocks[0], root.remainder[1], blocks[1], root.remainder[2], blocks[2]
    );
    println!("mapped  {mapped}  {}", mapped.hex_swatch());
    Ok(())
}

fn run_status_command(config: &LutConfig) -> anyhow::Result<()> {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let analysis = LutAnalysis::run(config.grid, &config.samples())?;
    let referenced = analysis
        .grid
        .iter()
        .filter(|(_, p)| p.visits > 0)
        .count();

    println!("lutviz v{VERSION} - color LUT grid inspection\n");
    println!("Grid:");
    println!("  size       = {}", config.grid);
    println!("  vertices   = {}", analysis.grid.len());
    for axis in analysis.grid.axes() {
        println!(
            "  {} axis     = {} points, block {}",
            axis.name(),
            axis.points(),
            axis.block_size()
        );
    }
    println!("\nReferences:");
    println!("  samples    = {}", analysis.mappings.len());
    println!("  total      = {}", analysis.grid.total_visits());
    println!("  referenced = {referenced} of {} vertices", analysis.grid.len());
    println!("  max        = {}", analysis.max_visits());
    println!("\nRun 'lutviz report' for the full tables.");
    Ok(())
}
