//! skymap: render the constellation stars above a place and time as JSON.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use skymap::{SkyData, SkyMapConfig, SkyMapRequest, SkyMapper};

#[derive(Parser)]
#[command(name = "skymap")]
#[command(about = "Stereographic sky maps of visible constellation stars")]
#[command(version)]
struct Cli {
    /// Configuration file (defaults to ./skymap.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Dataset directory, overriding the configuration
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Show debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only show errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a sky map and print it as JSON
    Render(RenderArgs),

    /// Download the star catalog and constellation figures into the data directory
    Fetch,
}

#[derive(Args)]
struct RenderArgs {
    /// Observer latitude in degrees, [-90, 90]
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,

    /// Observer longitude in degrees, [-180, 180]
    #[arg(long, allow_hyphen_values = true)]
    lon: f64,

    /// ISO-8601 date/time, e.g. 2023-12-30T15:55+00:00
    #[arg(long, allow_hyphen_values = true)]
    date: String,

    /// Canvas width in pixels
    #[arg(long)]
    width: Option<i64>,

    /// Canvas height in pixels
    #[arg(long)]
    height: Option<i64>,

    /// Do not download missing datasets
    #[arg(long)]
    offline: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let mut config = match &cli.config {
        Some(path) => SkyMapConfig::load_from(path),
        None => SkyMapConfig::load(),
    }
    .context("failed to load configuration")?;
    if let Some(dir) = &cli.data_dir {
        config.data_dir = dir.clone();
    }

    match &cli.command {
        Commands::Render(args) => render(args, config),
        Commands::Fetch => fetch(&config),
    }
}

fn render(args: &RenderArgs, mut config: SkyMapConfig) -> anyhow::Result<()> {
    if let Some(width) = args.width {
        config.canvas_width = width;
    }
    if let Some(height) = args.height {
        config.canvas_height = height;
    }

    let request = SkyMapRequest::new(args.lat, args.lon, &args.date).context("invalid request")?;

    let data = if args.offline {
        SkyData::load_from_dir(&config.data_dir)
    } else {
        SkyData::fetch(&config)
    }
    .with_context(|| format!("failed to load datasets from {}", config.data_dir.display()))?;

    let mapper = SkyMapper::from_config(Arc::new(data), &config)?;
    let map = mapper.compute(&request)?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&map)?
    } else {
        serde_json::to_string(&map)?
    };
    println!("{}", json);
    Ok(())
}

fn fetch(config: &SkyMapConfig) -> anyhow::Result<()> {
    let data = SkyData::fetch(config)
        .with_context(|| format!("failed to fetch datasets into {}", config.data_dir.display()))?;
    eprintln!(
        "{} stars, {} constellation figures in {}",
        data.catalog.len(),
        data.constellations.len(),
        config.data_dir.display()
    );
    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("SKYMAP_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
