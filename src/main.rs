// src/main.rs

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum, ValueHint};
use tracing::info;
use tracing_subscriber::EnvFilter;

use motor_temp_dashboard::constants::{PLOT_HEIGHT, PLOT_WIDTH};
use motor_temp_dashboard::plot_framework::Theme;
use motor_temp_dashboard::{
    build_motor_dashboard, parse_dataset_file, DashboardAggregates, DashboardConfig, OutputFormat,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Electric motor temperature dashboard renderer", long_about = None)]
struct Cli {
    /// Motor temperature CSV to ingest
    #[arg(value_hint = ValueHint::FilePath)]
    input: PathBuf,

    /// Directory for the rendered dashboard (defaults to the input file's directory)
    #[arg(long, value_hint = ValueHint::DirPath)]
    output_dir: Option<PathBuf>,

    /// Image format
    #[arg(long, value_enum, default_value_t = FormatOpt::Png)]
    format: FormatOpt,

    /// Color theme
    #[arg(long, value_enum, default_value_t = ThemeOpt::Dark)]
    theme: ThemeOpt,

    /// Image width in pixels
    #[arg(long, default_value_t = PLOT_WIDTH)]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = PLOT_HEIGHT)]
    height: u32,

    /// Verbose logging
    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum FormatOpt {
    Png,
    Svg,
}

impl From<FormatOpt> for OutputFormat {
    fn from(value: FormatOpt) -> Self {
        match value {
            FormatOpt::Png => OutputFormat::Png,
            FormatOpt::Svg => OutputFormat::Svg,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ThemeOpt {
    Dark,
    Light,
}

impl From<ThemeOpt> for Theme {
    fn from(value: ThemeOpt) -> Self {
        match value {
            ThemeOpt::Dark => Theme::Dark,
            ThemeOpt::Light => Theme::Light,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let format = OutputFormat::from(cli.format);
    let output_path = output_path_for(&cli.input, cli.output_dir.as_deref(), format);

    let dataset = parse_dataset_file(&cli.input)
        .with_context(|| format!("failed to load dataset {}", cli.input.display()))?;
    info!("Loaded {} rows.", dataset.len());

    let aggregates =
        DashboardAggregates::compute(&dataset).context("failed to aggregate dataset")?;

    let config = DashboardConfig {
        theme: cli.theme.into(),
        width: cli.width,
        height: cli.height,
        ..DashboardConfig::default()
    };
    let dashboard =
        build_motor_dashboard(&aggregates, config).context("failed to assemble dashboard")?;

    if let Some(dir) = output_path.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }
    }
    dashboard
        .render(&output_path, format)
        .with_context(|| format!("failed to render {}", output_path.display()))?;
    Ok(())
}

fn output_path_for(input: &Path, output_dir: Option<&Path>, format: OutputFormat) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "motor".to_string());
    let dir = match output_dir {
        Some(dir) => dir.to_path_buf(),
        None => input.parent().map(Path::to_path_buf).unwrap_or_default(),
    };
    dir.join(format!("{}_dashboard.{}", stem, format.extension()))
}
