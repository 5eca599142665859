//! HVAC Dashboard CLI
//!
//! Command-line front end for the dashboard's display logic:
//! - Color readings against the heat-map scale
//! - Inspect scale junctions and legend ticks
//! - Render a page of the house grid
//! - Build chart datasets from simulation frames

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use hvac_dashboard::charts::{build_all, build_chart, ChartKind};
use hvac_dashboard::color::{boundary_report, Bound, ColorMapper, RampMode};
use hvac_dashboard::config::{generate_default_config, Config};
use hvac_dashboard::grid::render_page;
use hvac_dashboard::import::{read_frames, read_houses};
use hvac_dashboard::settings::{DisplaySettings, ScaleLegend};
use hvac_dashboard::init_logging;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hvac-dashboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Display logic for a house/HVAC simulation dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Map readings to heat-map colors
    Color {
        /// Deviation readings
        #[arg(required = true, allow_negative_numbers = true)]
        samples: Vec<f64>,
        /// Scale bound (default: configured precision)
        #[arg(short, long)]
        bound: Option<f64>,
        /// Cyan-to-green ramp formula (literal, symmetric)
        #[arg(short, long)]
        ramp: Option<RampMode>,
    },

    /// Show colors on both sides of every scale junction
    Boundaries {
        /// Scale bound (default: configured precision)
        #[arg(short, long)]
        bound: Option<f64>,
        /// Distance from the junction to sample
        #[arg(short, long, default_value = "1e-6")]
        epsilon: f64,
        /// Cyan-to-green ramp formula (literal, symmetric)
        #[arg(short, long)]
        ramp: Option<RampMode>,
    },

    /// Show the legend ticks for a bound
    Legend {
        /// Scale bound (default: configured precision)
        #[arg(short, long)]
        bound: Option<f64>,
    },

    /// Render one page of the house grid
    Grid {
        /// Houses file (.csv or .json)
        path: PathBuf,
        /// Squares per page
        #[arg(short, long)]
        squares: Option<usize>,
        /// Page to render (1-based)
        #[arg(short, long, default_value = "1")]
        page: usize,
        /// Scale bound (default: configured precision)
        #[arg(short, long)]
        bound: Option<f64>,
    },

    /// Build chart datasets from simulation frames
    Charts {
        /// Frames file (.csv or .json)
        path: PathBuf,
        /// Only build this chart (consumption, temperature-error, temperatures)
        #[arg(long)]
        chart: Option<ChartKind>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    init_logging(&config.logging).context("Failed to initialize logging")?;

    let mut settings = config
        .display_settings()
        .context("Invalid display settings in config")?;

    match cli.command {
        Commands::Color {
            samples,
            bound,
            ramp,
        } => {
            let mapper = mapper_for(&settings, bound, ramp)?;
            let mut rows = Vec::with_capacity(samples.len());
            for sample in samples {
                let (segment, color) = mapper
                    .classify(sample)
                    .with_context(|| format!("Cannot color {}", sample))?;
                rows.push((sample, segment, color));
            }

            match cli.format {
                OutputFormat::Json => {
                    let json: Vec<_> = rows
                        .iter()
                        .map(|(sample, segment, color)| {
                            serde_json::json!({
                                "sample": sample,
                                "segment": segment,
                                "color": color.to_css(),
                            })
                        })
                        .collect();
                    println!("{}", serde_json::to_string_pretty(&json)?);
                }
                OutputFormat::Table => {
                    println!("{:<14} {:<16} COLOR", "SAMPLE", "SEGMENT");
                    for (sample, segment, color) in rows {
                        println!("{:<14} {:<16} {}", sample, segment.to_string(), color);
                    }
                }
            }
        }

        Commands::Boundaries {
            bound,
            epsilon,
            ramp,
        } => {
            let mapper = mapper_for(&settings, bound, ramp)?;
            let report = boundary_report(&mapper, epsilon)?;

            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
                OutputFormat::Table => {
                    println!(
                        "Scale bound {} ({} ramp), epsilon {}",
                        mapper.bound(),
                        mapper.mode(),
                        epsilon
                    );
                    println!(
                        "{:<14} {:<10} {:<32} {:<32} JUMP",
                        "JUNCTION", "AT", "BEFORE", "AFTER"
                    );
                    for jump in report {
                        println!(
                            "{:<14} {:<10} {:<32} {:<32} {:.6}",
                            jump.junction,
                            jump.at,
                            jump.before.to_string(),
                            jump.after.to_string(),
                            jump.max_jump
                        );
                    }
                }
            }
        }

        Commands::Legend { bound } => {
            let legend = match bound {
                Some(b) => ScaleLegend::for_bound(Bound::new(b)?),
                None => settings.legend(),
            };

            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&legend)?),
                OutputFormat::Table => {
                    let ticks: Vec<String> =
                        legend.ticks().iter().map(|t| t.to_string()).collect();
                    println!("{}", ticks.join("  |  "));
                }
            }
        }

        Commands::Grid {
            path,
            squares,
            page,
            bound,
        } => {
            if let Some(squares) = squares {
                settings.set_square_count(squares)?;
            }
            if let Some(bound) = bound {
                settings.set_precision(bound)?;
            }
            settings.set_page(page)?;

            let imported = read_houses(&path)
                .with_context(|| format!("Failed to read houses from {:?}", path))?;
            for error in &imported.errors {
                eprintln!("Skipped: {}", error);
            }

            let layout = settings.layout();
            let page = layout.page(&imported.houses, settings.page())?;
            let cells = render_page(&page, &settings.mapper())?;

            match cli.format {
                OutputFormat::Json => {
                    let json = serde_json::json!({
                        "page": page.id,
                        "pages": layout.page_count(imported.houses.len()),
                        "columns": layout.column_template(),
                        "rows": layout.row_template(),
                        "legend": settings.legend(),
                        "cells": cells,
                    });
                    println!("{}", serde_json::to_string_pretty(&json)?);
                }
                OutputFormat::Table => {
                    println!(
                        "Page {}/{} ({} per line, precision {})",
                        page.id,
                        layout.page_count(imported.houses.len()),
                        layout.per_line(),
                        settings.precision()
                    );
                    println!("{:<8} {:<8} {:<12} FILL", "HOUSE", "HVAC", "VALUE");
                    for cell in cells {
                        println!(
                            "{:<8} {:<8} {:<12} {}",
                            cell.house_id, cell.hvac, cell.value, cell.fill
                        );
                    }
                }
            }
        }

        Commands::Charts { path, chart } => {
            let frames = read_frames(&path)
                .with_context(|| format!("Failed to read frames from {:?}", path))?;
            tracing::info!("Loaded {} frames from {:?}", frames.len(), path);

            match cli.format {
                OutputFormat::Json => {
                    let json = match chart {
                        Some(kind) => serde_json::to_string_pretty(&build_chart(kind, &frames))?,
                        None => serde_json::to_string_pretty(&build_all(&frames))?,
                    };
                    println!("{}", json);
                }
                OutputFormat::Table => {
                    let kinds = chart.map(|k| vec![k]).unwrap_or_else(|| ChartKind::all().to_vec());
                    for kind in kinds {
                        let data = build_chart(kind, &frames);
                        println!("{} ({} ticks)", kind, data.labels.len());
                        for dataset in &data.datasets {
                            let last = dataset.data.iter().rev().flatten().next();
                            println!(
                                "  {:<34} {:>5} values, last {}",
                                dataset.label,
                                dataset.present(),
                                last.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
                            );
                        }
                    }
                }
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

/// Mapper for a command, falling back to the configured precision and ramp
fn mapper_for(
    settings: &DisplaySettings,
    bound: Option<f64>,
    ramp: Option<RampMode>,
) -> Result<ColorMapper> {
    let mapper = match bound {
        Some(b) => ColorMapper::new(Bound::new(b)?).with_mode(settings.ramp_mode()),
        None => settings.mapper(),
    };
    Ok(match ramp {
        Some(mode) => mapper.with_mode(mode),
        None => mapper,
    })
}
