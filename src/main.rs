//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use golf_trajectory::{
    cli::{Commands, GolfCli},
    commands::{
        common::{load_history, load_records},
        crossing::{handle_crossing, CrossingParams},
        eclectic::{handle_eclectic, EclecticParams},
        project::{handle_project, ProjectParams},
        stats::{handle_stats, StatsParams},
        strokes::{handle_strokes, StrokesParams},
    },
    config::load_config,
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
fn main() -> Result<()> {
    let app = GolfCli::parse();

    let default_level = if app.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(app.config.as_deref()).context("loading analytics config")?;
    let today = Utc::now().date_naive();

    match app.command {
        Commands::Project {
            histories,
            target,
            on,
            today: as_of,
            json,
        } => {
            let histories = histories
                .iter()
                .map(|path| {
                    load_history(path)
                        .with_context(|| format!("loading handicap history {}", path.display()))
                })
                .collect::<Result<Vec<_>>>()?;
            handle_project(
                ProjectParams {
                    histories,
                    target,
                    on,
                    today: as_of.unwrap_or(today),
                    as_json: json,
                },
                &config.projection,
            )?
        }

        Commands::Crossing {
            a,
            b,
            today: as_of,
            horizon_days,
            json,
        } => {
            let a = load_history(&a)
                .with_context(|| format!("loading handicap history {}", a.display()))?;
            let b = load_history(&b)
                .with_context(|| format!("loading handicap history {}", b.display()))?;
            handle_crossing(
                CrossingParams {
                    a,
                    b,
                    today: as_of.unwrap_or(today),
                    horizon_days,
                    as_json: json,
                },
                &config.projection,
            )?
        }

        Commands::Stats {
            records,
            filters,
            gap_days,
            stretches,
            top,
            json,
        } => {
            let records = load_records(&records)
                .with_context(|| format!("loading hole records {}", records.display()))?;
            handle_stats(
                StatsParams {
                    records,
                    filter: filters.into(),
                    gap_days,
                    stretch_sizes: stretches,
                    top_n: top,
                    now: Utc::now(),
                    as_json: json,
                },
                &config.stats,
            )?
        }

        Commands::Eclectic {
            records,
            course,
            tee,
            json,
        } => {
            let records = load_records(&records)
                .with_context(|| format!("loading hole records {}", records.display()))?;
            handle_eclectic(EclecticParams {
                records,
                course_id: course,
                tee_name: tee,
                as_json: json,
            })?
        }

        Commands::Strokes {
            course_handicap,
            json,
        } => handle_strokes(StrokesParams {
            course_handicap,
            as_json: json,
        })?,
    }

    Ok(())
}
