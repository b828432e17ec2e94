//! `reptrack` binary: counts exercise reps over recorded keypoint streams.

mod cli;
mod count;
mod error_fmt;
mod project;
mod source;

use clap::Parser;
use cli::{Cli, Commands, FILE_GUARD};
use eyre::WrapErr;
use std::path::Path;
use std::time::Duration;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = color_eyre::install() {
        eprintln!("failed to install error reporting: {e}");
    }

    match run(&cli) {
        Ok(()) => {}
        Err(err) => {
            if cli.json {
                println!("{}", error_fmt::format_error_json(&err));
            } else {
                eprintln!("{}", error_fmt::humanize(&err));
            }
            std::process::exit(error_fmt::exit_code_for_error(&err));
        }
    }
}

fn run(cli: &Cli) -> eyre::Result<()> {
    let cfg = load_config(cli)?;
    init_tracing(cli, &cfg.logging);

    match &cli.cmd {
        Commands::Validate => {
            cfg.validate()?;
            if cli.json {
                println!("{}", serde_json::json!({ "config": "ok" }));
            } else {
                let shown = cli.config.as_deref().unwrap_or(Path::new(DEFAULT_CONFIG_PATH));
                println!("config ok: {}", shown.display());
            }
            Ok(())
        }
        Commands::Count {
            frames,
            hold_ms,
            per_frame,
            timeout_ms,
            realtime,
        } => {
            cfg.validate()?;
            let summary = count::run_count(
                &cfg,
                frames,
                *hold_ms,
                *per_frame,
                Duration::from_millis(*timeout_ms),
                *realtime,
                cli.json,
            )?;
            if cli.json {
                println!("{}", count::summary_json(&summary));
            } else {
                println!(
                    "Counted {} reps over {} frames (final state: {})",
                    summary.reps, summary.frames, summary.last_state
                );
            }
            Ok(())
        }
        Commands::Project {
            frames,
            content,
            container,
            mirror,
        } => {
            let content = cli::parse_size(content)?;
            let container = cli::parse_size(container)?;
            let mirror = *mirror || cfg.display.mirror;
            let frames_out = project::run_project(
                frames,
                cfg.detection.fps,
                content,
                container,
                mirror,
                cli.json,
            )?;
            tracing::info!(frames = frames_out, "projection complete");
            Ok(())
        }
    }
}

const DEFAULT_CONFIG_PATH: &str = "etc/reptrack.toml";

/// Load the TOML config. With no `--config` flag, a missing file at the
/// default path falls back to built-in defaults; an explicitly given path
/// must exist, even when it equals the default.
fn load_config(cli: &Cli) -> eyre::Result<reptrack_config::Config> {
    let path = match cli.config.as_deref() {
        Some(path) => {
            if !path.exists() {
                eyre::bail!("config file not found: {}", path.display());
            }
            path
        }
        None => {
            let path = Path::new(DEFAULT_CONFIG_PATH);
            if !path.exists() {
                return Ok(reptrack_config::Config::default());
            }
            path
        }
    };
    let text = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read config {}", path.display()))?;
    let cfg = reptrack_config::load_toml(&text)
        .wrap_err_with(|| format!("failed to parse config {}", path.display()))?;
    Ok(cfg)
}

/// Console logging per CLI flags, plus an optional JSON file sink from the
/// config's [logging] section.
fn init_tracing(cli: &Cli, logging: &reptrack_config::Logging) {
    let level = logging.level.as_deref().unwrap_or(&cli.log_level);
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let console = if cli.json {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        fmt::layer().with_writer(std::io::stderr).boxed()
    };

    let file_layer = logging.file.as_deref().map(|path| {
        let path = std::path::Path::new(path);
        let dir = path.parent().unwrap_or_else(|| std::path::Path::new("."));
        let name = path.file_name().unwrap_or_else(|| "reptrack.log".as_ref());
        let appender = match logging.rotation.as_deref() {
            Some("daily") => tracing_appender::rolling::daily(dir, name),
            Some("hourly") => tracing_appender::rolling::hourly(dir, name),
            _ => tracing_appender::rolling::never(dir, name),
        };
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let _ = FILE_GUARD.set(guard);
        fmt::layer().json().with_writer(writer).boxed()
    });

    let registry = tracing_subscriber::registry().with(filter).with(console);
    if let Some(file_layer) = file_layer {
        let _ = registry.with(file_layer).try_init();
    } else {
        let _ = registry.try_init();
    }
}
