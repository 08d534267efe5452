//! Gatehouse - standalone auth window.
//!
//! Binds the form interaction controller to the login/signup GUI:
//! password visibility toggles, client-side validation with dismissible
//! notices, and the optional presentation pack (entrance animation plus
//! simulated submit feedback).

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use directories::ProjectDirs;
use gatehouse_core::ControllerConfig;
use gatehouse_ui::run_app;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Gatehouse - auth form demo window
#[derive(Parser, Debug)]
#[command(name = "gatehouse", version, about)]
struct Args {
    /// Path to a JSON controller configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Disable the presentation pack (entrance animation, simulated submit)
    #[arg(long)]
    no_presentation: bool,

    /// Disable the validation pack (form rule checks)
    #[arg(long)]
    no_validation: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// Get the logs directory path.
fn logs_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "gatehouse", "Gatehouse").map(|dirs| dirs.data_dir().join("logs"))
}

/// Initialize logging with file rotation, console fallback.
fn init_logging(args: &Args) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let log_level = if args.debug { "debug" } else { &args.log_level };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("gatehouse={},warn", log_level)));

    if let Some(log_dir) = logs_dir() {
        if fs::create_dir_all(&log_dir).is_ok() {
            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .max_log_files(5)
                .filename_prefix("gatehouse")
                .filename_suffix("log")
                .build(&log_dir)
                .ok();

            if let Some(appender) = file_appender {
                let (non_blocking, guard) = tracing_appender::non_blocking(appender);

                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(fmt::layer().with_writer(std::io::stdout))
                    .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
                    .init();

                tracing::info!("Logging to {:?}", log_dir);
                return Some(guard);
            }
        }
    }

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    tracing::warn!("File logging unavailable, using console only");
    None
}

/// Load the controller configuration, applying CLI pack overrides.
fn load_config(args: &Args) -> anyhow::Result<ControllerConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("failed to parse config {}", path.display()))?
        }
        None => ControllerConfig::default(),
    };

    if args.no_presentation {
        config.presentation = false;
    }
    if args.no_validation {
        config.validation = false;
    }

    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _guard = init_logging(&args);

    let config = load_config(&args)?;
    tracing::info!(
        presentation = config.presentation,
        validation = config.validation,
        "starting auth window"
    );

    run_app(config).context("auth window exited with an error")
}
