//! CLI entrypoint for BioGenie
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use biogenie_application::{
    AuthService, ObjectStorage, ResolveLabVideoUseCase, SessionController, StaticLocation,
};
use biogenie_infrastructure::{
    BackendMode, ConfigLoader, FileConfig, GoTrueAuthService, InMemoryAuthService,
    PublicObjectStorage, SessionStore, Severity,
};
use biogenie_presentation::{
    BackendArg, Cli, OutputConfig, ProgressReporter, ReplConfig, Shell, SimpleProgress,
};
use clap::Parser;
use std::io::IsTerminal;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        match ConfigLoader::load(cli.config.as_ref()) {
            Ok(config) => config,
            Err(e) => bail!("Failed to load configuration: {}", e),
        }
    };

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(cli.verbose, &config);

    info!("Starting BioGenie");

    let mut fatal = false;
    for issue in config.validate() {
        match issue.severity {
            Severity::Error => {
                eprintln!("config error: {}", issue.message);
                fatal = true;
            }
            Severity::Warning => eprintln!("config warning: {}", issue.message),
        }
    }
    if fatal {
        bail!("Invalid configuration. Run with --show-config to see which files were read.");
    }

    // === Dependency Injection ===
    let timeout = Duration::from_secs(config.backend.timeout_seconds);
    let storage = Arc::new(match config.backend.url() {
        Some(url) => PublicObjectStorage::new(url, timeout)?,
        None => PublicObjectStorage::unconfigured(),
    });

    let mode = match cli.backend {
        Some(BackendArg::Remote) => BackendMode::Remote,
        Some(BackendArg::Memory) => BackendMode::Memory,
        None => config.backend.parse_mode().0,
    };
    info!("Using {} auth backend", mode);

    match mode {
        BackendMode::Remote => {
            let Some(url) = config.backend.url() else {
                bail!("The remote backend needs `[backend] url` (or BIOGENIE_BACKEND__URL).");
            };
            let mut auth = GoTrueAuthService::new(url, config.backend.anon_key(), timeout)?;
            if let Some(path) = config.session_file() {
                auth = auth.with_session_store(SessionStore::new(path));
            }
            run(Arc::new(auth), storage, &cli, &config).await
        }
        BackendMode::Memory => {
            run(Arc::new(InMemoryAuthService::new()), storage, &cli, &config).await
        }
    }
}

async fn run<A, S>(auth: Arc<A>, storage: Arc<S>, cli: &Cli, config: &FileConfig) -> Result<()>
where
    A: AuthService + 'static,
    S: ObjectStorage + 'static,
{
    let show_progress = !cli.quiet && config.repl.show_progress;
    let location = StaticLocation::from_url(cli.link.as_deref().unwrap_or_default());

    let mut controller = SessionController::new(auth)
        .with_location(Arc::new(location))
        .with_config(config.behavior());
    if show_progress {
        controller = if std::io::stdout().is_terminal() {
            controller.with_progress(Arc::new(ProgressReporter::new()))
        } else {
            controller.with_progress(Arc::new(SimpleProgress))
        };
    }
    let controller = Arc::new(controller);

    if let Err(e) = controller.restore_session().await {
        warn!("Could not restore session: {}", e);
    }

    let videos = ResolveLabVideoUseCase::new(storage, controller.config());
    let shell = Shell::new(controller, videos)
        .with_config(ReplConfig {
            show_progress,
            history_file: config.repl.history_path(),
        })
        .with_output(OutputConfig {
            color: !cli.no_color && config.output.color,
        });

    shell.run().await?;
    Ok(())
}

/// Initialize logging based on verbosity level, optionally into a daily log file
fn init_logging(verbose: u8, config: &FileConfig) -> Option<WorkerGuard> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let log_dir = config
        .logging
        .file
        .then(|| config.logging.log_dir())
        .flatten();

    match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "biogenie.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .init();
            None
        }
    }
}
