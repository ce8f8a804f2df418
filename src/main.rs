//! Library Desk - console catalog and loan manager

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt::writer::BoxMakeWriter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

use library_desk::{config::LoggingConfig, AppConfig, Console, Library};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    // Held until exit so buffered file logs get flushed
    let _log_guard = init_tracing(&config.logging);

    tracing::info!("Starting Library Desk v{}", env!("CARGO_PKG_VERSION"));
    tracing::debug!(?config, "Configuration loaded");

    let mut library = Library::with_policy(config.loans);
    if config.catalog.seed_demo_data {
        library.seed_demo_data();
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Console::new(&mut library, stdin.lock(), stdout.lock())
        .run()
        .context("Console session failed")?;

    Ok(())
}

/// Logs go to stderr (or a daily file) so they never mix with the menus on
/// stdout.
fn init_tracing(logging: &LoggingConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("library_desk={}", logging.level).into());

    let (writer, guard, ansi) = match &logging.directory {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "library-desk.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            (BoxMakeWriter::new(non_blocking), Some(guard), false)
        }
        None => (BoxMakeWriter::new(std::io::stderr), None, true),
    };

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(ansi);
    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry.with(layer.json()).init();
    } else {
        registry.with(layer).init();
    }

    guard
}
