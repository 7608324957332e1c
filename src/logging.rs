use std::fs::{self, File};
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Initializes tracing to the configured log file. The terminal belongs to
/// the UI, so nothing is written to stdout/stderr. `RUST_LOG` overrides the
/// configured level.
pub fn init(config: &LoggingConfig) -> std::io::Result<()> {
    let path = config.file_path();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = File::create(&path)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("datapulse={}", config.level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .init();

    tracing::info!(path = %path.display(), "DataPulse v{}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
