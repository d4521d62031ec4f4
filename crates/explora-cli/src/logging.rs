//! Logging setup for the `explora` binary.

use std::path::Path;

use tracing_appender::rolling;
use tracing_subscriber::{fmt, prelude::*, registry::Registry, EnvFilter};

/// Initialize stderr logging, plus JSON file logging when `log_dir` is set.
///
/// `RUST_LOG` takes precedence over `level`.
pub fn init_logging(level: tracing::Level, log_dir: Option<&Path>) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));

    let console_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);
    let registry = Registry::default().with(env_filter).with(console_layer);

    match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let file_appender = rolling::daily(dir, "explora.log");
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_writer(file_appender)
                        .with_target(true)
                        .with_thread_ids(true),
                )
                .try_init()?;
        }
        None => registry.try_init()?,
    }

    Ok(())
}
