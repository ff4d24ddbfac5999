//! Logging and tracing initialization.

use std::{fs::OpenOptions, sync::Mutex};

use crate::{
    config::LoggingConfig,
    foundation::error::{FacepipeError, FacepipeResult},
};

/// Initialize the tracing subscriber with the given configuration.
///
/// `RUST_LOG` takes precedence over `config.level`. Calling this again after a
/// subscriber is installed is a no-op.
pub fn init_logging(config: &LoggingConfig) -> FacepipeResult<()> {
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false);

    let installed = match (&config.file, config.json) {
        (Some(path), json) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    FacepipeError::io(format!("open log file '{}': {e}", path.display()))
                })?;
            let builder = builder.with_ansi(false).with_writer(Mutex::new(file));
            if json {
                tracing::subscriber::set_global_default(builder.json().finish())
            } else {
                tracing::subscriber::set_global_default(builder.finish())
            }
        }
        (None, true) => tracing::subscriber::set_global_default(
            builder.with_writer(std::io::stderr).json().finish(),
        ),
        (None, false) => tracing::subscriber::set_global_default(
            builder.with_writer(std::io::stderr).finish(),
        ),
    };
    // Already installed by the host or an earlier call.
    installed.ok();
    Ok(())
}

/// Initialize logging with defaults (useful for tests and quick scripts).
pub fn init_default_logging() {
    let _ = init_logging(&LoggingConfig::default());
}
