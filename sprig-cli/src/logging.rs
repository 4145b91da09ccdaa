//! Logging initialisation for the sprig CLI.
//!
//! Installs a global `tracing` subscriber writing to stderr, so stdout only
//! carries the rendered forest. `RUST_LOG` selects the level (default
//! `info`) and `SPRIG_LOG_FORMAT` chooses between `human` and `json` output.
//! Records emitted through the `log` facade are bridged into `tracing`.

use std::{env, str::FromStr, sync::OnceLock};

use thiserror::Error;
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, Layer, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Environment variable selecting the log format.
pub const LOG_FORMAT_ENV: &str = "SPRIG_LOG_FORMAT";

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Errors raised while initialising structured logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// `SPRIG_LOG_FORMAT` held invalid UTF-8.
    #[error("environment variable `{name}` contained invalid UTF-8: {source}")]
    InvalidUnicode {
        /// Name of the offending environment variable.
        name: &'static str,
        /// Underlying lookup failure.
        #[source]
        source: env::VarError,
    },
    /// `SPRIG_LOG_FORMAT` named an unknown format.
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat {
        /// Raw value supplied by the user.
        provided: String,
    },
}

/// Output format of diagnostic logs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Plain text lines.
    #[default]
    Human,
    /// Newline-delimited JSON objects.
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            other => Err(LoggingError::UnsupportedFormat {
                provided: other.to_owned(),
            }),
        }
    }
}

impl LogFormat {
    /// Reads the format from `SPRIG_LOG_FORMAT`, defaulting to human output.
    ///
    /// # Errors
    /// Returns [`LoggingError`] when the variable is not valid UTF-8 or names
    /// an unknown format.
    pub fn from_env() -> Result<Self, LoggingError> {
        match env::var(LOG_FORMAT_ENV) {
            Ok(raw) => raw.parse(),
            Err(env::VarError::NotPresent) => Ok(Self::default()),
            Err(source @ env::VarError::NotUnicode(_)) => Err(LoggingError::InvalidUnicode {
                name: LOG_FORMAT_ENV,
                source,
            }),
        }
    }
}

/// Installs global structured logging unless it is already configured.
///
/// Repeated calls are no-ops. When another subscriber already owns the global
/// slot, that subscriber is kept.
///
/// # Errors
/// Returns [`LoggingError`] if `SPRIG_LOG_FORMAT` is malformed.
pub fn init_logging() -> Result<(), LoggingError> {
    if INITIALISED.get().is_some() {
        return Ok(());
    }

    let format = LogFormat::from_env()?;
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);
    let fmt_layer = match format {
        LogFormat::Human => fmt_layer.boxed(),
        LogFormat::Json => fmt_layer
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .boxed(),
    };

    // A logger installed elsewhere keeps the `log` slot.
    let _ = LogTracer::init();

    if let Err(source) = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
    {
        tracing::debug!(%source, "structured logging already configured elsewhere");
    }
    let _ = INITIALISED.set(());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case("human", LogFormat::Human)]
    #[case("HUMAN", LogFormat::Human)]
    #[case(" json ", LogFormat::Json)]
    fn parses_supported_formats(#[case] raw: &str, #[case] expected: LogFormat) {
        assert_eq!(raw.parse::<LogFormat>().expect("format must parse"), expected);
    }

    #[rstest]
    #[case("xml")]
    #[case("")]
    fn rejects_unknown_formats(#[case] raw: &str) {
        let err = raw.parse::<LogFormat>().expect_err("format must be rejected");
        assert!(matches!(err, LoggingError::UnsupportedFormat { .. }));
    }

    #[test]
    fn init_logging_is_idempotent() {
        init_logging().expect("logging must initialise");
        init_logging().expect("subsequent calls must be no-ops");
    }
}
