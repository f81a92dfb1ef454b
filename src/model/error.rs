//! Error types for the typewriter.
//!
//! Errors are split by how they surface:
//!
//! - [`ConfigError`] - raised synchronously when reveal is started with panel
//!   metrics that cannot produce any progress (zero row height, zero speed).
//! - [`AppError`] - top-level error for the demo binary, wrapping config file,
//!   logging and terminal failures.
//!
//! Misaligned row/line heights are **not** errors. They are logged as warnings
//! and reveal keeps running with degraded visual alignment.

use thiserror::Error;

/// Reveal configuration rejected by [`RevealEngine::start`].
///
/// Both variants carry the offending value so the message is actionable.
///
/// [`RevealEngine::start`]: crate::reveal::RevealEngine::start
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// Row height must be a positive, finite number.
    #[error("row height must be > 0 (got {0}); set the line height of the panel")]
    InvalidRowHeight(f64),

    /// Speed must be a positive, finite number, otherwise the reveal never ends.
    #[error("reveal speed must be > 0 (got {0})")]
    InvalidSpeed(f64),
}

/// Top-level error for the demo application.
///
/// # Examples
///
/// ```
/// use typewriter::model::error::{AppError, ConfigError};
///
/// let err: AppError = ConfigError::InvalidRowHeight(0.0).into();
/// assert!(err.to_string().contains("row height"));
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Reveal could not start.
    #[error("Invalid reveal configuration: {0}")]
    Config(#[from] ConfigError),

    /// Config file exists but could not be read or parsed.
    #[error("Failed to load configuration: {0}")]
    ConfigFile(#[from] crate::config::ConfigLoadError),

    /// Tracing subscriber could not be installed.
    #[error("Failed to initialize logging: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal or input file I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The terminal host failed.
    #[error(transparent)]
    Tui(#[from] crate::view::TuiError),
}
