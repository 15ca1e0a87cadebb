//! Unified application error type.
//! All modules (api, core, store, cli, utils) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Network / vendor API
    // ---------------------------
    /// Transport-level failure (DNS, refused connection, timeout),
    /// as opposed to an HTTP error response.
    #[error("Network error: {0}")]
    Transport(String),

    /// Non-success HTTP status, either non-retryable or with retries
    /// exhausted. Carries the last status and a truncated body snippet.
    #[error("HTTP {status} – {snippet}")]
    HttpStatus { status: u16, snippet: String },

    /// Login response missing token/client/uid. Never retried.
    #[error("Login response missing expected token/client/uid")]
    AuthIncomplete,

    #[error("Not logged in: run `rponto login` first")]
    MissingSession,

    #[error("Unexpected response shape: {0}")]
    BadResponse(String),

    // ---------------------------
    // Punch registration
    // ---------------------------
    #[error("No punch location available: {0}")]
    NoLocation(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Local store errors
    // ---------------------------
    #[error("Store error: {0}")]
    Store(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
