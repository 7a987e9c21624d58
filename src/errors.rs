//! Unified application error type.
//! All modules (store, core, web, cli) return AppError to keep the error
//! handling consistent and easy to manage.

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
    // Store-related
    // ---------------------------
    #[error("Check-in log error: {0}")]
    Store(#[from] csv::Error),

    #[error("Malformed check-in row {0}: expected at least name, ID and time")]
    MalformedRow(usize),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid check-in window: {0}")]
    InvalidWindow(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Server errors
    // ---------------------------
    #[error("Server error: {0}")]
    Server(String),
}

pub type AppResult<T> = Result<T, AppError>;
