//! Unified application error type.
//! All modules (api, core, cli, session) return AppError to keep the error
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
    // Input validation
    // ---------------------------
    #[error("Please select a CSV file: '{0}' does not end in .csv")]
    InvalidCsvFile(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Username and password are required")]
    MissingCredentials,

    #[error("Output file already exists: {0} (use --force to overwrite)")]
    OutputExists(String),

    // ---------------------------
    // Backend-reported
    // ---------------------------
    #[error("{message}")]
    Api { status: u16, message: String },

    // ---------------------------
    // Transport
    // ---------------------------
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    #[error("Failed to save configuration: {0}")]
    ConfigSave(String),

    // ---------------------------
    // Session errors
    // ---------------------------
    #[error("Failed to load session: {0}")]
    SessionLoad(String),

    #[error("Failed to save session: {0}")]
    SessionSave(String),

    // ---------------------------
    // Data handling
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
