//! Upload flow: client-side guards followed by a single best-effort
//! submission. Guard violations never reach the network; a failed submission
//! is terminal for the invocation and the chosen file is left untouched.

use crate::api::ApiClient;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::UploadSummary;
use crate::session::Session;
use std::ffi::OsStr;
use std::path::Path;

/// Pure client-side filter; the backend re-validates structurally.
/// The suffix check is ASCII case-insensitive.
pub fn validate_csv_path(path: &Path) -> AppResult<()> {
    if !path.is_file() {
        return Err(AppError::FileNotFound(path.display().to_string()));
    }
    let name = path
        .file_name()
        .and_then(OsStr::to_str)
        .unwrap_or_default();
    if !name.to_ascii_lowercase().ends_with(".csv") {
        return Err(AppError::InvalidCsvFile(name.to_string()));
    }
    Ok(())
}

/// Validate and submit the file. One attempt, no retry.
pub fn submit(cfg: &Config, session: Option<&Session>, path: &Path) -> AppResult<UploadSummary> {
    validate_csv_path(path)?;
    let client = ApiClient::new(cfg, session)?;
    client.upload(path)
}
