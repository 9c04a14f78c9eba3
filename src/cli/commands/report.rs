use crate::api::ApiClient;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::session::Session;
use crate::ui::messages;
use std::fs;
use std::path::Path;

/// Handle the `report` command: fetch the backend-rendered PDF and save it.
/// The file is written only after the full body arrived, so a failed
/// download never leaves a partial file behind.
pub fn handle(cmd: &Commands, cfg: &Config, session: Option<&Session>) -> AppResult<()> {
    if let Commands::Report { id, out, force } = cmd {
        let out = out
            .clone()
            .unwrap_or_else(|| format!("report_{}.pdf", id));

        if Path::new(&out).exists() && !force {
            return Err(AppError::OutputExists(out));
        }

        let client = ApiClient::new(cfg, session)?;
        let res = client.download_pdf(*id);
        super::hint_login_if_unauthenticated(&res, session);
        let bytes = res?;

        fs::write(&out, &bytes)?;
        messages::success(format!("PDF report saved to {}", out));
    }
    Ok(())
}
