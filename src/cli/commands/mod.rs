pub mod config;
pub mod history;
pub mod init;
pub mod login;
pub mod logout;
pub mod preview;
pub mod register;
pub mod report;
pub mod show;
pub mod status;
pub mod upload;

use crate::errors::{AppError, AppResult};
use crate::session::Session;
use crate::ui::messages;
use std::io::{self, Write};

/// Take the password from the flag or prompt for it on stdin.
pub(crate) fn resolve_password(flag: Option<&str>) -> AppResult<String> {
    if let Some(password) = flag {
        if password.is_empty() {
            return Err(AppError::MissingCredentials);
        }
        return Ok(password.to_string());
    }

    print!("Password: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let password = line.trim_end_matches(['\r', '\n']).to_string();
    if password.is_empty() {
        return Err(AppError::MissingCredentials);
    }
    Ok(password)
}

/// After a 401 with no stored session, point the user at `login`.
/// The request itself already went out unauthenticated by design.
pub(crate) fn hint_login_if_unauthenticated<T>(res: &AppResult<T>, session: Option<&Session>) {
    if session.is_none()
        && matches!(res, Err(AppError::Api { status: 401, .. }))
    {
        messages::info("No stored session. Run 'chemeq login <username>' first.");
    }
}
