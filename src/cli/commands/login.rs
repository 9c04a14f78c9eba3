use crate::api::ApiClient;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::session::{Session, SessionStore};
use crate::ui::messages;

/// Handle the `login` command. On success the token is written to the
/// session file; on failure the backend's message is surfaced verbatim.
pub fn handle(cmd: &Commands, cfg: &Config, store: &SessionStore) -> AppResult<()> {
    if let Commands::Login { username, password } = cmd {
        let password = super::resolve_password(password.as_deref())?;

        let client = ApiClient::new(cfg, None)?;
        let auth = client.login(username, &password)?;

        store.save(&Session {
            token: auth.token,
            username: auth.username.clone(),
        })?;

        messages::success(format!("Logged in as '{}'", auth.username));
    }
    Ok(())
}
