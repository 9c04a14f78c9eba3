use crate::api::ApiClient;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::session::{Session, SessionStore};
use crate::ui::messages;

/// Handle the `register` command: create the account, then persist the
/// issued token exactly like a login would.
pub fn handle(cmd: &Commands, cfg: &Config, store: &SessionStore) -> AppResult<()> {
    if let Commands::Register {
        username,
        email,
        password,
    } = cmd
    {
        let password = super::resolve_password(password.as_deref())?;

        let client = ApiClient::new(cfg, None)?;
        let auth = client.register(username, &password, email.as_deref())?;

        store.save(&Session {
            token: auth.token,
            username: auth.username.clone(),
        })?;

        messages::success(format!("Registered and logged in as '{}'", auth.username));
    }
    Ok(())
}
