use crate::config::Config;
use crate::errors::AppResult;
use crate::session::{Session, SessionStore};
use crate::ui::messages;

/// Handle the `status` command: show session and endpoint, no network call.
pub fn handle(cfg: &Config, store: &SessionStore, session: Option<&Session>) -> AppResult<()> {
    match session {
        Some(s) => {
            messages::info(format!("Logged in as '{}'", s.username));
            println!("📄 Session file : {}", store.path().display());
        }
        None => {
            messages::info("Not logged in");
        }
    }
    println!("🌐 API URL      : {}", cfg.api_url);
    Ok(())
}
