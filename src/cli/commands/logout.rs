use crate::errors::AppResult;
use crate::session::SessionStore;
use crate::ui::messages;

/// Handle the `logout` command: remove the session file.
pub fn handle(store: &SessionStore) -> AppResult<()> {
    if store.clear()? {
        messages::success("Logged out");
    } else {
        messages::warning("No active session");
    }
    Ok(())
}
