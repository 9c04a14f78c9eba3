use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core;
use crate::errors::AppResult;
use crate::session::Session;
use crate::view;

/// Handle the `history` command: fetch on every invocation, render at most
/// five entries.
pub fn handle(cmd: &Commands, cfg: &Config, session: Option<&Session>) -> AppResult<()> {
    if let Commands::History { json } = cmd {
        let res = core::history::fetch(cfg, session);
        super::hint_login_if_unauthenticated(&res, session);
        let entries = res?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        } else {
            view::history::render(&entries);
        }
    }
    Ok(())
}
