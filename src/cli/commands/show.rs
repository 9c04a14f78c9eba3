use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core;
use crate::errors::AppResult;
use crate::session::Session;
use crate::view;

/// Handle the `show` command: re-fetch the stored summary and render it.
pub fn handle(cmd: &Commands, cfg: &Config, session: Option<&Session>) -> AppResult<()> {
    if let Commands::Show { id, json } = cmd {
        let res = core::history::fetch_summary(cfg, session, *id);
        super::hint_login_if_unauthenticated(&res, session);
        let summary = res?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            view::summary::render(&summary);
        }
    }
    Ok(())
}
