use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core;
use crate::errors::AppResult;
use crate::session::Session;
use crate::ui::messages;
use crate::view;
use std::path::Path;

/// Handle the `upload` command: guard, submit once, render the summary.
pub fn handle(cmd: &Commands, cfg: &Config, session: Option<&Session>) -> AppResult<()> {
    if let Commands::Upload { file, json } = cmd {
        let res = core::upload::submit(cfg, session, Path::new(file));
        super::hint_login_if_unauthenticated(&res, session);
        let summary = res?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            messages::success(format!("Uploaded '{}'", summary.filename));
            println!();
            view::summary::render(&summary);
        }
    }
    Ok(())
}
