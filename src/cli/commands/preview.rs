use crate::cli::parser::Commands;
use crate::core;
use crate::errors::AppResult;
use crate::view;
use std::path::Path;

/// Handle the `preview` command: local only, nothing touches the network.
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Preview { file, rows } = cmd {
        let path = Path::new(file);
        core::upload::validate_csv_path(path)?;
        view::preview::render(path, *rows)?;
    }
    Ok(())
}
