use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use std::path::Path;
use std::process::Command;

fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

fn launch_editor(editor: &str, path: &Path) -> bool {
    Command::new(editor)
        .arg(path)
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            println!("📄 Current configuration:\n");
            let yaml =
                serde_yaml::to_string(&cfg).map_err(|e| AppError::Config(e.to_string()))?;
            println!("{}", yaml);
        }

        if *edit_config {
            let fallback = default_editor();
            let chosen = editor.clone().unwrap_or_else(|| fallback.clone());

            if launch_editor(&chosen, &path) {
                messages::success(format!("Configuration updated with '{}'", chosen));
            } else if chosen != fallback {
                messages::warning(format!(
                    "Editor '{}' not available, trying '{}'",
                    chosen, fallback
                ));
                if launch_editor(&fallback, &path) {
                    messages::success(format!("Configuration updated with '{}'", fallback));
                } else {
                    return Err(AppError::Config(format!(
                        "could not launch an editor ('{}' or '{}')",
                        chosen, fallback
                    )));
                }
            } else {
                return Err(AppError::Config(format!(
                    "could not launch editor '{}'",
                    chosen
                )));
            }
        }
    }

    Ok(())
}
