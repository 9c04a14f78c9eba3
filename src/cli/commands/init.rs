use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file with the default API endpoint
pub fn handle(cfg: &Config) -> AppResult<()> {
    Config::init_all()?;

    println!("⚙️  Initializing chemeq…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🌐 API URL     : {}", cfg.api_url);

    messages::success("chemeq initialization completed");
    Ok(())
}
