//! chemeq library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod session;
pub mod ui;
pub mod utils;
pub mod view;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use session::{Session, SessionStore};

/// Central command dispatcher.
/// The session context is loaded once by `run()` and threaded through
/// explicitly; no handler reaches for global state.
pub fn dispatch(
    cli: &Cli,
    cfg: &Config,
    store: &SessionStore,
    session: Option<&Session>,
) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Register { .. } => cli::commands::register::handle(&cli.command, cfg, store),
        Commands::Login { .. } => cli::commands::login::handle(&cli.command, cfg, store),
        Commands::Logout => cli::commands::logout::handle(store),
        Commands::Status => cli::commands::status::handle(cfg, store, session),
        Commands::Upload { .. } => cli::commands::upload::handle(&cli.command, cfg, session),
        Commands::Preview { .. } => cli::commands::preview::handle(&cli.command),
        Commands::History { .. } => cli::commands::history::handle(&cli.command, cfg, session),
        Commands::Show { .. } => cli::commands::show::handle(&cli.command, cfg, session),
        Commands::Report { .. } => cli::commands::report::handle(&cli.command, cfg, session),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load config ONCE per invocation
    let mut cfg = Config::load()?;

    // Apply the per-invocation API endpoint override
    if let Some(url) = &cli.api_url {
        cfg.api_url = url.trim_end_matches('/').to_string();
    }

    // Load the persisted session once and thread it through the dispatcher.
    // A file that no longer parses counts as no session: commands proceed
    // unauthenticated and `logout` can still remove it.
    let store = SessionStore::new();
    let session = match store.load() {
        Ok(session) => session,
        Err(e) => {
            ui::messages::warning(format!("Ignoring unreadable session file: {}", e));
            None
        }
    };

    dispatch(&cli, &cfg, &store, session.as_ref())
}
