use clap::{Parser, Subcommand};

/// Command-line interface definition for chemeq
/// CLI client for the Chemical Equipment Analyzer REST service
#[derive(Parser)]
#[command(
    name = "chemeq",
    version = env!("CARGO_PKG_VERSION"),
    about = "A CLI client for the Chemical Equipment Analyzer: upload equipment CSVs, browse summaries, download PDF reports",
    long_about = None
)]
pub struct Cli {
    /// Override the API base URL (useful for tests or alternate deployments)
    #[arg(global = true, long = "api-url", value_name = "URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration directory and default config file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL)
        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Register a new account and store the issued session token
    Register {
        /// Username for the new account
        username: String,

        /// Email address (optional, sent empty when omitted)
        #[arg(long, help = "Email address for the new account")]
        email: Option<String>,

        /// Password (prompted on stdin when omitted)
        #[arg(long, help = "Password (prompted interactively when omitted)")]
        password: Option<String>,
    },

    /// Log in and store the issued session token
    Login {
        /// Username
        username: String,

        /// Password (prompted on stdin when omitted)
        #[arg(long, help = "Password (prompted interactively when omitted)")]
        password: Option<String>,
    },

    /// Log out and remove the stored session
    Logout,

    /// Show the current session and configured API endpoint
    Status,

    /// Upload an equipment CSV file and display the computed summary
    Upload {
        /// Path to the CSV file (must end in .csv)
        file: String,

        /// Print the raw summary as pretty JSON instead of rendering it
        #[arg(long, help = "Emit the summary as pretty-printed JSON")]
        json: bool,
    },

    /// Preview a local CSV file without uploading it
    Preview {
        /// Path to the CSV file (must end in .csv)
        file: String,

        /// Number of data rows to show (max 100)
        #[arg(
            long,
            default_value_t = 10,
            help = "Number of data rows to show (max 100)"
        )]
        rows: usize,
    },

    /// List the five most recent upload summaries
    History {
        /// Print the history as pretty JSON instead of rendering it
        #[arg(long, help = "Emit the history as pretty-printed JSON")]
        json: bool,
    },

    /// Display a stored summary by id
    Show {
        /// Summary id (see `chemeq history`)
        id: i64,

        /// Print the raw summary as pretty JSON instead of rendering it
        #[arg(long, help = "Emit the summary as pretty-printed JSON")]
        json: bool,
    },

    /// Download the PDF report for a summary
    Report {
        /// Summary id (see `chemeq history`)
        id: i64,

        /// Output file path (default: report_<ID>.pdf)
        #[arg(long, value_name = "FILE")]
        out: Option<String>,

        /// Overwrite the output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
