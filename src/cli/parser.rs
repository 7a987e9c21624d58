use clap::{Parser, Subcommand};

/// Command-line interface definition for rcheckin
/// Self-hosted attendance check-in page backed by a CSV log
#[derive(Parser)]
#[command(
    name = "rcheckin",
    version = env!("CARGO_PKG_VERSION"),
    about = "A tiny attendance check-in page: name + 6-digit ID, daily time window, CSV log",
    long_about = None
)]
pub struct Cli {
    /// Override the check-in log file (useful for tests or a custom path)
    #[arg(global = true, long = "file")]
    pub file: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and an empty check-in log
    Init,

    /// Manage the configuration file (view or validate)
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Validate the configuration file and window")]
        check: bool,
    },

    /// Run the check-in web page
    Serve {
        /// Listen address (host:port)
        #[arg(long = "addr", help = "Listen address, e.g. 127.0.0.1:8080")]
        addr: Option<String>,

        /// Check-in window override
        #[arg(
            long = "window",
            help = "Daily check-in window as START-END (HH:MM[:SS]), e.g. 18:30:00-19:30:00"
        )]
        window: Option<String>,
    },

    /// List recorded check-ins
    List {
        #[arg(long = "count", help = "Print only the number of records")]
        count: bool,
    },
}
