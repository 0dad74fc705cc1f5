//! Command-line interface for the game server.

use clap::{Parser, Subcommand};

/// XOXO - tic-tac-toe over HTTP against an exhaustive-search engine
#[derive(Parser, Debug)]
#[command(name = "xoxo_server")]
#[command(about = "Tic-tac-toe game server with an exhaustive-search engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP game server
    Serve {
        /// Port to bind to
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Path to the SQLite database (created if it doesn't exist)
        #[arg(long, default_value = "xoxo.db")]
        db_path: String,
    },

    /// Apply pending database migrations and exit
    Migrate {
        /// Path to the SQLite database (created if it doesn't exist)
        #[arg(long, default_value = "xoxo.db")]
        db_path: String,
    },
}
