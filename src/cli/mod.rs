//! CLI module - Command-line interface for cinecat
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

pub use commands::{cmd_create_user, cmd_import, cmd_show};

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// cinecat - Movie and series catalog server
#[derive(Parser)]
#[command(name = "cinecat")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP server (default)
    Serve,

    /// Create default config file
    #[command(alias = "--init")]
    Init,

    /// Print an aggregated content record as JSON
    Show {
        /// Content ID
        id: i32,
        /// Print the preview instead of the full record
        #[arg(long)]
        preview: bool,
    },

    /// Register a user account
    CreateUser { username: String, password: String },

    /// Load a JSON catalog document into the database
    Import {
        /// Path to the catalog document
        path: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_show_with_preview_flag() {
        let cli = Cli::try_parse_from(["cinecat", "show", "7", "--preview"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Show { id: 7, preview: true })
        ));
    }

    #[test]
    fn no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["cinecat"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn create_user_takes_two_positionals() {
        let cli = Cli::try_parse_from(["cinecat", "create-user", "alice", "s3cret-pass"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::CreateUser { .. })));
        assert!(Cli::try_parse_from(["cinecat", "create-user", "alice"]).is_err());
    }
}
