//! CLI commands

mod completion;
mod list;
mod ping;
mod uri;

pub use completion::CompletionCommand;
pub use list::{collect_entries, ListCommand, ProfileEntry};
pub use ping::PingCommand;
pub use uri::UriCommand;

use clap::{Parser, Subcommand};

/// mongohook - inspect and test MongoDB connection profiles
#[derive(Parser, Debug)]
#[command(name = "mongohook")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Connection profile file
    ///
    /// `MONGOHOOK_CONN_<ID>` environment variables take precedence over
    /// profiles in this file.
    #[arg(
        short = 'f',
        long = "file",
        global = true,
        default_value = "connections.yaml"
    )]
    pub file: String,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the redacted connection string of a profile
    Uri(UriCommand),

    /// Connect to a profile and run the liveness check
    Ping(PingCommand),

    /// List known connection profiles
    List(ListCommand),

    /// Generate shell completions
    #[command(hide = true)]
    Completion(CompletionCommand),
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongohook_core::DEFAULT_CONN_ID;

    #[test]
    fn test_cli_parse() {
        let cli = Cli::try_parse_from(["mongohook", "list"]);
        assert!(cli.is_ok());
        assert_eq!(cli.unwrap().file, "connections.yaml");
    }

    #[test]
    fn test_cli_with_file_after_subcommand() {
        let cli = Cli::try_parse_from(["mongohook", "uri", "-f", "prod.yaml"]).unwrap();
        assert_eq!(cli.file, "prod.yaml");
        match cli.command {
            Commands::Uri(cmd) => assert_eq!(cmd.conn_id, DEFAULT_CONN_ID),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_verbose_ping() {
        let cli = Cli::try_parse_from(["mongohook", "-v", "ping", "reporting"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Ping(cmd) if cmd.conn_id == "reporting"));
    }
}
