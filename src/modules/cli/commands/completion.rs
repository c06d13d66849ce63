//! Hidden command to generate shell completions.

use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use mongohook_core::MongoHookError;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Generate shell completion scripts.
///
/// Hidden from normal `--help` output; packaging scripts call it as
/// `mongohook completion zsh -o _mongohook`.
#[derive(Args, Debug)]
pub struct CompletionCommand {
    /// Shell to generate completions for (e.g. bash, zsh)
    #[arg(value_enum)]
    pub shell: Shell,

    /// Write the script to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl CompletionCommand {
    pub fn execute(&self) -> Result<(), MongoHookError> {
        match &self.output {
            Some(path) => {
                let mut file = File::create(path).map_err(|e| {
                    MongoHookError::Config(format!(
                        "Cannot write completions to {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                self.write_to(&mut file);
                info!("Wrote {} completions to {}", self.shell, path.display());
                Ok(())
            }
            None => {
                self.write_to(&mut std::io::stdout());
                Ok(())
            }
        }
    }

    fn write_to(&self, out: &mut dyn Write) {
        let mut cmd = crate::Cli::command();
        let bin_name = cmd.get_name().to_string();
        generate(self.shell, &mut cmd, bin_name, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn test_bash_completion_lists_profile_commands() {
        let cmd = CompletionCommand {
            shell: Shell::Bash,
            output: None,
        };
        let mut out = Vec::new();
        cmd.write_to(&mut out);
        let script = String::from_utf8(out).unwrap();
        assert!(script.contains("mongohook"));
        for sub in ["uri", "ping", "list"] {
            assert!(script.contains(sub), "missing {}", sub);
        }
        assert!(script.contains("--no-reuse"));
    }

    #[test]
    fn test_completion_written_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_mongohook");

        let cli = Cli::try_parse_from([
            "mongohook",
            "completion",
            "zsh",
            "-o",
            path.to_str().unwrap(),
        ])
        .unwrap();
        match cli.command {
            Commands::Completion(cmd) => cmd.execute().unwrap(),
            other => panic!("unexpected command: {:?}", other),
        }

        let script = std::fs::read_to_string(&path).unwrap();
        assert!(script.starts_with("#compdef mongohook"));
    }

    #[test]
    fn test_unwritable_output_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let cmd = CompletionCommand {
            shell: Shell::Fish,
            output: Some(dir.path().join("missing").join("mongohook.fish")),
        };
        let err = cmd.execute().unwrap_err();
        assert!(matches!(err, MongoHookError::Config(msg) if msg.contains("mongohook.fish")));
    }
}
