use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use crate::commands::{CompletionsCommand, ConfigureCommand, ExportCommand, ShowCommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "awscreds", version, about = "Manage AWS region and credential configuration from the terminal", long_about = None, arg_required_else_help = false)]
pub struct Cli {
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Increase verbosity (-v info, -vv debug, -vvv trace)")]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    #[command(about = "Show the stored AWS configuration")]
    Show(ShowCommand),
    #[command(about = "Edit and save the AWS configuration interactively")]
    Configure(ConfigureCommand),
    #[command(about = "Export the stored configuration to the AWS credentials and config files")]
    Export(ExportCommand),
    #[command(about = "Generate shell completion scripts for awscreds")]
    Completions(CompletionsCommand),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let command = self
            .command
            .unwrap_or(Commands::Show(ShowCommand { json: false }));

        match command {
            Commands::Show(cmd) => cmd.execute().await,
            Commands::Configure(cmd) => cmd.execute().await,
            Commands::Export(cmd) => cmd.execute().await,
            Commands::Completions(cmd) => {
                cmd.execute();
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, error::ErrorKind};

    #[test]
    fn test_default_command_is_show() {
        let cli = Cli {
            verbose: 0,
            command: None,
        };

        match cli
            .command
            .unwrap_or(Commands::Show(ShowCommand { json: false }))
        {
            Commands::Show(cmd) => assert!(!cmd.json),
            _ => panic!("Expected Show command as default"),
        }
    }

    #[test]
    fn test_no_command_defaults_to_show() {
        let cli = Cli::try_parse_from(["awscreds"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_show_command_parsing() {
        let cli = Cli::try_parse_from(["awscreds", "show"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Show(_))));
    }

    #[test]
    fn test_show_json_flag() {
        let cli = Cli::try_parse_from(["awscreds", "show", "--json"]).unwrap();
        match cli.command {
            Some(Commands::Show(cmd)) => assert!(cmd.json),
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn test_configure_command_parsing() {
        let cli = Cli::try_parse_from(["awscreds", "configure"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Configure(_))));
    }

    #[test]
    fn test_export_profile_default_value() {
        let cli = Cli::try_parse_from(["awscreds", "export"]).unwrap();
        match cli.command {
            Some(Commands::Export(cmd)) => assert_eq!(cmd.profile, "default"),
            _ => panic!("Expected Export command"),
        }
    }

    #[test]
    fn test_export_profile_custom_value() {
        let cli = Cli::try_parse_from(["awscreds", "export", "--profile", "production"]).unwrap();
        match cli.command {
            Some(Commands::Export(cmd)) => assert_eq!(cmd.profile, "production"),
            _ => panic!("Expected Export command"),
        }
    }

    #[test]
    fn test_export_profile_short_flag() {
        let cli = Cli::try_parse_from(["awscreds", "export", "-p", "dev"]).unwrap();
        match cli.command {
            Some(Commands::Export(cmd)) => assert_eq!(cmd.profile, "dev"),
            _ => panic!("Expected Export command"),
        }
    }

    #[test]
    fn test_completions_command_parsing() {
        let cli = Cli::try_parse_from(["awscreds", "completions", "bash"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Completions(_))));
    }

    #[test]
    fn test_command_structure_validation() {
        let cmd = Cli::command();
        cmd.debug_assert();
    }

    #[test]
    fn test_invalid_command_fails() {
        let result = Cli::try_parse_from(["awscreds", "invalid"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_help_flag_works() {
        let result = Cli::try_parse_from(["awscreds", "--help"]);
        assert!(result.is_err());
        if let Err(e) = result {
            assert_eq!(e.kind(), ErrorKind::DisplayHelp);
        }
    }

    #[test]
    fn test_version_flag_works() {
        let result = Cli::try_parse_from(["awscreds", "--version"]);
        assert!(result.is_err());
        if let Err(e) = result {
            assert_eq!(e.kind(), ErrorKind::DisplayVersion);
        }
    }

    #[test]
    fn test_verbose_flag_single() {
        let cli = Cli::try_parse_from(["awscreds", "-v", "show"]).unwrap();
        assert_eq!(cli.verbose, 1);
    }

    #[test]
    fn test_verbose_flag_multiple() {
        let cli = Cli::try_parse_from(["awscreds", "-vvv", "show"]).unwrap();
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_verbose_default_zero() {
        let cli = Cli::try_parse_from(["awscreds", "show"]).unwrap();
        assert_eq!(cli.verbose, 0);
    }
}
