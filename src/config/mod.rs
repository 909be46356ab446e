pub mod settings;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use settings::LogFormat;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "sumlog")]
#[command(about = "Add two numbers or echo a message to stdout")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Enable verbose diagnostics")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Path to a TOML settings file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, value_enum, help = "Diagnostics format (overrides settings)")]
    pub log_format: Option<LogFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the sum of two numbers
    Sum {
        #[arg(allow_negative_numbers = true)]
        a: String,
        #[arg(allow_negative_numbers = true)]
        b: String,
    },
    /// Print a message verbatim
    Log {
        #[arg(allow_hyphen_values = true)]
        message: String,
    },
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn parses_negative_operands() {
        let cli = CliConfig::try_parse_from(["sumlog", "sum", "-1", "-2"]).unwrap();
        match cli.command {
            Command::Sum { a, b } => {
                assert_eq!(a, "-1");
                assert_eq!(b, "-2");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parses_log_with_global_flags() {
        let cli = CliConfig::try_parse_from([
            "sumlog",
            "log",
            "!@#$%^&*()",
            "--verbose",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.log_format, Some(LogFormat::Json));
        assert!(matches!(cli.command, Command::Log { ref message } if message == "!@#$%^&*()"));
    }

    #[test]
    fn accepts_empty_message() {
        let cli = CliConfig::try_parse_from(["sumlog", "log", ""]).unwrap();
        assert!(matches!(cli.command, Command::Log { ref message } if message.is_empty()));
    }
}
