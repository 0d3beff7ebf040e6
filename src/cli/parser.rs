//! CLI argument parsing with clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::logger::{LogFormat, LoggerConfig};

/// Post a message to a Slack channel through an incoming webhook
#[derive(Parser, Debug)]
#[command(name = "slack-notifier")]
#[command(about = "Post a message to a Slack channel through an incoming webhook")]
#[command(long_about = "
Posts a plain-text message to the Slack incoming webhook configured in
SLACK_WEBHOOK_URL (or `webhook_url` in a TOML file passed with --config).

Exits 0 when Slack accepted the message and 1 when it did not.

EXAMPLES:
    # Send a message given as arguments
    slack-notifier deploy finished on staging

    # Send the output of another command
    make test 2>&1 | tail -n 20 | slack-notifier

    # Use a configuration file
    slack-notifier --config /etc/slack-notifier.toml \"backup done\"
")]
#[command(version = crate::build::CLAP_LONG_VERSION)]
pub struct Cli {
    /// Message text
    ///
    /// Words are joined with single spaces. When omitted, or given as `-`,
    /// the message is read from stdin.
    #[arg(value_name = "MESSAGE")]
    pub message: Vec<String>,

    /// Configuration file path
    ///
    /// TOML file providing `webhook_url`. The SLACK_WEBHOOK_URL environment
    /// variable takes precedence over the file.
    #[arg(short, long, value_name = "FILE", env = "SLACK_NOTIFIER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Full)]
    pub log_format: LogFormat,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Log level options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl Cli {
    /// Level after applying `--verbose` / `--quiet`
    pub fn effective_log_level(&self) -> LogLevel {
        if self.verbose {
            LogLevel::Debug
        } else if self.quiet {
            LogLevel::Error
        } else {
            self.log_level
        }
    }

    /// Logger configuration derived from the flags
    pub fn logger_config(&self) -> LoggerConfig {
        LoggerConfig::default()
            .with_level(self.effective_log_level().as_str())
            .with_format(self.log_format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_message_words() {
        let cli = Cli::try_parse_from(["slack-notifier", "deploy", "finished"]).unwrap();
        assert_eq!(cli.message, vec!["deploy", "finished"]);
        assert_eq!(cli.effective_log_level(), LogLevel::Warn);
    }

    #[test]
    fn test_parse_without_message() {
        let cli = Cli::try_parse_from(["slack-notifier"]).unwrap();
        assert!(cli.message.is_empty());
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["slack-notifier", "-v", "-q", "hi"]).is_err());
    }

    #[test]
    fn test_verbose_overrides_level() {
        let cli =
            Cli::try_parse_from(["slack-notifier", "--log-level", "error", "-v", "hi"]).unwrap();
        assert_eq!(cli.effective_log_level(), LogLevel::Debug);
        assert_eq!(cli.logger_config().level, "debug");
    }

    #[test]
    fn test_log_format_flag() {
        let cli = Cli::try_parse_from(["slack-notifier", "--log-format", "json", "hi"]).unwrap();
        assert_eq!(cli.logger_config().format, LogFormat::Json);
    }
}
