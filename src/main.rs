use std::process::ExitCode;

use clap::Parser;

use slack_notifier::NotificationClient;
use slack_notifier::cli::{Cli, read_message};
use slack_notifier::config::ConfigLoader;
use slack_notifier::logger::init_logger;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logger(&cli.logger_config())?;

    // Configuration problems stop us before anything is read or sent
    let settings = ConfigLoader::new(cli.config.clone()).load()?;
    let client = NotificationClient::from_provider(&settings)?;
    tracing::debug!(?client, "Notifier ready");

    let message = read_message(&cli.message, tokio::io::stdin()).await?;

    if client.notify(&message).await {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
