//! CLI module for slack-notifier
//!
//! Argument parsing plus the small amount of glue needed to turn arguments
//! or stdin into a message.

pub mod parser;

pub use parser::{Cli, LogLevel};

use anyhow::bail;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Resolve the message to send
///
/// Words from the command line are joined with single spaces. With no words,
/// or a lone `-`, the message is read from `stdin`. Trailing line breaks are
/// dropped either way.
///
/// # Errors
/// Fails if stdin cannot be read or the resulting message is blank.
pub async fn read_message<R>(words: &[String], mut stdin: R) -> anyhow::Result<String>
where
    R: AsyncRead + Unpin,
{
    let raw = match words {
        [] => read_all(&mut stdin).await?,
        [dash] if dash == "-" => read_all(&mut stdin).await?,
        _ => words.join(" "),
    };

    let message = raw.trim_end_matches(['\r', '\n']).to_string();
    if message.trim().is_empty() {
        bail!("Message is empty; pass it as arguments or on stdin");
    }

    Ok(message)
}

async fn read_all<R: AsyncRead + Unpin>(reader: &mut R) -> anyhow::Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf).await?;
    Ok(buf)
}
