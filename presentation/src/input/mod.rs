//! Input capture
//!
//! The request comes from the command line, from standard input, or from a
//! dmenu-style launcher whose stdout is the text the user typed. Launchers
//! exit non-zero when the user cancels, which counts as no input.

use std::process::Stdio;
use thiserror::Error;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tracing::debug;

/// Where the request text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Argument(String),
    Stdin,
    /// Shell command line, run through `sh -c`
    Launcher(String),
}

impl InputSource {
    /// Pick the source by priority: argument, then stdin, then launcher.
    pub fn select(argument: Option<String>, stdin: bool, launcher: Option<String>) -> Option<Self> {
        if let Some(text) = argument {
            Some(Self::Argument(text))
        } else if stdin {
            Some(Self::Stdin)
        } else {
            launcher
                .filter(|l| !l.trim().is_empty())
                .map(Self::Launcher)
        }
    }
}

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to start launcher '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read input: {0}")]
    Read(#[from] std::io::Error),
}

/// Read the request; `Ok(None)` means there is nothing to interpret.
pub async fn capture(source: &InputSource) -> Result<Option<String>, InputError> {
    let raw = match source {
        InputSource::Argument(text) => text.clone(),
        InputSource::Stdin => read_from(tokio::io::stdin()).await?,
        InputSource::Launcher(command) => match run_launcher(command).await? {
            Some(text) => text,
            None => return Ok(None),
        },
    };

    Ok(non_empty(raw))
}

async fn read_from<R: AsyncRead + Unpin>(mut reader: R) -> Result<String, InputError> {
    let mut text = String::new();
    reader.read_to_string(&mut text).await?;
    Ok(text)
}

async fn run_launcher(command: &str) -> Result<Option<String>, InputError> {
    let output = Command::new("sh")
        .arg("-c")
        .arg(command)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .output()
        .await
        .map_err(|source| InputError::Spawn {
            command: command.to_string(),
            source,
        })?;

    if !output.status.success() {
        debug!(status = ?output.status, "Launcher exited without a selection");
        return Ok(None);
    }

    Ok(Some(String::from_utf8_lossy(&output.stdout).into_owned()))
}

fn non_empty(raw: String) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
