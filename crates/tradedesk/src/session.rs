use anyhow::{anyhow, bail, Context, Result};
use serde::Serialize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use tradedesk_models::{RouteEntry, Screen};
use tradedesk_views::NavigationShell;

/// One line of session input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Navigate(String),
    Replace(String),
    Back,
    Forward,
    Current,
    Routes,
    Quit,
}

impl Command {
    /// Parse a command line. Blank lines yield `Ok(None)`.
    ///
    /// A line starting with `/` is shorthand for `go <line>`.
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        if line.starts_with('/') {
            return Ok(Some(Command::Navigate(line.to_string())));
        }

        let (verb, arg) = match line.split_once(char::is_whitespace) {
            Some((verb, arg)) => (verb, arg.trim()),
            None => (line, ""),
        };
        let href = || -> Result<String> {
            if arg.is_empty() {
                Err(anyhow!("`{verb}` needs a path"))
            } else {
                Ok(arg.to_string())
            }
        };

        let command = match verb {
            "go" | "navigate" => Command::Navigate(href()?),
            "replace" => Command::Replace(href()?),
            "back" => Command::Back,
            "forward" => Command::Forward,
            "current" => Command::Current,
            "routes" => Command::Routes,
            "quit" | "exit" => Command::Quit,
            other => bail!("Unknown command: {other}"),
        };
        Ok(Some(command))
    }
}

/// What the session writes back for a command, one JSON line each.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Reply {
    Screen(Box<Screen>),
    Routes { routes: Vec<RouteEntry> },
    Notice { notice: String },
    Error { error: String },
}

impl Reply {
    fn notice(text: &str) -> Self {
        Reply::Notice {
            notice: text.to_string(),
        }
    }
}

/// Apply a command to the shell. `Quit` is handled by the session loop.
pub fn execute(shell: &mut NavigationShell, command: Command) -> Reply {
    match command {
        Command::Navigate(href) => Reply::Screen(Box::new(shell.navigate(&href))),
        Command::Replace(href) => Reply::Screen(Box::new(shell.replace(&href))),
        Command::Back => shell
            .back()
            .map(|s| Reply::Screen(Box::new(s)))
            .unwrap_or_else(|| Reply::notice("Already at the oldest history entry")),
        Command::Forward => shell
            .forward()
            .map(|s| Reply::Screen(Box::new(s)))
            .unwrap_or_else(|| Reply::notice("Already at the newest history entry")),
        Command::Current => shell
            .current()
            .map(|s| Reply::Screen(Box::new(s)))
            .unwrap_or_else(|| Reply::notice("History is empty")),
        Command::Routes => Reply::Routes {
            routes: shell.routes().entries(),
        },
        Command::Quit => Reply::notice("Session ended"),
    }
}

/// Drive the shell from line-oriented input until EOF, `quit`, or cancellation.
///
/// Commands are handled strictly in order on the calling task. Returns the
/// number of replies written.
pub async fn run_session<R, W>(
    shell: &mut NavigationShell,
    input: R,
    mut output: W,
    cancel: CancellationToken,
) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    let mut replies = 0;

    loop {
        let line = tokio::select! {
            _ = cancel.cancelled() => {
                info!("Session cancelled");
                break;
            }
            line = lines.next_line() => line.context("Failed to read command")?,
        };
        let Some(line) = line else {
            debug!("Input closed");
            break;
        };

        let reply = match Command::parse(&line) {
            Ok(None) => continue,
            Ok(Some(Command::Quit)) => break,
            Ok(Some(command)) => execute(shell, command),
            Err(e) => Reply::Error {
                error: e.to_string(),
            },
        };

        let mut json = serde_json::to_string(&reply)?;
        json.push('\n');
        output
            .write_all(json.as_bytes())
            .await
            .context("Failed to write reply")?;
        replies += 1;
    }

    output.flush().await?;
    Ok(replies)
}
