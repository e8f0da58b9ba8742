//! Line-oriented console front end.
//!
//! Commands are read and handled one at a time, so the console is the single
//! sequence of events driving the hunt:
//!
//! - `enter <id>`     simulate entering the geofence registered under `<id>`
//! - `status`         print progress as JSON
//! - `restart [n]`    restart at landmark `n` (default 0) and start again
//! - `start`          retry registering the current landmark
//! - `quit`           remove geofences and exit

use std::str::FromStr;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::app::App;
use crate::infrastructure::ports::GeofenceTransitionEvent;
use crate::use_cases::hunt::{StartError, StartOutcome, TransitionOutcome};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Enter(String),
    Status,
    Restart(Option<usize>),
    Start,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConsoleError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command: {0}")]
    Unknown(String),
    #[error("Usage: {0}")]
    Usage(&'static str),
}

impl FromStr for ConsoleCommand {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let Some(verb) = parts.next() else {
            return Err(ConsoleError::Empty);
        };
        let arg = parts.next();
        if parts.next().is_some() {
            return Err(ConsoleError::Unknown(s.trim().to_string()));
        }

        match (verb.to_ascii_lowercase().as_str(), arg) {
            ("enter", Some(id)) => Ok(Self::Enter(id.to_string())),
            ("enter", None) => Err(ConsoleError::Usage("enter <landmark id>")),
            ("status", None) => Ok(Self::Status),
            ("restart", None) => Ok(Self::Restart(None)),
            ("restart", Some(n)) => n
                .parse()
                .map(|n| Self::Restart(Some(n)))
                .map_err(|_| ConsoleError::Usage("restart [landmark index]")),
            ("start", None) => Ok(Self::Start),
            ("quit" | "exit", None) => Ok(Self::Quit),
            _ => Err(ConsoleError::Unknown(s.trim().to_string())),
        }
    }
}

/// Handle one command, returning the lines to show the player.
pub async fn handle_command(app: &App, command: ConsoleCommand) -> Vec<String> {
    match command {
        ConsoleCommand::Enter(id) => {
            let event = GeofenceTransitionEvent::entered(id);
            match app.use_cases.handle_transition.execute(&event).await {
                Ok(TransitionOutcome::Arrived { landmark, .. }) => {
                    let mut lines = vec![format!("You found {}!", landmark.name())];
                    lines.push(start(app).await);
                    lines
                }
                Ok(TransitionOutcome::Ignored) => vec!["Nothing here.".to_string()],
                Err(e) => vec![format!("Error: {}", e)],
            }
        }
        ConsoleCommand::Status => {
            let status = app.use_cases.status.execute().await;
            match serde_json::to_string_pretty(&status) {
                Ok(json) => vec![json],
                Err(e) => vec![format!("Error: {}", e)],
            }
        }
        ConsoleCommand::Restart(target) => match app.use_cases.restart.execute(target).await {
            Ok(()) => vec!["Hunt restarted.".to_string(), start(app).await],
            Err(e) => vec![format!("Error: {}", e)],
        },
        ConsoleCommand::Start => vec![start(app).await],
        ConsoleCommand::Quit => {
            app.use_cases.teardown.execute().await;
            vec!["Geofences removed. Goodbye!".to_string()]
        }
    }
}

async fn start(app: &App) -> String {
    match app.use_cases.start_geofencing.execute().await {
        Ok(StartOutcome::Registered(registered)) => {
            format!("Clue #{}: {}", registered.index + 1, registered.hint)
        }
        Ok(StartOutcome::AlreadyActive { index }) => {
            format!("Still searching for clue #{}.", index + 1)
        }
        Ok(StartOutcome::HuntComplete) => "Congratulations! You finished the hunt.".to_string(),
        Err(StartError::PermissionDenied) => {
            "Location permission is needed to play. Grant it in settings, then `start`."
                .to_string()
        }
        Err(StartError::Registration { source, .. }) if !source.is_transient() => {
            source.to_string()
        }
        Err(e) => format!(
            "{}. Type `start` to retry.",
            e.to_string().trim_end_matches('.')
        ),
    }
}

/// Run the console until `quit` or end of input.
///
/// Geofences are removed on every exit path, including a failed read or
/// write.
pub async fn run<R, W>(app: &App, input: R, mut output: W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    match serve(app, input, &mut output).await {
        Ok(Exit::Quit) => Ok(()),
        Ok(Exit::EndOfInput) => {
            tracing::debug!("Input closed, tearing down");
            app.use_cases.teardown.execute().await;
            Ok(())
        }
        Err(e) => {
            tracing::warn!(error = %e, "Console I/O failed, tearing down");
            app.use_cases.teardown.execute().await;
            Err(e)
        }
    }
}

enum Exit {
    Quit,
    EndOfInput,
}

async fn serve<R, W>(app: &App, input: R, output: &mut W) -> std::io::Result<Exit>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    write_lines(
        output,
        &[
            format!("Treasure hunt: {} landmarks.", app.catalog.size()),
            start(app).await,
        ],
    )
    .await?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let command = match line.parse::<ConsoleCommand>() {
            Ok(command) => command,
            Err(e) => {
                write_lines(output, &[e.to_string()]).await?;
                continue;
            }
        };

        let quit = command == ConsoleCommand::Quit;
        let response = handle_command(app, command).await;
        write_lines(output, &response).await?;
        if quit {
            return Ok(Exit::Quit);
        }
    }

    Ok(Exit::EndOfInput)
}

async fn write_lines<W: AsyncWrite + Unpin>(
    output: &mut W,
    lines: &[String],
) -> std::io::Result<()> {
    for line in lines {
        output.write_all(line.as_bytes()).await?;
        output.write_all(b"\n").await?;
    }
    output.flush().await
}
