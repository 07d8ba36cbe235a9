//! Drives a task board from line commands on stdin.
//!
//! Usage:
//!
//! ```text
//! taskboard < commands.txt
//! ```
//!
//! Recognised commands:
//!
//! ```text
//! add <title> | <description> | <effort>
//! drag <item-id> <active|finished>
//! abandon <item-id>
//! show
//! dump
//! quit
//! ```
//!
//! The file named by `TASKBOARD_CONFIG`, if any, supplies the board
//! configuration. Rejected input is reported on stderr.

use std::{
    env,
    io::{self, BufRead, Write},
    path::PathBuf,
    sync::Arc,
};

use mockable::DefaultClock;
use taskboard::{
    app::{BoardError, TaskBoard},
    board::{
        adapters::RandomIdSource,
        domain::{ItemStatus, WorkItemId},
        ports::Notice,
        services::NewItemForm,
    },
    config::{BoardConfig, CONFIG_PATH_ENV},
    logging,
    transfer::TransferError,
};
use thiserror::Error;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

type CliBoard = TaskBoard<RandomIdSource, DefaultClock, StderrNotice>;

/// Writes blocking notices to stderr.
struct StderrNotice;

impl Notice for StderrNotice {
    fn alert(&self, message: &str) {
        let mut stderr = io::stderr().lock();
        // A failed diagnostic write has nowhere else to go.
        let _ignored = writeln!(stderr, "notice: {message}");
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error("unrecognised command: {0}")]
    UnknownCommand(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error(transparent)]
    Transfer(#[from] TransferError),
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Add(NewItemForm),
    Drag(WorkItemId, ItemStatus),
    Abandon(WorkItemId),
    Show,
    Dump,
    Quit,
}

fn parse_command(line: &str) -> Result<Option<Command>, CliError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let (verb, rest) = trimmed.split_once(' ').unwrap_or((trimmed, ""));
    let command = match verb {
        "add" => {
            let mut fields = rest.split('|').map(str::trim);
            let (Some(title), Some(description), Some(effort), None) =
                (fields.next(), fields.next(), fields.next(), fields.next())
            else {
                return Err(CliError::Usage("add <title> | <description> | <effort>"));
            };
            Command::Add(NewItemForm::new(title, description, effort))
        }
        "drag" => {
            let mut words = rest.split_whitespace();
            let (Some(id), Some(status), None) = (words.next(), words.next(), words.next()) else {
                return Err(CliError::Usage("drag <item-id> <active|finished>"));
            };
            let target = ItemStatus::try_from(status)
                .map_err(|_| CliError::Usage("drag <item-id> <active|finished>"))?;
            Command::Drag(WorkItemId::from(id), target)
        }
        "abandon" if !rest.trim().is_empty() => Command::Abandon(WorkItemId::from(rest.trim())),
        "abandon" => return Err(CliError::Usage("abandon <item-id>")),
        "show" => Command::Show,
        "dump" => Command::Dump,
        "quit" | "exit" => Command::Quit,
        other => return Err(CliError::UnknownCommand(other.to_owned())),
    };
    Ok(Some(command))
}

fn drag(board: &mut CliBoard, id: &WorkItemId, target: ItemStatus) -> Result<String, CliError> {
    board.drag_start(id)?;
    let accepted = board.drag_over(target)?;
    let outcome = if accepted {
        format!("{:?}", board.drop_on(target)?)
    } else {
        "rejected".to_owned()
    };
    board.drag_end()?;
    Ok(outcome)
}

fn run(
    board: &mut CliBoard,
    command: Command,
    out: &mut impl Write,
) -> Result<bool, BoxError> {
    match command {
        Command::Add(mut form) => {
            if let Ok(item) = board.submit(&mut form) {
                writeln!(out, "added {}", item.id())?;
            }
        }
        Command::Drag(id, target) => {
            let outcome = drag(board, &id, target)?;
            writeln!(out, "{outcome}")?;
        }
        Command::Abandon(id) => {
            board.drag_start(&id)?;
            let summary = board.drag_end()?;
            writeln!(out, "{summary:?}")?;
        }
        Command::Show => write!(out, "{}", board.render(&NewItemForm::default())?)?,
        Command::Dump => writeln!(
            out,
            "{}",
            serde_json::to_string_pretty(board.store().items())?
        )?,
        Command::Quit => return Ok(false),
    }
    Ok(true)
}

fn main() -> Result<(), BoxError> {
    let config_path = env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);
    let config = BoardConfig::load_or_default(config_path.as_deref())?;
    logging::init(&config.logging)?;

    let mut board = TaskBoard::new(
        config,
        RandomIdSource,
        Arc::new(DefaultClock),
        StderrNotice,
    )?;
    let stdin = io::stdin();
    let mut out = io::stdout().lock();

    for line in stdin.lock().lines() {
        let raw = line?;
        match parse_command(&raw) {
            Ok(None) => {}
            Ok(Some(command)) => match run(&mut board, command, &mut out) {
                Ok(true) => {}
                Ok(false) => break,
                Err(err) => tracing::warn!(%err, "command failed"),
            },
            Err(err) => tracing::warn!(%err, "command rejected"),
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{CliError, Command, parse_command};
    use taskboard::board::{
        domain::{ItemStatus, WorkItemId},
        services::NewItemForm,
    };

    #[test]
    fn add_splits_fields_on_pipes() {
        let parsed = parse_command("add Build API | Design and implement | 10");
        assert!(matches!(
            parsed,
            Ok(Some(Command::Add(form)))
                if form == NewItemForm::new("Build API", "Design and implement", "10")
        ));
    }

    #[test]
    fn drag_parses_target_status() {
        let parsed = parse_command("drag item-1 Finished");
        assert!(matches!(
            parsed,
            Ok(Some(Command::Drag(id, ItemStatus::Finished))) if id == WorkItemId::from("item-1")
        ));
    }

    #[test]
    fn blank_lines_are_skipped() {
        assert!(matches!(parse_command("   "), Ok(None)));
    }

    #[test]
    fn unknown_verbs_are_rejected() {
        assert!(matches!(
            parse_command("delete item-1"),
            Err(CliError::UnknownCommand(verb)) if verb == "delete"
        ));
    }

    #[test]
    fn add_requires_three_fields() {
        assert!(matches!(
            parse_command("add only a title"),
            Err(CliError::Usage(_))
        ));
    }
}
