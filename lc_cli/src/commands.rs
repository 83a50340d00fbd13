//! Command-line parsing into championship commands.

use league_cup::{ChampionshipId, ChampionshipKind, MatchId};
use pico_args::Arguments;
use std::{convert::Infallible, ffi::OsString, path::PathBuf};

/// One championship operation requested on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Create {
        name: String,
        description: Option<String>,
        kind: ChampionshipKind,
        max_entrants: Option<usize>,
        allow_same_team: bool,
    },
    Join {
        id: ChampionshipId,
        entrant: String,
        name: String,
        team: String,
    },
    Start {
        id: ChampionshipId,
    },
    /// Scores stay raw text; the engine decides what is malformed.
    Record {
        id: ChampionshipId,
        match_id: MatchId,
        score_a: String,
        score_b: String,
    },
    Correct {
        id: ChampionshipId,
        match_id: MatchId,
        score_a: String,
        score_b: String,
    },
    Show {
        id: ChampionshipId,
    },
    List,
    Delete {
        id: ChampionshipId,
    },
}

/// Parsed command plus the options that override environment configuration.
#[derive(Debug)]
pub struct Cli {
    pub command: Command,
    pub data_dir: Option<PathBuf>,
    pub seed: Option<u64>,
    pub user: Option<String>,
}

/// Errors that can occur during command parsing.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Missing command. Run with --help to see available commands")]
    MissingCommand,

    #[error("Unrecognized command '{0}'. Run with --help to see available commands")]
    UnrecognizedCommand(String),

    #[error("Unexpected arguments: {0:?}")]
    UnexpectedArguments(Vec<OsString>),

    #[error(transparent)]
    Args(#[from] pico_args::Error),
}

/// Parse the remaining arguments (help already handled).
///
/// # Examples
///
/// ```text
/// lc_cli create --name "Friday Cup" --kind cup --max 16
/// lc_cli record 67e55044-10b1-426f-9247-bb680e5fe0c8 --match round1-match2 --score-a 3 --score-b 1
/// ```
pub fn parse(mut pargs: Arguments) -> Result<Cli, ParseError> {
    let command = match pargs.subcommand()?.as_deref() {
        Some("create") => Command::Create {
            name: pargs.value_from_str("--name")?,
            description: pargs.opt_value_from_str("--description")?,
            kind: pargs.value_from_str("--kind")?,
            max_entrants: pargs.opt_value_from_str("--max")?,
            allow_same_team: pargs.contains("--allow-same-team"),
        },
        Some("join") => Command::Join {
            entrant: pargs.value_from_str("--entrant")?,
            name: pargs.value_from_str("--name")?,
            team: pargs.value_from_str("--team")?,
            id: pargs.free_from_str()?,
        },
        Some("start") => Command::Start {
            id: pargs.free_from_str()?,
        },
        Some(verb @ ("record" | "correct")) => {
            let match_id = pargs.value_from_fn("--match", |s| Ok::<_, Infallible>(MatchId::new(s)))?;
            let score_a = pargs.value_from_str("--score-a")?;
            let score_b = pargs.value_from_str("--score-b")?;
            let id = pargs.free_from_str()?;
            if verb == "record" {
                Command::Record {
                    id,
                    match_id,
                    score_a,
                    score_b,
                }
            } else {
                Command::Correct {
                    id,
                    match_id,
                    score_a,
                    score_b,
                }
            }
        }
        Some("show") => Command::Show {
            id: pargs.free_from_str()?,
        },
        Some("list") => Command::List,
        Some("delete") => Command::Delete {
            id: pargs.free_from_str()?,
        },
        Some(other) => return Err(ParseError::UnrecognizedCommand(other.to_string())),
        None => return Err(ParseError::MissingCommand),
    };

    let cli = Cli {
        command,
        data_dir: pargs.opt_value_from_os_str("--data-dir", |s| {
            Ok::<_, Infallible>(PathBuf::from(s))
        })?,
        seed: pargs.opt_value_from_str("--seed")?,
        user: pargs.opt_value_from_str("--user")?,
    };

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        return Err(ParseError::UnexpectedArguments(remaining));
    }
    Ok(cli)
}
