//! Command dispatch against the snapshot store.

use anyhow::{Context, Error, Result, anyhow};
use chrono::Utc;
use league_cup::{
    Championship, ChampionshipConfig, EngineError, Entrant, ResultSubmission,
    constants::DEFAULT_MAX_ENTRANTS, draw,
};
use log::{info, warn};

use crate::commands::Command;
use crate::config::CliConfig;
use crate::render;
use crate::store::SnapshotStore;

/// Execute one command
///
/// The stored snapshot is only replaced once the engine has accepted the
/// operation, so a rejected command leaves the file as it was.
pub fn run(command: Command, config: &CliConfig, store: &SnapshotStore) -> Result<()> {
    let championship = match command {
        Command::Create {
            name,
            description,
            kind,
            max_entrants,
            allow_same_team,
        } => {
            let settings = ChampionshipConfig {
                name,
                description: description.unwrap_or_default(),
                max_entrants: max_entrants.unwrap_or(DEFAULT_MAX_ENTRANTS),
                allow_same_team,
            };
            let created =
                Championship::create(settings, kind, &config.user).map_err(rejected)?;
            info!("Created {kind} championship {}", created.id);
            println!("Created {kind} championship {}", created.id);
            created
        }
        Command::Join {
            id,
            entrant,
            name,
            team,
        } => {
            let entrant = Entrant::new(entrant, &name, &team);
            let joined = store.load(&id)?.register(entrant.clone()).map_err(rejected)?;
            println!("{entrant} joined ({} entrants)", joined.entrants.len());
            joined
        }
        Command::Start { id } => {
            let championship = store.load(&id)?;
            let started = match config.seed {
                Some(seed) => championship.start(&mut draw::seeded(seed)),
                None => championship.start(&mut draw::from_entropy()),
            }
            .map_err(rejected)?;
            print!("{}", render::report(&started));
            started
        }
        Command::Record {
            id,
            match_id,
            score_a,
            score_b,
        } => {
            let submission =
                ResultSubmission::parse(match_id, &score_a, &score_b, &config.user, Utc::now())
                    .map_err(rejected)?;
            let recorded = store
                .load(&id)?
                .record_result(&submission)
                .map_err(rejected)?;
            print!("{}", render::report(&recorded));
            recorded
        }
        Command::Correct {
            id,
            match_id,
            score_a,
            score_b,
        } => {
            let submission =
                ResultSubmission::parse(match_id, &score_a, &score_b, &config.user, Utc::now())
                    .map_err(rejected)?;
            let corrected = store
                .load(&id)?
                .correct_result(&submission)
                .map_err(rejected)?;
            print!("{}", render::report(&corrected));
            corrected
        }
        Command::Show { id } => {
            print!("{}", render::report(&store.load(&id)?));
            return Ok(());
        }
        Command::List => {
            let championships = store.list()?;
            if championships.is_empty() {
                println!("No championships yet");
            }
            for championship in &championships {
                println!("{}", render::summary_line(championship));
            }
            return Ok(());
        }
        Command::Delete { id } => {
            let championship = store.load(&id)?;
            store.delete(&id)?;
            info!("Deleted championship {id}");
            println!("Deleted {}", render::summary_line(&championship));
            return Ok(());
        }
    };

    let path = store
        .save(&championship)
        .with_context(|| format!("Failed to store championship {}", championship.id))?;
    info!("Wrote {}", path.display());
    Ok(())
}

/// Turn an engine rejection into a user-facing error, logging integrity detail.
fn rejected(err: EngineError) -> Error {
    if err.is_integrity_fault() {
        warn!("{err}");
    }
    anyhow!(err.client_message())
}
