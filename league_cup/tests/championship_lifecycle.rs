//! Integration tests for the championship lifecycle
//!
//! Registration rules, starting, finishing and loading persisted snapshots.

use league_cup::{
    Championship, ChampionshipConfig, ChampionshipKind, ChampionshipStatus, EngineError, Entrant,
    draw,
};

fn entrant(id: &str, team: &str) -> Entrant {
    Entrant::new(id, &format!("Player {id}"), team)
}

#[test]
fn test_registration_rules() {
    let config = ChampionshipConfig {
        max_entrants: 3,
        ..ChampionshipConfig::named("Office League")
    };
    let league = Championship::create(config, ChampionshipKind::League, "hr").unwrap();
    let league = league.register(entrant("a", "Santos")).unwrap();
    let league = league.register(entrant("b", "Gremio")).unwrap();

    assert!(matches!(
        league.register(entrant("a", "Bahia")),
        Err(EngineError::AlreadyRegistered(_))
    ));
    assert!(matches!(
        league.register(entrant("c", "Santos")),
        Err(EngineError::TeamAlreadyRepresented(_))
    ));

    let league = league.register(entrant("c", "Bahia")).unwrap();
    assert!(matches!(
        league.register(entrant("d", "Vasco")),
        Err(EngineError::ChampionshipFull(3))
    ));
    assert_eq!(league.entrants.len(), 3);
}

#[test]
fn test_shared_team_when_allowed() {
    let config = ChampionshipConfig {
        allow_same_team: true,
        ..ChampionshipConfig::named("Mirror Cup")
    };
    let cup = Championship::create(config, ChampionshipKind::Cup, "host").unwrap();
    let cup = cup.register(entrant("a", "Santos")).unwrap();
    let cup = cup.register(entrant("b", "Santos")).unwrap();
    assert_eq!(cup.entrants.len(), 2);
}

#[test]
fn test_invalid_config_rejected() {
    let config = ChampionshipConfig {
        max_entrants: 1,
        ..ChampionshipConfig::named("Solo")
    };
    let err = Championship::create(config, ChampionshipKind::League, "host").unwrap_err();
    assert!(matches!(err, EngineError::InvalidConfig(_)));
}

#[test]
fn test_start_closes_registration() {
    let cup = Championship::create(ChampionshipConfig::named("Cup"), ChampionshipKind::Cup, "host")
        .unwrap();
    let cup = cup.register(entrant("a", "Santos")).unwrap();
    assert!(matches!(
        cup.start(&mut draw::seeded(1)),
        Err(EngineError::NotEnoughEntrants {
            needed: 2,
            current: 1
        })
    ));

    let cup = cup.register(entrant("b", "Gremio")).unwrap();
    let started = cup.start(&mut draw::seeded(1)).unwrap();
    assert_eq!(started.status, ChampionshipStatus::InProgress);
    assert_eq!(cup.status, ChampionshipStatus::Created);

    assert!(matches!(
        started.register(entrant("c", "Bahia")),
        Err(EngineError::InvalidState { .. })
    ));
    assert!(matches!(
        started.start(&mut draw::seeded(1)),
        Err(EngineError::InvalidState { .. })
    ));
}

#[test]
fn test_champion_only_when_finished() {
    let league = Championship::create(
        ChampionshipConfig::named("League"),
        ChampionshipKind::League,
        "host",
    )
    .unwrap();
    let league = league
        .register(entrant("a", "Santos"))
        .and_then(|l| l.register(entrant("b", "Gremio")))
        .and_then(|l| l.register(entrant("c", "Bahia")))
        .and_then(|l| l.start(&mut draw::seeded(3)))
        .unwrap();
    assert!(league.champion().is_none());
}

#[test]
fn test_tampered_snapshot_fails_to_load() {
    let league = Championship::create(
        ChampionshipConfig::named("League"),
        ChampionshipKind::League,
        "host",
    )
    .unwrap()
    .register(entrant("a", "Santos"))
    .and_then(|l| l.register(entrant("b", "Gremio")))
    .and_then(|l| l.start(&mut draw::seeded(3)))
    .unwrap();

    let mut tampered = league.clone();
    tampered.entrants.retain(|e| e.id.as_str() != "b");
    let json = serde_json::to_string(&tampered).unwrap();

    let err = Championship::from_json(&json).unwrap_err();
    assert!(matches!(err, EngineError::InconsistentAggregate(_)));
    assert!(err.is_integrity_fault());

    assert!(matches!(
        Championship::from_json("{ not json"),
        Err(EngineError::Serialization(_))
    ));
}
