//! Plain-text views of a championship.

use league_cup::{Championship, Match, MatchStatus, Round, StandingRow};

/// Generate a text report: header, then the league table or the bracket.
pub fn report(championship: &Championship) -> String {
    let mut report = String::new();
    report.push_str(&format!("=== {} ===\n", championship.config.name));
    if !championship.config.description.is_empty() {
        report.push_str(&format!("{}\n", championship.config.description));
    }
    report.push_str(&format!(
        "Id: {}\nKind: {} | Status: {} | Entrants: {}/{}\n\n",
        championship.id,
        championship.kind(),
        championship.status,
        championship.entrants.len(),
        championship.config.max_entrants
    ));

    if let Some(rows) = championship.standings() {
        if !rows.is_empty() {
            report.push_str(&standings_table(rows));
            report.push('\n');
        }
        let matches = championship.fixtures.all_matches();
        if !matches.is_empty() {
            report.push_str("Matches:\n");
            for m in matches {
                report.push_str(&format!("  {}\n", match_line(m)));
            }
        }
    } else if let Some(rounds) = championship.rounds() {
        report.push_str(&bracket(rounds));
    }

    if championship.fixtures.all_matches().is_empty() {
        report.push_str("Entrants:\n");
        for entrant in &championship.entrants {
            report.push_str(&format!("  {entrant}\n"));
        }
    }

    if let Some(champion) = championship.champion() {
        report.push_str(&format!("\nChampion: {champion}\n"));
    }
    report
}

/// One line per championship for listings.
pub fn summary_line(championship: &Championship) -> String {
    format!(
        "{}  {:<24} {:<6} {:<12} {} entrants",
        championship.id,
        championship.config.name,
        championship.kind(),
        championship.status,
        championship.entrants.len()
    )
}

/// League table, one row per entrant in rank order.
pub fn standings_table(rows: &[StandingRow]) -> String {
    let mut table = format!(
        "{:>3} {:<20} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>5} {:>4}\n",
        "#", "Entrant", "P", "W", "D", "L", "GF", "GA", "GD", "Pts"
    );
    table.push_str(&"-".repeat(62));
    table.push('\n');

    for (i, row) in rows.iter().enumerate() {
        table.push_str(&format!(
            "{:>3} {:<20} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>+5} {:>4}\n",
            i + 1,
            row.entrant.name,
            row.played,
            row.wins,
            row.draws,
            row.losses,
            row.goals_for,
            row.goals_against,
            row.goal_difference,
            row.points
        ));
    }
    table
}

/// Bracket listing, round by round.
pub fn bracket(rounds: &[Round]) -> String {
    let mut text = String::new();
    for round in rounds {
        text.push_str(&format!("{} (round {})\n", round.name, round.number));
        for m in &round.matches {
            text.push_str(&format!("  {}\n", match_line(m)));
        }
    }
    text
}

fn match_line(m: &Match) -> String {
    let score = match (&m.status, &m.result) {
        (MatchStatus::Finalized, Some(result)) => format!("{}-{}", result.score_a, result.score_b),
        _ => "vs".to_string(),
    };
    format!("[{}] {} {} {}  ({})", m.id, m.slot_a, score, m.slot_b, m.status)
}
