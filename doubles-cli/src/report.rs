//! Terminal formatting helpers
//!
//! Level 4 - Formatting utilities

use chrono::{DateTime, Local};
use doubles_core::{with_honorific, Participant, RoundRecord, SessionState, TeamPair, WeightConfig};
use serde::Serialize;

/// Display name for `id`, falling back to the raw id for people no longer on the roster
pub fn name_of(state: &SessionState, id: &str) -> String {
    state
        .participants
        .get(id)
        .map(|p| with_honorific(&p.display_name))
        .unwrap_or_else(|| id.to_string())
}

pub fn format_team(state: &SessionState, team: &TeamPair) -> String {
    format!("{} / {}", name_of(state, team.a()), name_of(state, team.b()))
}

pub fn format_time(timestamp_ms: i64) -> String {
    DateTime::from_timestamp_millis(timestamp_ms)
        .map(|t| t.with_timezone(&Local).format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}

pub fn format_round(state: &SessionState, number: usize, round: &RoundRecord) -> String {
    let mut out = format!(
        "Round #{number}  [{}]\n  Team A: {}\n  Team B: {}",
        format_time(round.timestamp),
        format_team(state, &round.team1),
        format_team(state, &round.team2),
    );
    if !round.rest.is_empty() {
        let resting: Vec<String> = round.rest.iter().map(|id| name_of(state, id)).collect();
        out.push_str(&format!("\n  Resting: {}", resting.join(", ")));
    }
    out
}

pub fn format_participant(p: &Participant) -> String {
    let mut badges = Vec::new();
    if p.selected {
        badges.push("selected");
    }
    if p.away {
        badges.push("away");
    }
    if p.just_returned {
        badges.push("returned");
    }
    if p.guest {
        badges.push("guest");
    }
    format!(
        "{:<4} {:<20} {}",
        p.id,
        with_honorific(&p.display_name),
        badges.join(", ")
    )
}

pub fn format_weights(weights: &WeightConfig) -> String {
    format!(
        "partner={} opp={} prev={}",
        weights.w_partner, weights.w_opp, weights.w_prev
    )
}

/// Print `value` as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
