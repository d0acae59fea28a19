//! Show and seed commands
//!
//! Level 1 - Orchestration

use anyhow::{bail, Result};
use doubles_engine::Session;

use crate::report::{format_participant, format_round, format_weights, print_json};

/// Print roster, weights and today's rounds
pub fn run_show(session: &Session, json: bool) -> Result<()> {
    let state = session.state();
    if json {
        return print_json(state);
    }

    println!("Session {} (seed {})", state.session_date, state.day_seed());
    println!("Weights: {}", format_weights(&state.weights));
    println!();
    println!("Participants ({} eligible):", state.participants.eligible().count());
    for p in state.participants.iter() {
        println!("  {}", format_participant(p));
    }
    println!();
    if state.rounds.is_empty() {
        println!("No rounds yet. Run `doubles next` to start.");
    } else {
        println!("Rounds ({}):", state.rounds.len());
        for (i, round) in state.rounds.iter().enumerate() {
            println!("{}", format_round(state, i + 1, round));
        }
    }
    println!();
    println!("Undo steps available: {}", session.undo_len());
    Ok(())
}

/// Print or change the day seed
pub fn run_seed(session: &mut Session, value: Option<String>, json: bool) -> Result<()> {
    if let Some(value) = value {
        if value.trim().is_empty() {
            bail!("Day seed must not be empty");
        }
        session.set_day_seed(value.trim());
    }

    let seed = session.state().day_seed();
    if json {
        print_json(&serde_json::json!({ "daySeed": seed }))?;
    } else {
        println!("Day seed: {seed}");
    }
    Ok(())
}
