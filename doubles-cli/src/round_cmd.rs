//! Round commands - generate, preview and undo
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run_next(), run_preview(), run_undo() - orchestration
//! - Level 2: delegated to `doubles_engine::Session`
//! - Level 4: report formatting

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use doubles_core::{SessionState, TeamPair};
use doubles_engine::{Preview, ScoredCandidate, Session};

use crate::report::{format_round, format_team, print_json};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct PreviewArgs {
    /// List every surviving candidate, not just the tied ones
    #[arg(long)]
    pub all: bool,
}

/// JSON view of one scored candidate
#[derive(Serialize)]
struct CandidateView<'a> {
    team1: &'a TeamPair,
    team2: &'a TeamPair,
    rest: &'a [String],
    score: f64,
    partner: u32,
    opponent: u32,
    similarity: u32,
    repeated_rest: u32,
    tied: bool,
    chosen: bool,
}

#[derive(Serialize)]
struct PreviewView<'a> {
    round_index: usize,
    seed: &'a str,
    evaluated: usize,
    tie_count: usize,
    candidates: Vec<CandidateView<'a>>,
}

#[derive(Serialize)]
struct UndoView {
    undone: bool,
    rounds: usize,
    remaining_undo: usize,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Generate and commit the next round
pub fn run_next(session: &mut Session, json: bool) -> Result<()> {
    let timestamp_ms = chrono::Utc::now().timestamp_millis();
    let record = session.generate_round(timestamp_ms)?;

    if json {
        print_json(&record)?;
    } else {
        let number = session.state().rounds.len();
        println!("{}", format_round(session.state(), number, &record));
    }
    Ok(())
}

/// Show the scores behind the next round without committing it
pub fn run_preview(session: &Session, args: &PreviewArgs, json: bool) -> Result<()> {
    let preview = session.preview()?;
    let view = build_preview_view(&preview, args.all);

    if json {
        print_json(&view)?;
    } else {
        report_preview(session.state(), &view);
    }
    Ok(())
}

/// Roll back the last change
pub fn run_undo(session: &mut Session, json: bool) -> Result<()> {
    let undone = session.undo().is_some();
    let view = UndoView {
        undone,
        rounds: session.state().rounds.len(),
        remaining_undo: session.undo_len(),
    };

    if json {
        print_json(&view)?;
    } else if undone {
        println!(
            "Undone. {} round(s) today, {} more undo step(s) available.",
            view.rounds, view.remaining_undo
        );
    } else {
        println!("Nothing to undo.");
    }
    Ok(())
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

fn build_preview_view(preview: &Preview, all: bool) -> PreviewView<'_> {
    let candidates = preview
        .scored
        .iter()
        .enumerate()
        .filter(|(i, _)| all || preview.ties.contains(i))
        .map(|(i, sc)| candidate_view(sc, preview.ties.contains(&i), i == preview.chosen))
        .collect();

    PreviewView {
        round_index: preview.round_index,
        seed: &preview.seed_key,
        evaluated: preview.scored.len(),
        tie_count: preview.ties.len(),
        candidates,
    }
}

fn candidate_view(sc: &ScoredCandidate, tied: bool, chosen: bool) -> CandidateView<'_> {
    CandidateView {
        team1: &sc.candidate.team1,
        team2: &sc.candidate.team2,
        rest: &sc.candidate.rest,
        score: sc.score,
        partner: sc.terms.partner,
        opponent: sc.terms.opponent,
        similarity: sc.terms.similarity,
        repeated_rest: sc.terms.repeated_rest,
        tied,
        chosen,
    }
}

// ============================================================================
// LEVEL 4 - FORMATTING
// ============================================================================

fn report_preview(state: &SessionState, view: &PreviewView<'_>) {
    println!(
        "Round #{} (seed {}): {} candidate(s) scored, {} tied at the minimum",
        view.round_index + 1,
        view.seed,
        view.evaluated,
        view.tie_count
    );
    for c in &view.candidates {
        let marker = if c.chosen {
            "=>"
        } else if c.tied {
            " *"
        } else {
            "  "
        };
        println!(
            "{} {:>6.1}  {}  vs  {}   (partner {}, opp {}, sim {}, rest {})",
            marker,
            c.score,
            format_team(state, c.team1),
            format_team(state, c.team2),
            c.partner,
            c.opponent,
            c.similarity,
            c.repeated_rest
        );
    }
}
