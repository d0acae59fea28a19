//! Session - round generation and undo over an explicit session state
//!
//! Level 1 - Orchestration
//!
//! [`generate_round`] is a pure function of the state: aggregate history, enumerate
//! candidates, filter, score, select, commit. [`Session`] wraps a state with the undo
//! stack and takes a snapshot before every mutation it commits.

use doubles_core::{RosterError, RoundRecord, SessionState, WeightConfig};

use crate::candidates::generate_candidates;
use crate::config::EngineConfig;
use crate::error::GenerateError;
use crate::selector::{rank, select, ScoredCandidate};
use crate::seed::TieBreakSeed;
use crate::snapshot::{Snapshot, UndoStack};
use crate::stats::HistoryStats;

// ============================================================================
// Level 1 - Orchestration
// ============================================================================

/// Generate the next round for `state`.
///
/// Returns the new state (round appended, placed players no longer marked as just
/// returned) and the committed round. `state` itself is never modified, so an error
/// leaves the caller's state exactly as it was.
pub fn generate_round(
    state: &SessionState,
    config: &EngineConfig,
    timestamp_ms: i64,
) -> Result<(SessionState, RoundRecord), GenerateError> {
    let round_index = state.next_round_index();
    let previous = state.previous_round();

    let stats = HistoryStats::from_rounds(&state.rounds);
    let candidates = generate_candidates(&state.participants, previous, config.max_quads)?;
    let seed = TieBreakSeed::new(state.day_seed(), round_index);
    let selection = select(&candidates, &stats, previous, &state.weights, &seed)?;

    let record = selection
        .chosen
        .candidate
        .into_record(RoundRecord::id_for(round_index), timestamp_ms);

    let mut next = state.clone();
    next.participants.clear_just_returned(record.players());
    next.rounds.push(record.clone());
    Ok((next, record))
}

/// Scored view of the next round without committing anything
#[derive(Clone, Debug, PartialEq)]
pub struct Preview {
    pub round_index: usize,
    pub seed_key: String,
    /// Every candidate that survived the filter, in enumeration order
    pub scored: Vec<ScoredCandidate>,
    /// Indices into `scored` tied at the minimum
    pub ties: Vec<usize>,
    /// Index into `scored` that `generate_round` would commit
    pub chosen: usize,
}

impl Preview {
    pub fn chosen(&self) -> &ScoredCandidate {
        &self.scored[self.chosen]
    }
}

/// Run the same pipeline as [`generate_round`] and report every score
pub fn preview_round(state: &SessionState, config: &EngineConfig) -> Result<Preview, GenerateError> {
    let round_index = state.next_round_index();
    let previous = state.previous_round();

    let stats = HistoryStats::from_rounds(&state.rounds);
    let candidates = generate_candidates(&state.participants, previous, config.max_quads)?;
    let seed = TieBreakSeed::new(state.day_seed(), round_index);
    let ranking = rank(&candidates, &stats, previous, &state.weights, &seed)?;

    Ok(Preview {
        round_index,
        seed_key: seed.key(),
        chosen: ranking.chosen_index(),
        scored: ranking.scored,
        ties: ranking.ties,
    })
}

// ============================================================================
// Level 2 - Session facade
// ============================================================================

/// A session-day with its undo history.
///
/// Callers must serialize access; there is no internal locking.
#[derive(Clone, Debug)]
pub struct Session {
    state: SessionState,
    undo: UndoStack,
    config: EngineConfig,
}

impl Session {
    pub fn new(state: SessionState, config: EngineConfig) -> Self {
        let undo = UndoStack::new(config.undo_depth);
        Self { state, undo, config }
    }

    /// Resume with a previously persisted undo history (oldest first)
    pub fn with_history(state: SessionState, history: Vec<Snapshot>, config: EngineConfig) -> Self {
        let undo = UndoStack::from_snapshots(history, config.undo_depth);
        Self { state, undo, config }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn into_state(self) -> SessionState {
        self.state
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    /// Undo history, oldest first
    pub fn history(&self) -> Vec<Snapshot> {
        self.undo.snapshots()
    }

    /// Generate and commit the next round. Nothing changes on error.
    pub fn generate_round(&mut self, timestamp_ms: i64) -> Result<RoundRecord, GenerateError> {
        let (next, record) = generate_round(&self.state, &self.config, timestamp_ms)?;
        self.undo.push(Snapshot::capture(&self.state));
        self.state = next;
        tracing::info!(
            round = %record.id,
            team1 = %record.team1,
            team2 = %record.team2,
            resting = record.rest.len(),
            "committed round"
        );
        Ok(record)
    }

    pub fn preview(&self) -> Result<Preview, GenerateError> {
        preview_round(&self.state, &self.config)
    }

    /// Roll back to the most recent snapshot. Returns it, or `None` when there is
    /// nothing to undo.
    pub fn undo(&mut self) -> Option<Snapshot> {
        let snapshot = self.undo.pop()?;
        snapshot.restore_into(&mut self.state);
        tracing::info!(
            rounds = snapshot.rounds.len(),
            remaining = self.undo.len(),
            "undo"
        );
        Some(snapshot)
    }

    /// Apply a roster edit to a copy of the state; commit it only if it succeeded
    fn edit<T>(
        &mut self,
        f: impl FnOnce(&mut SessionState) -> Result<T, RosterError>,
    ) -> Result<T, RosterError> {
        let mut next = self.state.clone();
        let out = f(&mut next)?;
        self.commit(next);
        Ok(out)
    }

    /// Replace the state behind a snapshot, unless nothing changed
    fn commit(&mut self, next: SessionState) {
        if next != self.state {
            self.undo.push(Snapshot::capture(&self.state));
            self.state = next;
        }
    }

    /// Returns the clamped value now in effect
    pub fn set_partner_weight(&mut self, value: i64) -> u8 {
        self.set_weights(self.state.weights.with_partner(value)).w_partner
    }

    /// Returns the clamped value now in effect
    pub fn set_opponent_weight(&mut self, value: i64) -> u8 {
        self.set_weights(self.state.weights.with_opp(value)).w_opp
    }

    /// Returns the clamped value now in effect
    pub fn set_previous_weight(&mut self, value: i64) -> u8 {
        self.set_weights(self.state.weights.with_prev(value)).w_prev
    }

    pub fn reset_weights(&mut self) -> WeightConfig {
        self.set_weights(WeightConfig::default())
    }

    fn set_weights(&mut self, weights: WeightConfig) -> WeightConfig {
        let mut next = self.state.clone();
        next.weights = weights;
        self.commit(next);
        self.state.weights
    }

    pub fn toggle_selected(&mut self, id: &str) -> Result<(), RosterError> {
        self.edit(|state| state.participants.toggle_selected(id))
    }

    pub fn set_away(&mut self, id: &str, away: bool) -> Result<(), RosterError> {
        self.edit(|state| state.participants.set_away(id, away))
    }

    /// Returns the new guest's id
    pub fn add_guest(&mut self, name: &str) -> Result<String, RosterError> {
        self.edit(|state| state.participants.add_guest(name))
    }

    pub fn remove_participant(&mut self, id: &str) -> Result<(), RosterError> {
        self.edit(|state| state.participants.remove(id).map(|_| ()))
    }

    /// Drop guests and today's rounds. Undoable.
    pub fn reset_today(&mut self) {
        let mut next = self.state.clone();
        next.participants.reset_day();
        next.rounds.clear();
        self.commit(next);
    }

    /// Change the tie-break day seed. Preferences are not part of undo history.
    pub fn set_day_seed(&mut self, seed: impl Into<String>) {
        self.state.set_day_seed(seed);
    }
}
