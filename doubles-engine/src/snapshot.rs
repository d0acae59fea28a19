//! Snapshot / Undo stack
//!
//! Level 4 - Utilities
//!
//! A snapshot is a full value copy of the undoable part of a session. It is taken
//! before a mutation is committed and consumed by exactly one undo.

use std::collections::VecDeque;

use doubles_core::{Roster, RoundRecord, SessionState, WeightConfig};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub rounds: Vec<RoundRecord>,
    pub participants: Roster,
    pub weights: WeightConfig,
}

impl Snapshot {
    pub fn capture(state: &SessionState) -> Self {
        Self {
            rounds: state.rounds.clone(),
            participants: state.participants.clone(),
            weights: state.weights,
        }
    }

    /// Overwrite the undoable part of `state`; the session date and day seed stay
    pub fn restore_into(&self, state: &mut SessionState) {
        state.rounds = self.rounds.clone();
        state.participants = self.participants.clone();
        state.weights = self.weights;
    }
}

/// Bounded LIFO of snapshots; pushing past capacity drops the oldest entry
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UndoStack {
    entries: VecDeque<Snapshot>,
    capacity: usize,
}

impl UndoStack {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(64)),
            capacity,
        }
    }

    /// Rebuild from persisted snapshots (oldest first), keeping the newest `capacity`
    pub fn from_snapshots(snapshots: Vec<Snapshot>, capacity: usize) -> Self {
        let mut stack = Self::new(capacity);
        for snapshot in snapshots {
            stack.push(snapshot);
        }
        stack
    }

    pub fn push(&mut self, snapshot: Snapshot) {
        if self.capacity == 0 {
            return;
        }
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(snapshot);
    }

    pub fn pop(&mut self) -> Option<Snapshot> {
        self.entries.pop_back()
    }

    pub fn peek(&self) -> Option<&Snapshot> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Snapshots oldest first, for persistence
    pub fn snapshots(&self) -> Vec<Snapshot> {
        self.entries.iter().cloned().collect()
    }
}
