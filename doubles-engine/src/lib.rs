//! Doubles Engine - fair 2-vs-2 round generation
//!
//! This crate provides the rotation engine:
//! - History aggregation into partner/opponent counts
//! - Candidate enumeration (quads and their team partitions)
//! - The anti-rematch filter
//! - Weighted fairness scoring
//! - Minimal-score selection with a seeded, reproducible tie-break
//! - Snapshot-based undo
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: generate_round, Session (orchestration)
//! - Level 2: select (phases)
//! - Level 3: build_stats, generate_candidates, passes, score_candidate (steps)
//! - Level 4: seeds, snapshots, configuration

mod candidates;
mod config;
mod error;
mod filter;
mod scoring;
mod seed;
mod selector;
mod session;
mod snapshot;
mod stats;

pub use candidates::{
    enumerate_quads, generate_candidates, partitions, rank_pool, Candidate, PLAYERS_PER_ROUND,
};
pub use config::EngineConfig;
pub use error::GenerateError;
pub use filter::{is_flip, passes};
pub use scoring::{repeated_rest, score_candidate, similarity, ScoreTerms, REST_REPEAT_PENALTY};
pub use seed::TieBreakSeed;
pub use selector::{
    rank, score_all, select, tie_set, Ranking, ScoredCandidate, Selection, TIE_TOLERANCE,
};
pub use session::{generate_round, preview_round, Preview, Session};
pub use snapshot::{Snapshot, UndoStack};
pub use stats::{build_stats, HistoryStats};
