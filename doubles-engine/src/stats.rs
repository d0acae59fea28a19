//! History Aggregator - partner/opponent counts from past rounds
//!
//! Level 3 - Steps

use doubles_core::{PairKey, RoundRecord, TeamPair};
use rustc_hash::FxHashMap;

/// How often each unordered pair has partnered or opposed today.
///
/// Derived from the round list on demand, never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HistoryStats {
    partner_count: FxHashMap<PairKey, u32>,
    opponent_count: FxHashMap<PairKey, u32>,
}

impl HistoryStats {
    /// Aggregate an ordered list of rounds
    pub fn from_rounds(rounds: &[RoundRecord]) -> Self {
        let mut stats = Self::default();
        for round in rounds {
            stats.record(round);
        }
        stats
    }

    /// Add one round's partnerships and oppositions
    pub fn record(&mut self, round: &RoundRecord) {
        *self.partner_count.entry(round.team1.key()).or_insert(0) += 1;
        *self.partner_count.entry(round.team2.key()).or_insert(0) += 1;
        for key in round.team1.cross_keys(&round.team2) {
            *self.opponent_count.entry(key).or_insert(0) += 1;
        }
    }

    pub fn partner_count(&self, key: &PairKey) -> u32 {
        self.partner_count.get(key).copied().unwrap_or(0)
    }

    pub fn opponent_count(&self, key: &PairKey) -> u32 {
        self.opponent_count.get(key).copied().unwrap_or(0)
    }

    /// Times the two members of `team` have partnered
    pub fn team_partner_count(&self, team: &TeamPair) -> u32 {
        self.partner_count(&team.key())
    }

    /// Sum of opponent counts over the four cross pairs of `t1` vs `t2`
    pub fn cross_opponent_count(&self, t1: &TeamPair, t2: &TeamPair) -> u32 {
        t1.cross_keys(t2).iter().map(|k| self.opponent_count(k)).sum()
    }

    pub fn partner_counts(&self) -> &FxHashMap<PairKey, u32> {
        &self.partner_count
    }

    pub fn opponent_counts(&self) -> &FxHashMap<PairKey, u32> {
        &self.opponent_count
    }
}

/// Aggregate `rounds` into partner/opponent counts
pub fn build_stats(rounds: &[RoundRecord]) -> HistoryStats {
    HistoryStats::from_rounds(rounds)
}
