//! Scorer - weighted fairness score of a candidate
//!
//! Level 3 - Steps

use doubles_core::{RoundRecord, TeamPair, WeightConfig};

use crate::candidates::Candidate;
use crate::stats::HistoryStats;

/// Penalty per player who would rest twice in a row. Fixed, not a weight.
pub const REST_REPEAT_PENALTY: f64 = 5.0;

/// Unweighted terms of a candidate's score
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScoreTerms {
    /// Past partnerships of team1 plus those of team2
    pub partner: u32,
    /// Past oppositions over the four cross pairs
    pub opponent: u32,
    /// 0..=3, see [`similarity`]
    pub similarity: u32,
    /// Players resting now who also rested last round
    pub repeated_rest: u32,
}

impl ScoreTerms {
    pub fn compute(
        candidate: &Candidate,
        stats: &HistoryStats,
        previous: Option<&RoundRecord>,
    ) -> Self {
        Self {
            partner: stats.team_partner_count(&candidate.team1)
                + stats.team_partner_count(&candidate.team2),
            opponent: stats.cross_opponent_count(&candidate.team1, &candidate.team2),
            similarity: previous.map_or(0, |prev| similarity(candidate, prev)),
            repeated_rest: previous.map_or(0, |prev| repeated_rest(candidate, prev)),
        }
    }

    /// Lower is better
    pub fn weighted(&self, weights: &WeightConfig) -> f64 {
        f64::from(weights.w_partner) * f64::from(self.partner)
            + f64::from(weights.w_opp) * f64::from(self.opponent)
            + f64::from(weights.w_prev) * f64::from(self.similarity)
            + REST_REPEAT_PENALTY * f64::from(self.repeated_rest)
    }
}

/// One point per team that already played together last round, plus one if the
/// whole grouping repeats (in either team order).
pub fn similarity(candidate: &Candidate, previous: &RoundRecord) -> u32 {
    let repeats_team = |team: &TeamPair| team == &previous.team1 || team == &previous.team2;
    let mut sim = 0;
    if repeats_team(&candidate.team1) {
        sim += 1;
    }
    if repeats_team(&candidate.team2) {
        sim += 1;
    }
    if candidate.grouping() == previous.grouping() {
        sim += 1;
    }
    sim
}

/// |candidate.rest ∩ previous.rest|
pub fn repeated_rest(candidate: &Candidate, previous: &RoundRecord) -> u32 {
    candidate
        .rest
        .iter()
        .filter(|id| previous.rested(id))
        .count() as u32
}

/// Score of `candidate` given today's stats, the last round and the weights
pub fn score_candidate(
    candidate: &Candidate,
    stats: &HistoryStats,
    previous: Option<&RoundRecord>,
    weights: &WeightConfig,
) -> f64 {
    ScoreTerms::compute(candidate, stats, previous).weighted(weights)
}
