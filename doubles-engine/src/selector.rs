//! Selector - minimal-score candidates and the seeded tie-break
//!
//! Level 2 - Phases

use doubles_core::{RoundRecord, WeightConfig};

use crate::candidates::Candidate;
use crate::error::GenerateError;
use crate::filter::passes;
use crate::scoring::ScoreTerms;
use crate::seed::TieBreakSeed;
use crate::stats::HistoryStats;

/// Scores closer than this are considered tied
pub const TIE_TOLERANCE: f64 = 1e-9;

/// A candidate that survived the filter, with its score
#[derive(Clone, Debug, PartialEq)]
pub struct ScoredCandidate {
    pub candidate: Candidate,
    pub terms: ScoreTerms,
    pub score: f64,
}

/// Outcome of one selection
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    pub chosen: ScoredCandidate,
    /// Number of candidates tied at the minimum score
    pub tie_count: usize,
    /// Index of `chosen` within the tie set
    pub tie_index: usize,
    /// Candidates that survived the filter and were scored
    pub evaluated: usize,
}

/// Drop filtered candidates and score the rest, keeping enumeration order
pub fn score_all(
    candidates: &[Candidate],
    stats: &HistoryStats,
    previous: Option<&RoundRecord>,
    weights: &WeightConfig,
) -> Vec<ScoredCandidate> {
    candidates
        .iter()
        .filter(|c| passes(c, previous))
        .map(|c| {
            let terms = ScoreTerms::compute(c, stats, previous);
            ScoredCandidate {
                candidate: c.clone(),
                terms,
                score: terms.weighted(weights),
            }
        })
        .collect()
}

/// Indices of all candidates within `TIE_TOLERANCE` of the running minimum
pub fn tie_set(scored: &[ScoredCandidate]) -> Vec<usize> {
    let mut best = f64::INFINITY;
    let mut ties = Vec::new();
    for (i, sc) in scored.iter().enumerate() {
        if sc.score < best - TIE_TOLERANCE {
            best = sc.score;
            ties.clear();
            ties.push(i);
        } else if (sc.score - best).abs() <= TIE_TOLERANCE {
            ties.push(i);
        }
    }
    ties
}

/// Every scored candidate, the tie set at the minimum and the seeded draw among it
#[derive(Clone, Debug, PartialEq)]
pub struct Ranking {
    /// Candidates that survived the filter, in enumeration order
    pub scored: Vec<ScoredCandidate>,
    /// Indices into `scored` tied at the minimum
    pub ties: Vec<usize>,
    /// Position of the drawn candidate within `ties`
    pub tie_index: usize,
}

impl Ranking {
    /// Index into `scored` of the drawn candidate
    pub fn chosen_index(&self) -> usize {
        self.ties[self.tie_index]
    }
}

/// Score, find the ties and draw among them.
///
/// Identical inputs and seed always give the identical draw.
pub fn rank(
    candidates: &[Candidate],
    stats: &HistoryStats,
    previous: Option<&RoundRecord>,
    weights: &WeightConfig,
    seed: &TieBreakSeed,
) -> Result<Ranking, GenerateError> {
    let scored = score_all(candidates, stats, previous, weights);
    let ties = tie_set(&scored);
    if ties.is_empty() {
        return Err(GenerateError::NoCandidate);
    }

    let tie_index = seed.draw(ties.len());
    tracing::debug!(
        candidates = candidates.len(),
        evaluated = scored.len(),
        ties = ties.len(),
        tie_index,
        seed = %seed.key(),
        "ranked candidates"
    );
    Ok(Ranking {
        scored,
        ties,
        tie_index,
    })
}

/// Pick the next round among `candidates`
pub fn select(
    candidates: &[Candidate],
    stats: &HistoryStats,
    previous: Option<&RoundRecord>,
    weights: &WeightConfig,
    seed: &TieBreakSeed,
) -> Result<Selection, GenerateError> {
    let ranking = rank(candidates, stats, previous, weights, seed)?;
    let chosen_index = ranking.chosen_index();
    let Ranking {
        mut scored,
        ties,
        tie_index,
    } = ranking;

    let evaluated = scored.len();
    let chosen = scored.swap_remove(chosen_index);
    Ok(Selection {
        chosen,
        tie_count: ties.len(),
        tie_index,
        evaluated,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidates::generate_candidates;
    use doubles_core::{Roster, TeamPair};

    fn candidate(t1: (&str, &str), t2: (&str, &str)) -> Candidate {
        Candidate::new(TeamPair::new(t1.0, t1.1), TeamPair::new(t2.0, t2.1), Vec::new())
    }

    fn scored(score: f64) -> ScoredCandidate {
        ScoredCandidate {
            candidate: candidate(("A", "B"), ("C", "D")),
            terms: ScoreTerms::default(),
            score,
        }
    }

    #[test]
    fn test_tie_set_tracks_minimum() {
        let list = vec![scored(3.0), scored(1.0), scored(2.0), scored(1.0 + 1e-12), scored(1.0)];
        assert_eq!(tie_set(&list), vec![1, 3, 4]);
        assert!(tie_set(&[]).is_empty());
    }

    #[test]
    fn test_four_players_fresh_day_three_way_tie() {
        let roster = Roster::with_default_players(4);
        let candidates = generate_candidates(&roster, None, 200).unwrap();
        let stats = HistoryStats::default();
        let weights = WeightConfig::default();

        let all = score_all(&candidates, &stats, None, &weights);
        assert_eq!(all.len(), 3);
        assert!(all.iter().all(|sc| sc.score == 0.0));

        let seed = TieBreakSeed::new("2025-10-15", 0);
        let selection = select(&candidates, &stats, None, &weights, &seed).unwrap();
        assert_eq!(selection.tie_count, 3);
        assert_eq!(selection.tie_index, seed.draw(3));
        assert_eq!(selection.chosen.candidate, candidates[selection.tie_index]);

        let again = select(&candidates, &stats, None, &weights, &seed).unwrap();
        assert_eq!(again, selection);
    }

    #[test]
    fn test_select_takes_the_ranked_draw() {
        let roster = Roster::with_default_players(7);
        let history = vec![RoundRecord {
            id: "R1".to_string(),
            timestamp: 0,
            team1: TeamPair::new("P1", "P2"),
            team2: TeamPair::new("P3", "P4"),
            rest: vec!["P5".to_string(), "P6".to_string(), "P7".to_string()],
        }];
        let candidates = generate_candidates(&roster, history.last(), 200).unwrap();
        let stats = HistoryStats::from_rounds(&history);
        let weights = WeightConfig::default();

        for round_index in 1..6 {
            let seed = TieBreakSeed::new("club", round_index);
            let ranking = rank(&candidates, &stats, history.last(), &weights, &seed).unwrap();
            let selection = select(&candidates, &stats, history.last(), &weights, &seed).unwrap();

            assert_eq!(selection.chosen, ranking.scored[ranking.chosen_index()]);
            assert_eq!(selection.tie_count, ranking.ties.len());
            assert_eq!(selection.tie_index, ranking.tie_index);
            assert_eq!(selection.evaluated, ranking.scored.len());
        }
    }

    #[test]
    fn test_no_candidate_when_only_flip_remains() {
        let previous = RoundRecord {
            id: "R1".to_string(),
            timestamp: 0,
            team1: TeamPair::new("A", "B"),
            team2: TeamPair::new("C", "D"),
            rest: Vec::new(),
        };
        let candidates = vec![candidate(("C", "D"), ("A", "B"))];
        let result = select(
            &candidates,
            &HistoryStats::default(),
            Some(&previous),
            &WeightConfig::default(),
            &TieBreakSeed::new("x", 1),
        );
        assert_eq!(result, Err(GenerateError::NoCandidate));
    }

    #[test]
    fn test_select_prefers_lower_score() {
        let history = vec![RoundRecord {
            id: "R1".to_string(),
            timestamp: 0,
            team1: TeamPair::new("A", "B"),
            team2: TeamPair::new("C", "D"),
            rest: Vec::new(),
        }];
        let stats = HistoryStats::from_rounds(&history);
        let candidates = vec![
            candidate(("A", "B"), ("C", "D")),
            candidate(("A", "C"), ("B", "D")),
        ];
        let weights = WeightConfig::new(1, 0, 0);
        let selection = select(
            &candidates,
            &stats,
            history.last(),
            &weights,
            &TieBreakSeed::new("x", 1),
        )
        .unwrap();
        assert_eq!(selection.chosen.candidate, candidates[1]);
        assert_eq!(selection.tie_count, 1);
        assert_eq!(selection.evaluated, 2);
    }
}
