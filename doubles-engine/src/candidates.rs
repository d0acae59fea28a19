//! Candidate Generator - eligible quads and their team partitions
//!
//! Level 3 - Steps

use doubles_core::{Grouping, Participant, Roster, RoundRecord, TeamPair};

use crate::error::GenerateError;

/// Players needed on court for one round
pub const PLAYERS_PER_ROUND: usize = 4;

/// One way to put four players on court: two teams plus everyone left resting
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub team1: TeamPair,
    pub team2: TeamPair,
    /// Eligible participants not in this quad, sorted by id
    pub rest: Vec<String>,
}

impl Candidate {
    pub fn new(team1: TeamPair, team2: TeamPair, rest: Vec<String>) -> Self {
        Self { team1, team2, rest }
    }

    pub fn grouping(&self) -> Grouping {
        Grouping::new(&self.team1, &self.team2)
    }

    /// Turn the chosen candidate into a committed round
    pub fn into_record(self, id: String, timestamp: i64) -> RoundRecord {
        RoundRecord {
            id,
            timestamp,
            team1: self.team1,
            team2: self.team2,
            rest: self.rest,
        }
    }
}

/// Eligible participants in enumeration order.
///
/// Sorted by id, then stably regrouped: just-returned players first, players who
/// rested in `previous` last. The order only decides which quads fall under the
/// enumeration cap.
pub fn rank_pool<'a>(roster: &'a Roster, previous: Option<&RoundRecord>) -> Vec<&'a Participant> {
    let mut pool: Vec<&Participant> = roster.eligible().collect();
    pool.sort_by(|a, b| a.id.cmp(&b.id));
    pool.sort_by_key(|p| rank_tier(p, previous));
    pool
}

fn rank_tier(p: &Participant, previous: Option<&RoundRecord>) -> u8 {
    if p.just_returned {
        0
    } else if previous.is_some_and(|r| r.rested(&p.id)) {
        2
    } else {
        1
    }
}

/// All 4-element subsets of `pool` in lexicographic index order, at most `max_quads`
pub fn enumerate_quads<'a>(pool: &[&'a str], max_quads: usize) -> Vec<[&'a str; 4]> {
    let n = pool.len();
    let mut quads = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            for k in (j + 1)..n {
                for l in (k + 1)..n {
                    if quads.len() >= max_quads {
                        return quads;
                    }
                    quads.push([pool[i], pool[j], pool[k], pool[l]]);
                }
            }
        }
    }
    quads
}

/// The 3 ways to split a quad into two unordered teams of two
pub fn partitions(quad: [&str; 4]) -> [(TeamPair, TeamPair); 3] {
    let [a, b, c, d] = quad;
    [
        (TeamPair::new(a, b), TeamPair::new(c, d)),
        (TeamPair::new(a, c), TeamPair::new(b, d)),
        (TeamPair::new(a, d), TeamPair::new(b, c)),
    ]
}

/// Every candidate for the next round, before filtering.
///
/// Fails with `InsufficientPlayers` when fewer than four participants are eligible.
pub fn generate_candidates(
    roster: &Roster,
    previous: Option<&RoundRecord>,
    max_quads: usize,
) -> Result<Vec<Candidate>, GenerateError> {
    let ranked = rank_pool(roster, previous);
    if ranked.len() < PLAYERS_PER_ROUND {
        return Err(GenerateError::InsufficientPlayers {
            eligible: ranked.len(),
        });
    }

    let pool: Vec<&str> = ranked.iter().map(|p| p.id.as_str()).collect();
    let mut sorted_pool = pool.clone();
    sorted_pool.sort_unstable();

    let quads = enumerate_quads(&pool, max_quads);
    let mut candidates = Vec::with_capacity(quads.len() * 3);
    for quad in quads {
        let rest: Vec<String> = sorted_pool
            .iter()
            .filter(|id| !quad.contains(id))
            .map(|id| id.to_string())
            .collect();
        for (team1, team2) in partitions(quad) {
            candidates.push(Candidate::new(team1, team2, rest.clone()));
        }
    }
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(pool: &[&Participant]) -> Vec<String> {
        pool.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_partitions_cover_all_splits() {
        let parts = partitions(["A", "B", "C", "D"]);
        let groupings: Vec<Grouping> = parts.iter().map(|(t1, t2)| Grouping::new(t1, t2)).collect();
        assert_eq!(groupings.len(), 3);
        assert_ne!(groupings[0], groupings[1]);
        assert_ne!(groupings[1], groupings[2]);
        assert_ne!(groupings[0], groupings[2]);
        for (t1, t2) in &parts {
            assert!(t1.contains("A"));
            assert!(!t2.contains("A"));
        }
    }

    #[test]
    fn test_enumerate_quads_counts() {
        let pool = ["1", "2", "3", "4", "5", "6"];
        assert_eq!(enumerate_quads(&pool, 200).len(), 15); // C(6,4)
        assert_eq!(enumerate_quads(&pool[..4], 200), vec![["1", "2", "3", "4"]]);
        assert!(enumerate_quads(&pool[..3], 200).is_empty());
    }

    #[test]
    fn test_enumerate_quads_cap() {
        let owned: Vec<String> = (0..12).map(|i| format!("P{i:02}")).collect();
        let pool: Vec<&str> = owned.iter().map(String::as_str).collect();
        let quads = enumerate_quads(&pool, 200);
        assert_eq!(quads.len(), 200); // C(12,4) = 495
        assert_eq!(quads[0], ["P00", "P01", "P02", "P03"]);
    }

    #[test]
    fn test_rank_pool_order() {
        let mut roster = Roster::with_default_players(6);
        roster.set_away("P5", true).unwrap();
        roster.set_away("P5", false).unwrap();
        roster.toggle_selected("P6").unwrap();

        let previous = RoundRecord {
            id: "R1".to_string(),
            timestamp: 0,
            team1: TeamPair::new("P1", "P3"),
            team2: TeamPair::new("P4", "P5"),
            rest: vec!["P2".to_string()],
        };

        let ranked = rank_pool(&roster, Some(&previous));
        assert_eq!(ids(&ranked), vec!["P5", "P1", "P3", "P4", "P2"]);

        let ranked = rank_pool(&roster, None);
        assert_eq!(ids(&ranked), vec!["P5", "P1", "P2", "P3", "P4"]);
    }

    #[test]
    fn test_generate_candidates_insufficient() {
        let mut roster = Roster::with_default_players(4);
        roster.set_away("P4", true).unwrap();
        assert_eq!(
            generate_candidates(&roster, None, 200),
            Err(GenerateError::InsufficientPlayers { eligible: 3 })
        );
    }

    #[test]
    fn test_generate_candidates_rest_sets() {
        let roster = Roster::with_default_players(5);
        let candidates = generate_candidates(&roster, None, 200).unwrap();
        assert_eq!(candidates.len(), 5 * 3);
        for c in &candidates {
            assert_eq!(c.rest.len(), 1);
            let resting = &c.rest[0];
            assert!(!c.team1.contains(resting) && !c.team2.contains(resting));
        }
    }
}
