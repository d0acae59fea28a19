//! Constraint Filter - the hard anti-rematch rule
//!
//! Level 3 - Steps
//!
//! A candidate is rejected iff it puts the same two teams on court as the most
//! recent round with team1 and team2 swapped. Only that single round is checked.

use doubles_core::RoundRecord;

use crate::candidates::Candidate;

/// Same grouping as `previous`, teams in swapped order
pub fn is_flip(candidate: &Candidate, previous: &RoundRecord) -> bool {
    candidate.grouping() == previous.grouping()
        && candidate.team1 == previous.team2
        && candidate.team2 == previous.team1
}

/// Whether `candidate` may be scored at all
pub fn passes(candidate: &Candidate, previous: Option<&RoundRecord>) -> bool {
    previous.map_or(true, |prev| !is_flip(candidate, prev))
}

#[cfg(test)]
mod tests {
    use super::*;
    use doubles_core::TeamPair;

    fn previous() -> RoundRecord {
        RoundRecord {
            id: "R1".to_string(),
            timestamp: 0,
            team1: TeamPair::new("A", "B"),
            team2: TeamPair::new("C", "D"),
            rest: vec!["E".to_string()],
        }
    }

    fn candidate(t1: (&str, &str), t2: (&str, &str)) -> Candidate {
        Candidate::new(TeamPair::new(t1.0, t1.1), TeamPair::new(t2.0, t2.1), Vec::new())
    }

    #[test]
    fn test_flip_rejected() {
        let prev = previous();
        let flip = candidate(("C", "D"), ("A", "B"));
        assert!(is_flip(&flip, &prev));
        assert!(!passes(&flip, Some(&prev)));

        // member order inside a team does not matter
        let flip = candidate(("D", "C"), ("B", "A"));
        assert!(!passes(&flip, Some(&prev)));
    }

    #[test]
    fn test_regrouping_accepted() {
        let prev = previous();
        assert!(passes(&candidate(("A", "C"), ("B", "D")), Some(&prev)));
        assert!(passes(&candidate(("A", "D"), ("B", "C")), Some(&prev)));
    }

    #[test]
    fn test_same_orientation_is_not_a_flip() {
        let prev = previous();
        assert!(passes(&candidate(("A", "B"), ("C", "D")), Some(&prev)));
    }

    #[test]
    fn test_different_players_accepted() {
        let prev = previous();
        assert!(passes(&candidate(("C", "D"), ("A", "E")), Some(&prev)));
    }

    #[test]
    fn test_no_previous_round() {
        assert!(passes(&candidate(("C", "D"), ("A", "B")), None));
    }
}
