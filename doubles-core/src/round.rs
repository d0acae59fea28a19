//! Teams, pair keys and committed rounds

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

/// Canonical key for an unordered pair of participant ids (`min-max`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairKey(String, String);

impl PairKey {
    pub fn new(x: &str, y: &str) -> Self {
        if x <= y {
            Self(x.to_string(), y.to_string())
        } else {
            Self(y.to_string(), x.to_string())
        }
    }

    pub fn first(&self) -> &str {
        &self.0
    }

    pub fn second(&self) -> &str {
        &self.1
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.0, self.1)
    }
}

/// Two distinct participants playing on the same side.
///
/// Members are stored sorted, so derived equality is order-independent.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawTeamPair")]
pub struct TeamPair {
    a: String,
    b: String,
}

#[derive(Deserialize)]
struct RawTeamPair {
    a: String,
    b: String,
}

impl TryFrom<RawTeamPair> for TeamPair {
    type Error = SchemaError;

    fn try_from(raw: RawTeamPair) -> Result<Self, Self::Error> {
        if raw.a == raw.b {
            return Err(SchemaError::SelfPairedTeam(raw.a));
        }
        Ok(TeamPair::new(raw.a, raw.b))
    }
}

impl TeamPair {
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Self {
        let (x, y) = (x.into(), y.into());
        debug_assert_ne!(x, y, "a team needs two distinct players");
        if x <= y {
            Self { a: x, b: y }
        } else {
            Self { a: y, b: x }
        }
    }

    pub fn a(&self) -> &str {
        &self.a
    }

    pub fn b(&self) -> &str {
        &self.b
    }

    pub fn members(&self) -> [&str; 2] {
        [&self.a, &self.b]
    }

    pub fn contains(&self, id: &str) -> bool {
        self.a == id || self.b == id
    }

    pub fn key(&self) -> PairKey {
        PairKey::new(&self.a, &self.b)
    }

    /// The four cross pairs between this team and `other`
    pub fn cross_keys(&self, other: &TeamPair) -> [PairKey; 4] {
        [
            PairKey::new(&self.a, &other.a),
            PairKey::new(&self.a, &other.b),
            PairKey::new(&self.b, &other.a),
            PairKey::new(&self.b, &other.b),
        ]
    }
}

impl fmt::Display for TeamPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} & {}", self.a, self.b)
    }
}

/// Canonical form of "two unordered teams of an unordered 4-set".
///
/// Team members are sorted inside `TeamPair`; the two teams are sorted here. Two
/// groupings are equal iff they put the same people together, whatever the team order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grouping([TeamPair; 2]);

impl Grouping {
    pub fn new(t1: &TeamPair, t2: &TeamPair) -> Self {
        if t1 <= t2 {
            Self([t1.clone(), t2.clone()])
        } else {
            Self([t2.clone(), t1.clone()])
        }
    }

    pub fn teams(&self) -> &[TeamPair; 2] {
        &self.0
    }

    /// Sorted ids of all four players
    pub fn players(&self) -> [&str; 4] {
        let mut ids = [self.0[0].a(), self.0[0].b(), self.0[1].a(), self.0[1].b()];
        ids.sort_unstable();
        ids
    }
}

/// A committed round. Immutable once appended to the day's history.
///
/// Loading rejects rounds that put someone on both teams or on court and resting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRoundRecord")]
pub struct RoundRecord {
    pub id: String,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
    pub team1: TeamPair,
    pub team2: TeamPair,
    /// Eligible participants left out of this round, sorted by id
    #[serde(default)]
    pub rest: Vec<String>,
}

#[derive(Deserialize)]
struct RawRoundRecord {
    id: String,
    timestamp: i64,
    team1: TeamPair,
    team2: TeamPair,
    #[serde(default)]
    rest: Vec<String>,
}

impl TryFrom<RawRoundRecord> for RoundRecord {
    type Error = SchemaError;

    fn try_from(raw: RawRoundRecord) -> Result<Self, Self::Error> {
        let record = RoundRecord {
            id: raw.id,
            timestamp: raw.timestamp,
            team1: raw.team1,
            team2: raw.team2,
            rest: raw.rest,
        };
        record.validate()?;
        Ok(record)
    }
}

impl RoundRecord {
    /// Check that the four placed players are distinct and none of them rests
    pub fn validate(&self) -> Result<(), SchemaError> {
        if let Some(id) = self.team1.members().into_iter().find(|id| self.team2.contains(id)) {
            return Err(SchemaError::OverlappingTeams {
                round: self.id.clone(),
                id: id.to_string(),
            });
        }
        if let Some(id) = self.rest.iter().find(|id| self.involves(id)) {
            return Err(SchemaError::RestingOnCourt {
                round: self.id.clone(),
                id: id.to_string(),
            });
        }
        Ok(())
    }

    /// Deterministic id for the round at `round_index` (0-based)
    pub fn id_for(round_index: usize) -> String {
        format!("R{}", round_index + 1)
    }

    pub fn grouping(&self) -> Grouping {
        Grouping::new(&self.team1, &self.team2)
    }

    /// Sorted ids of the four placed players
    pub fn players(&self) -> [&str; 4] {
        let mut ids = [self.team1.a(), self.team1.b(), self.team2.a(), self.team2.b()];
        ids.sort_unstable();
        ids
    }

    pub fn involves(&self, id: &str) -> bool {
        self.team1.contains(id) || self.team2.contains(id)
    }

    pub fn rested(&self, id: &str) -> bool {
        self.rest.iter().any(|r| r == id)
    }
}
