//! SessionState - everything one session-day owns
//!
//! This is also the persisted shape. The core never touches storage; callers
//! load and save the JSON produced here.

use serde::{Deserialize, Serialize};

use crate::roster::{Roster, DEFAULT_ROSTER_SIZE};
use crate::round::RoundRecord;
use crate::weights::WeightConfig;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    /// Session-day key, e.g. `2025-10-15`
    pub session_date: String,
    /// Tie-break seed for the day; falls back to `session_date` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    day_seed: Option<String>,
    pub participants: Roster,
    #[serde(default)]
    pub rounds: Vec<RoundRecord>,
    #[serde(default)]
    pub weights: WeightConfig,
}

impl SessionState {
    /// Fresh day with the default roster, no rounds and default weights
    pub fn new(session_date: impl Into<String>) -> Self {
        Self::with_roster(session_date, Roster::with_default_players(DEFAULT_ROSTER_SIZE))
    }

    pub fn with_roster(session_date: impl Into<String>, participants: Roster) -> Self {
        Self {
            session_date: session_date.into(),
            day_seed: None,
            participants,
            rounds: Vec::new(),
            weights: WeightConfig::default(),
        }
    }

    pub fn day_seed(&self) -> &str {
        self.day_seed.as_deref().unwrap_or(&self.session_date)
    }

    pub fn set_day_seed(&mut self, seed: impl Into<String>) {
        let seed = seed.into();
        self.day_seed = if seed == self.session_date { None } else { Some(seed) };
    }

    /// Index the next generated round will get
    pub fn next_round_index(&self) -> usize {
        self.rounds.len()
    }

    pub fn previous_round(&self) -> Option<&RoundRecord> {
        self.rounds.last()
    }

    /// Parse a persisted session. Data that breaks a model invariant (a self-paired
    /// team, overlapping teams, duplicate participant ids) is an error like any
    /// other malformed input.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::TeamPair;

    #[test]
    fn test_new_session_defaults() {
        let state = SessionState::new("2025-10-15");
        assert_eq!(state.participants.len(), 8);
        assert!(state.rounds.is_empty());
        assert_eq!(state.day_seed(), "2025-10-15");
        assert_eq!(state.next_round_index(), 0);
        assert!(state.previous_round().is_none());
    }

    #[test]
    fn test_day_seed_override() {
        let mut state = SessionState::new("2025-10-15");
        state.set_day_seed("club-night");
        assert_eq!(state.day_seed(), "club-night");
        state.set_day_seed("2025-10-15");
        assert_eq!(state, SessionState::new("2025-10-15"));
    }

    #[test]
    fn test_json_shape() {
        let mut state = SessionState::new("2025-10-15");
        state.rounds.push(RoundRecord {
            id: "R1".to_string(),
            timestamp: 1,
            team1: TeamPair::new("P1", "P2"),
            team2: TeamPair::new("P3", "P4"),
            rest: vec!["P5".to_string()],
        });
        let json = state.to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["sessionDate"], "2025-10-15");
        assert_eq!(value["participants"][0]["name"], "Player 1");
        assert_eq!(value["participants"][0]["justReturned"], false);
        assert_eq!(value["weights"]["wPartner"], 3);
        assert_eq!(value["rounds"][0]["team2"]["a"], "P3");

        assert_eq!(SessionState::from_json(&json).unwrap(), state);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(SessionState::from_json("{not json").is_err());
        assert!(SessionState::from_json(r#"{"rounds":[]}"#).is_err());
    }

    #[test]
    fn test_from_json_rejects_broken_invariants() {
        let mut state = SessionState::new("2025-10-15");
        state.rounds.push(RoundRecord {
            id: "R1".to_string(),
            timestamp: 1,
            team1: TeamPair::new("P1", "P2"),
            team2: TeamPair::new("P3", "P4"),
            rest: Vec::new(),
        });
        let valid = state.to_json_pretty().unwrap();
        assert!(SessionState::from_json(&valid).is_ok());

        let mut value: serde_json::Value = serde_json::from_str(&valid).unwrap();
        value["rounds"][0]["team1"]["b"] = "P1".into();
        assert!(SessionState::from_json(&value.to_string()).is_err());

        let mut value: serde_json::Value = serde_json::from_str(&valid).unwrap();
        value["rounds"][0]["team2"]["a"] = "P2".into();
        assert!(SessionState::from_json(&value.to_string()).is_err());

        let mut value: serde_json::Value = serde_json::from_str(&valid).unwrap();
        value["participants"][1]["id"] = "P1".into();
        assert!(SessionState::from_json(&value.to_string()).is_err());
    }
}
