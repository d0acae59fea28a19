//! Error types for roster edits

/// Rejected roster edit. The roster is left untouched when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("unknown participant: {0}")]
    UnknownParticipant(String),

    #[error("participant {0} must be selected before stepping away")]
    AwayRequiresSelected(String),

    #[error("participant {0} is away; bring them back instead of selecting")]
    SelectWhileAway(String),

    #[error("participant name is empty")]
    EmptyName,
}

/// Persisted data that parses but breaks a data-model invariant.
///
/// Raised from deserialization, so loaders see it as an ordinary serde error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("team pairs {0} with themselves")]
    SelfPairedTeam(String),

    #[error("participant id {0} appears more than once")]
    DuplicateParticipant(String),

    #[error("round {round} puts {id} on both teams")]
    OverlappingTeams { round: String, id: String },

    #[error("round {round} lists {id} as resting while on court")]
    RestingOnCourt { round: String, id: String },
}
