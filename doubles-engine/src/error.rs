//! Error types for round generation

/// Why no round could be generated. Session state is unchanged in both cases.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    #[error("need at least 4 selected players who are not away, have {eligible}")]
    InsufficientPlayers { eligible: usize },

    #[error("every candidate pairing repeats the previous round with teams swapped")]
    NoCandidate,
}
