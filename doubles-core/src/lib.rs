//! Doubles Core - data model for doubles rotation sessions
//!
//! This crate provides the value types the rotation engine works on:
//! - Participants and the roster editing rules
//! - Team pairs, canonical pair keys and groupings
//! - Committed round records
//! - Fairness weights
//! - The per-day session state (also the persisted shape)

pub mod error;
pub mod honorific;
pub mod participant;
pub mod roster;
pub mod round;
pub mod session;
pub mod weights;

// Re-exports for convenient access
pub use error::{RosterError, SchemaError};
pub use honorific::{normalize_name, with_honorific};
pub use participant::Participant;
pub use roster::{Roster, DEFAULT_ROSTER_SIZE};
pub use round::{Grouping, PairKey, RoundRecord, TeamPair};
pub use session::SessionState;
pub use weights::{clamp_weight, WeightConfig, MAX_WEIGHT};
