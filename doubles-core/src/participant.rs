//! Participant - one person on today's roster

use serde::{Deserialize, Serialize};

/// A roster entry.
///
/// Invariant: `away` implies `!selected`. `just_returned` only matters while the
/// participant is selected and present; it is cleared once they are placed into a
/// round or deselected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: String,
    #[serde(rename = "name", alias = "displayName")]
    pub display_name: String,
    #[serde(default)]
    pub selected: bool,
    #[serde(default)]
    pub away: bool,
    #[serde(default)]
    pub just_returned: bool,
    /// Transient guest, dropped by a day reset
    #[serde(default, alias = "temporary")]
    pub guest: bool,
}

impl Participant {
    /// Create a selected, present regular participant
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            selected: true,
            away: false,
            just_returned: false,
            guest: false,
        }
    }

    /// Create a selected guest
    pub fn guest(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            guest: true,
            ..Self::new(id, display_name)
        }
    }

    /// Selected and not away
    pub fn is_eligible(&self) -> bool {
        self.selected && !self.away
    }
}
