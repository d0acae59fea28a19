//! Roster - today's participants and the rules for editing them

use serde::{Deserialize, Serialize, Serializer};

use crate::error::{RosterError, SchemaError};
use crate::honorific::normalize_name;
use crate::participant::Participant;

/// Size of the fixed roster a fresh day starts with
pub const DEFAULT_ROSTER_SIZE: usize = 8;

/// Ordered list of participants with unique ids
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<Participant>")]
pub struct Roster(Vec<Participant>);

impl Serialize for Roster {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl TryFrom<Vec<Participant>> for Roster {
    type Error = SchemaError;

    fn try_from(participants: Vec<Participant>) -> Result<Self, Self::Error> {
        for (i, p) in participants.iter().enumerate() {
            if participants[..i].iter().any(|q| q.id == p.id) {
                return Err(SchemaError::DuplicateParticipant(p.id.clone()));
            }
        }
        Ok(Self(participants))
    }
}

impl Roster {
    /// `P1..Pn`, named `Player 1..Player n`, all selected
    pub fn with_default_players(n: usize) -> Self {
        Self(
            (1..=n)
                .map(|i| Participant::new(format!("P{i}"), format!("Player {i}")))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Participant> {
        self.0.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Participant> {
        self.0.iter().find(|p| p.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Participant, RosterError> {
        self.0
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| RosterError::UnknownParticipant(id.to_string()))
    }

    /// Participants that are selected and not away, in roster order
    pub fn eligible(&self) -> impl Iterator<Item = &Participant> {
        self.0.iter().filter(|p| p.is_eligible())
    }

    /// Flip `selected`. Deselecting clears `just_returned`; an away participant
    /// must come back through [`Roster::set_away`] instead.
    pub fn toggle_selected(&mut self, id: &str) -> Result<(), RosterError> {
        let p = self.get_mut(id)?;
        if p.away {
            return Err(RosterError::SelectWhileAway(id.to_string()));
        }
        p.selected = !p.selected;
        if !p.selected {
            p.just_returned = false;
        }
        Ok(())
    }

    /// Step away (only while selected; clears `selected`) or come back (selects the
    /// participant and marks them as just returned).
    pub fn set_away(&mut self, id: &str, away: bool) -> Result<(), RosterError> {
        let p = self.get_mut(id)?;
        if p.away == away {
            return Ok(());
        }
        if away {
            if !p.selected {
                return Err(RosterError::AwayRequiresSelected(id.to_string()));
            }
            p.away = true;
            p.selected = false;
            p.just_returned = false;
        } else {
            p.away = false;
            p.selected = true;
            p.just_returned = true;
        }
        Ok(())
    }

    /// Add a selected guest and return the new id (`G1`, `G2`, ...)
    pub fn add_guest(&mut self, name: &str) -> Result<String, RosterError> {
        let name = normalize_name(name);
        if name.is_empty() {
            return Err(RosterError::EmptyName);
        }
        let id = self.next_guest_id();
        self.0.push(Participant::guest(id.clone(), name));
        Ok(id)
    }

    fn next_guest_id(&self) -> String {
        (1..)
            .map(|n| format!("G{n}"))
            .find(|candidate| self.get(candidate).is_none())
            .unwrap_or_default()
    }

    pub fn remove(&mut self, id: &str) -> Result<Participant, RosterError> {
        let index = self
            .0
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| RosterError::UnknownParticipant(id.to_string()))?;
        Ok(self.0.remove(index))
    }

    /// Clear `just_returned` for everyone listed in `ids`
    pub fn clear_just_returned<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        for id in ids {
            if let Some(p) = self.0.iter_mut().find(|p| p.id == id) {
                p.just_returned = false;
            }
        }
    }

    /// Day reset: drop guests and forget who just returned
    pub fn reset_day(&mut self) {
        self.0.retain(|p| !p.guest);
        for p in &mut self.0 {
            p.just_returned = false;
        }
    }
}
