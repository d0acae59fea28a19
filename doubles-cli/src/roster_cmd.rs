//! Roster commands - select, step away, come back, guests, day reset
//!
//! Level 1 - Orchestration; every edit goes through `Session` so it is undoable.

use anyhow::Result;
use doubles_engine::Session;

use crate::report::{format_participant, name_of, print_json};

/// One roster edit requested on the command line
pub enum RosterEdit {
    ToggleSelected(String),
    Away(String),
    Back(String),
    AddGuest(String),
    Remove(String),
    ResetToday,
}

pub fn run(session: &mut Session, edit: RosterEdit, json: bool) -> Result<()> {
    let message = apply(session, edit)?;

    if json {
        print_json(&session.state().participants)?;
    } else {
        println!("{message}");
        for p in session.state().participants.iter() {
            println!("  {}", format_participant(p));
        }
    }
    Ok(())
}

fn apply(session: &mut Session, edit: RosterEdit) -> Result<String> {
    let message = match edit {
        RosterEdit::ToggleSelected(id) => {
            session.toggle_selected(&id)?;
            let selected = session
                .state()
                .participants
                .get(&id)
                .is_some_and(|p| p.selected);
            let verb = if selected { "selected" } else { "deselected" };
            format!("{} {verb}.", name_of(session.state(), &id))
        }
        RosterEdit::Away(id) => {
            session.set_away(&id, true)?;
            format!("{} stepped away.", name_of(session.state(), &id))
        }
        RosterEdit::Back(id) => {
            session.set_away(&id, false)?;
            format!("{} is back.", name_of(session.state(), &id))
        }
        RosterEdit::AddGuest(name) => {
            let id = session.add_guest(&name)?;
            format!("Added guest {} as {id}.", name_of(session.state(), &id))
        }
        RosterEdit::Remove(id) => {
            let name = name_of(session.state(), &id);
            session.remove_participant(&id)?;
            format!("Removed {name}.")
        }
        RosterEdit::ResetToday => {
            session.reset_today();
            tracing::info!("Reset session {}", session.state().session_date);
            "Cleared today's rounds and guests.".to_string()
        }
    };
    Ok(message)
}
