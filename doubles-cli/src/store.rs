//! Session store - JSON files keyed by session-day
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 2: load(), save()
//! - Level 3: read_session(), read_history()
//! - Level 4: path helpers, validation
//!
//! Layout under the data directory:
//! - `<day>.json`          session state (`sessionDate`, `participants`, `rounds`, ...)
//! - `<day>.history.json`  undo snapshots, oldest first

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use doubles_core::SessionState;
use doubles_engine::Snapshot;

pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    // ========================================================================
    // LEVEL 2 - PHASES
    // ========================================================================

    /// Load the session for `day` with its undo history.
    ///
    /// A missing file, or one that fails to parse or breaks a model invariant,
    /// yields a fresh day with the default roster; I/O failures are errors.
    pub fn load(&self, day: &str) -> Result<(SessionState, Vec<Snapshot>)> {
        validate_day(day)?;
        let Some(state) = self.read_session(day)? else {
            return Ok((SessionState::new(day), Vec::new()));
        };
        let history = self.read_history(day)?;
        Ok((state, history))
    }

    /// Write session and history for the state's day
    pub fn save(&self, state: &SessionState, history: &[Snapshot]) -> Result<()> {
        validate_day(&state.session_date)?;
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create data directory: {}", self.dir.display()))?;

        let session_path = self.session_path(&state.session_date);
        let content = state.to_json_pretty()?;
        std::fs::write(&session_path, content)
            .with_context(|| format!("Failed to write session: {}", session_path.display()))?;

        let history_path = self.history_path(&state.session_date);
        let content = serde_json::to_string(history)?;
        std::fs::write(&history_path, content)
            .with_context(|| format!("Failed to write history: {}", history_path.display()))?;

        tracing::debug!("Saved session to {}", session_path.display());
        Ok(())
    }

    // ========================================================================
    // LEVEL 3 - STEPS
    // ========================================================================

    fn read_session(&self, day: &str) -> Result<Option<SessionState>> {
        let path = self.session_path(day);
        let Some(content) = read_if_exists(&path)? else {
            return Ok(None);
        };
        match SessionState::from_json(&content) {
            Ok(state) if state.session_date == day => Ok(Some(state)),
            Ok(state) => {
                tracing::warn!(
                    "{} belongs to {}, not {}; starting fresh",
                    path.display(),
                    state.session_date,
                    day
                );
                Ok(None)
            }
            Err(e) => {
                tracing::warn!("Ignoring malformed session {}: {}", path.display(), e);
                Ok(None)
            }
        }
    }

    fn read_history(&self, day: &str) -> Result<Vec<Snapshot>> {
        let path = self.history_path(day);
        let Some(content) = read_if_exists(&path)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&content) {
            Ok(history) => Ok(history),
            Err(e) => {
                tracing::warn!("Ignoring malformed undo history {}: {}", path.display(), e);
                Ok(Vec::new())
            }
        }
    }

    // ========================================================================
    // LEVEL 4 - UTILITIES
    // ========================================================================

    fn session_path(&self, day: &str) -> PathBuf {
        self.dir.join(format!("{day}.json"))
    }

    fn history_path(&self, day: &str) -> PathBuf {
        self.dir.join(format!("{day}.history.json"))
    }
}

fn read_if_exists(path: &Path) -> Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
    }
}

/// Session-day keys become file names
fn validate_day(day: &str) -> Result<()> {
    if day.is_empty() || day.starts_with('.') || day.contains(['/', '\\']) {
        bail!("Invalid session day: {day:?}");
    }
    Ok(())
}
