//! Doubles CLI - fair 2-vs-2 rotation for a club session
//!
//! Commands:
//! - next / preview / undo: generate, inspect and roll back rounds
//! - show: roster, weights and today's rounds
//! - weights: tune the fairness weights
//! - select / away / back / guest / remove / reset: roster edits
//! - seed: show or change the day's tie-break seed
//!
//! Every command loads the session for `--date`, applies one operation and saves
//! the session and its undo history only if something changed.

mod report;
mod roster_cmd;
mod round_cmd;
mod show_cmd;
mod store;
mod weights_cmd;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use doubles_engine::{EngineConfig, Session};

use crate::roster_cmd::RosterEdit;
use crate::round_cmd::PreviewArgs;
use crate::store::SessionStore;
use crate::weights_cmd::WeightsArgs;

#[derive(Parser)]
#[command(name = "doubles")]
#[command(about = "Fair 2-vs-2 round rotation for recreational sessions")]
struct Cli {
    /// Directory holding session files
    #[arg(long, global = true, default_value = ".doubles")]
    data_dir: PathBuf,

    /// Session day (defaults to today's local date, YYYY-MM-DD)
    #[arg(long, global = true)]
    date: Option<String>,

    /// Upper bound on 4-player groups considered per round
    #[arg(long, global = true, default_value = "200")]
    max_quads: usize,

    /// Output results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate and commit the next round
    Next,
    /// Show how the next round would be chosen, without committing it
    Preview(PreviewArgs),
    /// Roll back the last change
    Undo,
    /// Show roster, weights and today's rounds
    Show,
    /// Show or change the fairness weights
    Weights(WeightsArgs),
    /// Toggle whether a participant is in the rotation
    Select { id: String },
    /// Mark a selected participant as temporarily away
    Away { id: String },
    /// Bring an away participant back (they get priority next round)
    Back { id: String },
    /// Add a guest for today
    Guest {
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },
    /// Remove a participant from the roster
    Remove { id: String },
    /// Clear today's rounds and guests
    Reset,
    /// Show or change the day's tie-break seed
    Seed { value: Option<String> },
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let day = cli.date.clone().unwrap_or_else(today);
    let store = SessionStore::new(&cli.data_dir);

    let (state, history) = store.load(&day)?;
    let config = EngineConfig::default().with_max_quads(cli.max_quads);
    let mut session = Session::with_history(state, history, config);

    let before = session.state().clone();
    let undo_before = session.undo_len();

    dispatch(cli.command, &mut session, cli.json)?;

    if session.state() != &before || session.undo_len() != undo_before {
        store.save(session.state(), &session.history())?;
    }
    Ok(())
}

fn dispatch(command: Commands, session: &mut Session, json: bool) -> Result<()> {
    match command {
        Commands::Next => round_cmd::run_next(session, json),
        Commands::Preview(args) => round_cmd::run_preview(session, &args, json),
        Commands::Undo => round_cmd::run_undo(session, json),
        Commands::Show => show_cmd::run_show(session, json),
        Commands::Weights(args) => weights_cmd::run(session, &args, json),
        Commands::Select { id } => roster_cmd::run(session, RosterEdit::ToggleSelected(id), json),
        Commands::Away { id } => roster_cmd::run(session, RosterEdit::Away(id), json),
        Commands::Back { id } => roster_cmd::run(session, RosterEdit::Back(id), json),
        Commands::Guest { name } => {
            roster_cmd::run(session, RosterEdit::AddGuest(name.join(" ")), json)
        }
        Commands::Remove { id } => roster_cmd::run(session, RosterEdit::Remove(id), json),
        Commands::Reset => roster_cmd::run(session, RosterEdit::ResetToday, json),
        Commands::Seed { value } => show_cmd::run_seed(session, value, json),
    }
}

/// Logs go to stderr so `--json` output stays clean
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}
