//! Weights command - show or change the fairness weights
//!
//! Level 1 - Orchestration

use anyhow::Result;
use clap::Args;
use doubles_engine::Session;

use crate::report::{format_weights, print_json};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct WeightsArgs {
    /// Weight for repeated partners (clamped to 0-5)
    #[arg(long, allow_negative_numbers = true)]
    pub partner: Option<i64>,

    /// Weight for repeated opponents (clamped to 0-5)
    #[arg(long, allow_negative_numbers = true)]
    pub opp: Option<i64>,

    /// Weight for similarity to the previous round (clamped to 0-5)
    #[arg(long, allow_negative_numbers = true)]
    pub prev: Option<i64>,

    /// Restore the default weights (applied before any explicit value)
    #[arg(long)]
    pub reset: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

pub fn run(session: &mut Session, args: &WeightsArgs, json: bool) -> Result<()> {
    if args.reset {
        session.reset_weights();
    }
    if let Some(value) = args.partner {
        session.set_partner_weight(value);
    }
    if let Some(value) = args.opp {
        session.set_opponent_weight(value);
    }
    if let Some(value) = args.prev {
        session.set_previous_weight(value);
    }

    let weights = session.state().weights;
    if json {
        print_json(&weights)?;
    } else {
        println!("Weights: {}", format_weights(&weights));
    }
    Ok(())
}
