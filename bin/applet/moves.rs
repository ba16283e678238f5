use crate::variant::Variant;
use anyhow::{Context, Error as Anyhow};
use clap::Parser;
use lib::game::GameState;
use tracing::{info, instrument};

/// Lists the legal moves of a variant, optionally after some moves are played.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Moves {
    /// One of the built-in variants or the path to a variant file.
    variant: Variant,

    /// Moves to play first, in coordinate notation.
    history: Vec<String>,
}

impl Moves {
    #[instrument(level = "trace", skip(self), err, fields(variant = %self.variant))]
    pub fn execute(self) -> Result<(), Anyhow> {
        let rules = self.variant.into_rules();
        let mut state = GameState::new(&rules)?;

        for text in &self.history {
            let m = rules.parse(&state, text).context(format!("`{text}`"))?;
            state.play(&rules, m).context(format!("`{text}`"))?;
        }

        let moves = state.moves(&rules);
        info!(player = %state.turn(), phase = %state.phase(), count = moves.len());

        for ctx in moves {
            println!("{ctx}");
        }

        Ok(())
    }
}
