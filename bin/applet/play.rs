use crate::{game::Game, render::Render, terminal::Terminal, variant::Variant};
use anyhow::Error as Anyhow;
use clap::Parser;
use lib::game::GameState;
use std::io::{stdin, stdout};
use tracing::{info, instrument};

/// Plays a game on the terminal, both players taking turns at the keyboard.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Play {
    /// One of the built-in variants or the path to a variant file.
    #[clap(default_value = "amethyst")]
    variant: Variant,
}

impl Play {
    #[instrument(level = "trace", skip(self), err, fields(variant = %self.variant))]
    pub fn execute(self) -> Result<(), Anyhow> {
        let rules = self.variant.into_rules();
        let state = GameState::new(&rules)?;

        let terminal = Terminal::new(stdout(), stdin().lock());
        let state = Game::new(terminal).play(&rules, state)?;

        println!("{}", Render::new(&rules, &state));

        if let Some(o) = state.outcome() {
            info!(outcome = %o, round = state.round());
        }

        Ok(())
    }
}
