use derive_more::Constructor;
use lib::game::GameState;
use lib::grid::PlayerId;
use lib::rules::RuleSet;
use std::fmt::{self, Display, Formatter};

/// Writes down a [`GameState`] for people to read.
///
/// The board is printed in its layout notation, followed by a summary of
/// whose turn it is and what is left in the reserves.
#[derive(Debug, Copy, Clone, Constructor)]
pub struct Render<'a> {
    rules: &'a RuleSet,
    state: &'a GameState,
}

impl Display for Render<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let state = self.state;

        writeln!(f, "{}", self.rules.legend.render(state.board()))?;
        write!(f, "round {}, {} phase", state.round(), state.phase())?;

        if state.outcome().is_none() {
            write!(f, ", player {} to move", state.turn())?;
        }

        if let Some(pos) = state.pending_capture() {
            write!(f, ", capturing with `{pos}`")?;
        }

        for p in PlayerId::iter() {
            let reserve = &state.reserves()[p];
            if !reserve.is_empty() {
                write!(f, "\nreserve of player {p}:")?;
                for (kind, n) in reserve.iter() {
                    write!(f, " {kind}x{n}")?;
                }
            }
        }

        Ok(())
    }
}
