use crate::game::Outcome;
use derive_more::Display;

/// The stage a game is in.
///
/// Games with reserves start in [`Phase::Placement`] and move on to
/// [`Phase::Movement`] once every reserve is depleted.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Phase {
    #[display(fmt = "placement")]
    Placement,

    #[display(fmt = "movement")]
    Movement,

    #[display(fmt = "finished, {_0}")]
    Finished(Outcome),
}

impl Phase {
    /// The [`Outcome`] of the game, if it has finished.
    pub fn outcome(&self) -> Option<Outcome> {
        match *self {
            Phase::Finished(o) => Some(o),
            _ => None,
        }
    }

    /// Whether the game has finished.
    pub fn is_finished(&self) -> bool {
        self.outcome().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn only_finished_phase_has_an_outcome(p: Phase) {
        assert_eq!(p.is_finished(), matches!(p, Phase::Finished(_)));
    }

    #[proptest]
    fn finished_phase_holds_its_outcome(o: Outcome) {
        assert_eq!(Phase::Finished(o).outcome(), Some(o));
    }
}
