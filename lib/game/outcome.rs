use crate::grid::PlayerId;
use derive_more::Display;

/// One of the possible outcomes of a game.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Outcome {
    #[display(fmt = "player {_0} wins")]
    Winner(PlayerId),

    #[display(fmt = "draw")]
    Draw,
}

impl Outcome {
    /// Whether neither side has won.
    pub fn is_draw(&self) -> bool {
        !self.is_decisive()
    }

    /// Whether one of the sides has won.
    pub fn is_decisive(&self) -> bool {
        matches!(self, Outcome::Winner(_))
    }

    /// The winning side, if the outcome is [decisive](`Self::is_decisive`).
    pub fn winner(&self) -> Option<PlayerId> {
        match *self {
            Outcome::Winner(p) => Some(p),
            Outcome::Draw => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn outcome_is_either_draw_or_decisive(o: Outcome) {
        assert_ne!(o.is_draw(), o.is_decisive());
    }

    #[proptest]
    fn neither_side_wins_if_draw(#[filter(#o.is_draw())] o: Outcome) {
        assert_eq!(o.winner(), None);
    }

    #[proptest]
    fn winner_is_the_side_named_by_the_outcome(p: PlayerId) {
        assert_eq!(Outcome::Winner(p).winner(), Some(p));
    }
}
