use crate::grid::{Direction, Perspective, PieceKind, PlayerId};
use serde::{Deserialize, Serialize};

/// Describes how a [`PieceKind`] moves and captures.
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(default, deny_unknown_fields)]
pub struct Capability {
    /// Directions the piece steps along, in the order they are enumerated.
    #[cfg_attr(test, strategy(proptest::collection::vec(proptest::sample::select(Direction::ALL.to_vec()), 0..4)))]
    pub directions: Vec<Direction>,

    /// Whether the piece keeps stepping along a direction until blocked.
    pub slides: bool,

    /// Whether a slide that runs into an opponent piece captures it.
    pub slide_captures: bool,

    /// Whether the piece captures by jumping over an adjacent opponent piece
    /// along one of its directions onto the blank cell right behind it.
    pub jumps: bool,

    /// Fixed offsets the piece may leap to regardless of what lies in between.
    #[cfg_attr(test, strategy(proptest::collection::vec(proptest::sample::select(vec![Direction(1, 2), Direction(-2, 1), Direction(2, 2)]), 0..3)))]
    pub leaps: Vec<Direction>,

    /// Whether directions and leaps are given from the point of view of
    /// [`PlayerId::One`], that is, mirrored for [`PlayerId::Two`].
    pub forward_only: bool,

    /// The kind this piece turns into upon reaching the far edge of the board.
    #[cfg_attr(test, strategy(proptest::strategy::Just(None)))]
    pub promotion: Option<PieceKind>,
}

impl Capability {
    /// The directions as seen by the owner of the piece.
    pub fn directions(&self, owner: PlayerId) -> impl Iterator<Item = Direction> + '_ {
        self.directions.iter().map(move |d| self.orient(*d, owner))
    }

    /// The leaps as seen by the owner of the piece.
    pub fn leaps(&self, owner: PlayerId) -> impl Iterator<Item = Direction> + '_ {
        self.leaps.iter().map(move |d| self.orient(*d, owner))
    }

    #[inline(always)]
    fn orient(&self, d: Direction, owner: PlayerId) -> Direction {
        if self.forward_only {
            d.perspective(owner)
        } else {
            d
        }
    }
}
