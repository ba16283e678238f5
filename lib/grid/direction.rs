use crate::grid::Perspective;
use derive_more::{Constructor, Display};
use serde::{Deserialize, Serialize};
use std::ops::Neg;

/// A displacement on the board, as a pair of row and column deltas.
///
/// Rows grow downwards, so `Direction(-1, 0)` points towards the top edge,
/// which is _forward_ from the point of view of [`PlayerId::One`][`crate::grid::PlayerId`].
#[derive(
    Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Constructor, Deserialize, Serialize,
)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "({_0}, {_1})")]
pub struct Direction(
    #[cfg_attr(test, strategy(-8i8..=8))] pub i8,
    #[cfg_attr(test, strategy(-8i8..=8))] pub i8,
);

impl Direction {
    /// The four orthogonal directions, clockwise from north.
    pub const ORTHOGONAL: [Direction; 4] = [
        Direction(-1, 0),
        Direction(0, 1),
        Direction(1, 0),
        Direction(0, -1),
    ];

    /// The four diagonal directions, clockwise from north-east.
    pub const DIAGONAL: [Direction; 4] = [
        Direction(-1, 1),
        Direction(1, 1),
        Direction(1, -1),
        Direction(-1, -1),
    ];

    /// All eight neighbouring directions, clockwise from north.
    pub const ALL: [Direction; 8] = [
        Direction(-1, 0),
        Direction(-1, 1),
        Direction(0, 1),
        Direction(1, 1),
        Direction(1, 0),
        Direction(1, -1),
        Direction(0, -1),
        Direction(-1, -1),
    ];

    /// The row delta.
    #[inline(always)]
    pub fn row(&self) -> i8 {
        self.0
    }

    /// The column delta.
    #[inline(always)]
    pub fn col(&self) -> i8 {
        self.1
    }
}

impl Neg for Direction {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Direction(-self.0, -self.1)
    }
}

impl Perspective for Direction {
    /// Mirrors the row delta, so that forward for one side is forward for the other.
    #[inline(always)]
    fn flip(&self) -> Self {
        Direction(-self.0, self.1)
    }
}
