use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::ops::Not;

/// One of the two sides of a game.
#[derive(
    Debug, Display, Default, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize,
    Serialize,
)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
pub enum PlayerId {
    #[default]
    #[display(fmt = "one")]
    One,
    #[display(fmt = "two")]
    Two,
}

impl PlayerId {
    /// Both players, in turn order starting from [`PlayerId::One`].
    #[inline(always)]
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        [PlayerId::One, PlayerId::Two].into_iter()
    }
}

impl Not for PlayerId {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }
}
