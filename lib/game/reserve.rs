use crate::grid::{PieceKind, PlayerId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::{Index, IndexMut};

/// The pieces a player has yet to put on the board.
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(transparent)]
pub struct Reserve(BTreeMap<PieceKind, u16>);

impl Reserve {
    /// How many pieces of a kind are left.
    #[inline(always)]
    pub fn count(&self, kind: PieceKind) -> u16 {
        self.0.get(&kind).copied().unwrap_or(0)
    }

    /// How many pieces are left in total.
    pub fn total(&self) -> u32 {
        self.0.values().map(|&n| n as u32).sum()
    }

    /// Whether no pieces are left.
    pub fn is_empty(&self) -> bool {
        self.0.values().all(|&n| n == 0)
    }

    /// An iterator over the kinds that are left and their counts.
    pub fn iter(&self) -> impl Iterator<Item = (PieceKind, u16)> + '_ {
        self.0.iter().filter(|(_, &n)| n > 0).map(|(&k, &n)| (k, n))
    }

    /// Removes a piece of a kind, unless none is left.
    ///
    /// Returns whether a piece was removed.
    pub fn take(&mut self, kind: PieceKind) -> bool {
        match self.0.get_mut(&kind) {
            Some(n) if *n > 0 => {
                *n -= 1;
                true
            }

            _ => false,
        }
    }

    /// Returns a piece of a kind.
    pub fn put(&mut self, kind: PieceKind) {
        let n = self.0.entry(kind).or_default();
        *n = n.saturating_add(1);
    }
}

impl FromIterator<(PieceKind, u16)> for Reserve {
    fn from_iter<I: IntoIterator<Item = (PieceKind, u16)>>(iter: I) -> Self {
        Reserve(iter.into_iter().collect())
    }
}

/// The [`Reserve`]s of both players.
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(default, deny_unknown_fields)]
pub struct Reserves {
    pub one: Reserve,
    pub two: Reserve,
}

impl Reserves {
    /// Whether both reserves are empty.
    pub fn is_depleted(&self) -> bool {
        self.one.is_empty() && self.two.is_empty()
    }
}

impl Index<PlayerId> for Reserves {
    type Output = Reserve;

    #[inline(always)]
    fn index(&self, p: PlayerId) -> &Self::Output {
        match p {
            PlayerId::One => &self.one,
            PlayerId::Two => &self.two,
        }
    }
}

impl IndexMut<PlayerId> for Reserves {
    #[inline(always)]
    fn index_mut(&mut self, p: PlayerId) -> &mut Self::Output {
        match p {
            PlayerId::One => &mut self.one,
            PlayerId::Two => &mut self.two,
        }
    }
}
