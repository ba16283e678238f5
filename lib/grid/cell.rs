use crate::grid::{Piece, PlayerId};

/// The contents of a cell on the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Cell {
    /// Not part of the playable area.
    Null,
    /// Empty and playable.
    Blank,
    /// Playable and holding a [`Piece`].
    Occupied(Piece),
}

impl Cell {
    #[inline(always)]
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    #[inline(always)]
    pub fn is_blank(&self) -> bool {
        matches!(self, Cell::Blank)
    }

    #[inline(always)]
    pub fn is_occupied(&self) -> bool {
        matches!(self, Cell::Occupied(_))
    }

    /// The [`Piece`] in this cell, if any.
    #[inline(always)]
    pub fn piece(&self) -> Option<Piece> {
        match *self {
            Cell::Occupied(p) => Some(p),
            _ => None,
        }
    }

    /// The owner of the [`Piece`] in this cell, if any.
    #[inline(always)]
    pub fn owner(&self) -> Option<PlayerId> {
        self.piece().map(|p| p.owner)
    }
}

impl From<Piece> for Cell {
    #[inline(always)]
    fn from(p: Piece) -> Self {
        Cell::Occupied(p)
    }
}
