use crate::grid::{Move, Piece, Pos};
use derive_more::{Deref, Display};

/// A legal [`Move`] together with its effects on the board.
#[derive(Debug, Display, Clone, Eq, PartialEq, Hash, Deref)]
#[display(fmt = "{m}")]
pub struct MoveContext {
    #[deref]
    pub(crate) m: Move,
    pub(crate) piece: Piece,
    pub(crate) capture: Option<Pos>,
    pub(crate) flips: Vec<Pos>,
}

impl MoveContext {
    /// The move itself.
    #[inline(always)]
    pub fn r#move(&self) -> Move {
        self.m
    }

    /// The piece that is placed or moved.
    #[inline(always)]
    pub fn piece(&self) -> Piece {
        self.piece
    }

    /// The cell whose piece is removed, if any.
    #[inline(always)]
    pub fn capture(&self) -> Option<Pos> {
        self.capture
    }

    /// Whether this move removes an opponent piece.
    #[inline(always)]
    pub fn is_capture(&self) -> bool {
        self.capture.is_some()
    }

    /// The opponent pieces converted by this placement.
    #[inline(always)]
    pub fn flips(&self) -> &[Pos] {
        &self.flips
    }
}
