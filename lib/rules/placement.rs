use crate::grid::{Board, Cell, Direction, Piece, Pos};
use serde::{Deserialize, Serialize};

/// Restrictions and side effects of putting pieces on the board.
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlacementRules {
    /// Cells where pieces may never be placed.
    pub forbidden: Vec<Pos>,

    /// Whether opponent pieces flanked by the placed piece and another piece
    /// of the same owner along a straight line are converted.
    pub flanking: bool,

    /// Whether a placement must convert at least one opponent piece.
    pub must_flip: bool,
}

impl PlacementRules {
    /// Whether pieces may be placed at `pos` at all.
    #[inline(always)]
    pub fn is_forbidden(&self, pos: Pos) -> bool {
        self.forbidden.contains(&pos)
    }

    /// The opponent pieces converted by placing `piece` at `target`.
    ///
    /// Directions are scanned clockwise from north.
    pub fn flips(&self, board: &Board, piece: Piece, target: Pos) -> Vec<Pos> {
        let mut flips = Vec::new();

        if !self.flanking {
            return flips;
        }

        for d in Direction::ALL {
            let mut line = Vec::new();
            let mut at = target;

            while let Some(next) = board.step(at, d) {
                match board.get(next) {
                    Ok(Cell::Occupied(p)) if p.owner != piece.owner => line.push(next),
                    Ok(Cell::Occupied(_)) => {
                        flips.append(&mut line);
                        break;
                    }

                    _ => break,
                }

                at = next;
            }
        }

        flips
    }
}
