use crate::grid::Direction;
use derive_more::{DebugCustom, Display, Error};
use serde::{Deserialize, Serialize};
use std::{num::ParseIntError, str::FromStr};

/// A cell coordinate on the board, zero-based and counted from the top-left corner.
#[derive(
    DebugCustom, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize, Serialize,
)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[debug(fmt = "Pos({self})")]
#[display(fmt = "{row},{col}")]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    /// Constructs [`Pos`] from a pair of row and column.
    #[inline(always)]
    pub const fn new(row: u8, col: u8) -> Self {
        Pos { row, col }
    }

    /// The [`Pos`] displaced by `d`, if it doesn't fall off the coordinate space.
    ///
    /// This does not check the bounds of any particular board.
    #[inline(always)]
    pub fn offset(&self, d: Direction) -> Option<Self> {
        Some(Pos {
            row: self.row.checked_add_signed(d.row())?,
            col: self.col.checked_add_signed(d.col())?,
        })
    }
}

/// The reason why parsing [`Pos`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum ParsePosError {
    #[display(fmt = "expected coordinates in the form `<row>,<col>`")]
    MissingSeparator,
    #[display(fmt = "failed to parse row")]
    InvalidRow(ParseIntError),
    #[display(fmt = "failed to parse column")]
    InvalidCol(ParseIntError),
}

impl FromStr for Pos {
    type Err = ParsePosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use ParsePosError::*;
        let (row, col) = s.split_once(',').ok_or(MissingSeparator)?;
        Ok(Pos {
            row: row.parse().map_err(InvalidRow)?,
            col: col.parse().map_err(InvalidCol)?,
        })
    }
}
