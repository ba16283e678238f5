use crate::grid::{Board, Cell, Piece, Pos};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{self, Write};

/// The table of symbols used to write down a [`Board`] as text.
///
/// In a layout, every line is a row and every character a column, where
/// [`Legend::NULL`] marks cells outside the playable area, [`Legend::BLANK`]
/// marks empty cells, and any other character is looked up in the legend.
#[derive(Debug, Default, Clone, Eq, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Legend(BTreeMap<char, Piece>);

/// The reason why parsing a [`Board`] layout failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum ParseLayoutError {
    #[display(fmt = "the layout has no cells")]
    Empty,
    #[display(fmt = "the layout exceeds 255 rows or columns")]
    TooLarge,
    #[display(fmt = "unknown symbol `{symbol}` at `{pos}`")]
    UnknownSymbol { symbol: char, pos: Pos },
}

impl Legend {
    /// The symbol for [`Cell::Null`].
    pub const NULL: char = ' ';

    /// The symbol for [`Cell::Blank`].
    pub const BLANK: char = '_';

    /// The [`Piece`] a symbol stands for, if any.
    #[inline(always)]
    pub fn piece(&self, symbol: char) -> Option<Piece> {
        self.0.get(&symbol).copied()
    }

    /// The symbol that stands for a [`Piece`], if any.
    pub fn symbol(&self, piece: Piece) -> Option<char> {
        self.0.iter().find(|(_, &p)| p == piece).map(|(&c, _)| c)
    }

    /// An iterator over all symbols and the pieces they stand for.
    pub fn iter(&self) -> impl Iterator<Item = (char, Piece)> + '_ {
        self.0.iter().map(|(&c, &p)| (c, p))
    }

    /// Parses a [`Board`] from its rows.
    ///
    /// Rows shorter than the longest one are padded with [`Cell::Null`].
    pub fn parse<'a, I>(&self, rows: I) -> Result<Board, ParseLayoutError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let rows: Vec<Vec<char>> = rows.into_iter().map(|r| r.chars().collect()).collect();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);

        if width == 0 {
            return Err(ParseLayoutError::Empty);
        }

        let (height, width) = match (u8::try_from(rows.len()), u8::try_from(width)) {
            (Ok(h), Ok(w)) => (h, w),
            _ => return Err(ParseLayoutError::TooLarge),
        };

        let mut board = Board::new(height, width);
        let positions: Vec<_> = board.positions().collect();
        for pos in positions {
            let symbol = rows[pos.row as usize].get(pos.col as usize).copied();
            let cell = match symbol.unwrap_or(Legend::NULL) {
                Legend::NULL => Cell::Null,
                Legend::BLANK => Cell::Blank,
                symbol => match self.piece(symbol) {
                    Some(p) => Cell::Occupied(p),
                    None => return Err(ParseLayoutError::UnknownSymbol { symbol, pos }),
                },
            };

            board.set(pos, cell).map_err(|_| ParseLayoutError::TooLarge)?;
        }

        Ok(board)
    }

    /// Parses a [`Board`] from multi-line text.
    pub fn parse_text(&self, text: &str) -> Result<Board, ParseLayoutError> {
        self.parse(text.lines())
    }

    /// Writes down a [`Board`] using this legend.
    ///
    /// Pieces without a symbol are written as `?`.
    pub fn render<'a>(&'a self, board: &'a Board) -> Layout<'a> {
        Layout {
            legend: self,
            board,
        }
    }
}

impl FromIterator<(char, Piece)> for Legend {
    fn from_iter<I: IntoIterator<Item = (char, Piece)>>(iter: I) -> Self {
        Legend(iter.into_iter().collect())
    }
}

/// A [`Board`] written down with a [`Legend`].
#[derive(Debug, Copy, Clone)]
pub struct Layout<'a> {
    legend: &'a Legend,
    board: &'a Board,
}

impl fmt::Display for Layout<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (pos, cell) in self.board.iter() {
            if pos.col == 0 && pos.row > 0 {
                f.write_char('\n')?;
            }

            f.write_char(match cell {
                Cell::Null => Legend::NULL,
                Cell::Blank => Legend::BLANK,
                Cell::Occupied(p) => self.legend.symbol(p).unwrap_or('?'),
            })?;
        }

        Ok(())
    }
}
