use crate::grid::{Cell, Direction, Piece, PlayerId, Pos};
use derive_more::{Display, Error};

/// Represents an access outside the board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "`{_0}` is out of bounds")]
pub struct OutOfBounds(#[error(not(source))] pub Pos);

/// A rectangular grid of [`Cell`]s.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    height: u8,
    width: u8,
    cells: Vec<Cell>,
}

// We provide a custom implementation of Arbitrary rather than deriving,
// so that the number of cells always matches the dimensions.
#[cfg(test)]
impl proptest::arbitrary::Arbitrary for Board {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<Board>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        use proptest::{collection::vec, prelude::*};

        (1..=8u8, 1..=8u8)
            .prop_flat_map(|(height, width)| {
                let n = height as usize * width as usize;
                vec(any::<Cell>(), n).prop_map(move |cells| Board {
                    height,
                    width,
                    cells,
                })
            })
            .boxed()
    }
}

impl Board {
    /// Constructs a [`Board`] where every cell is [`Cell::Blank`].
    pub fn new(height: u8, width: u8) -> Self {
        Board {
            height,
            width,
            cells: vec![Cell::Blank; height as usize * width as usize],
        }
    }

    /// The number of rows.
    #[inline(always)]
    pub fn height(&self) -> u8 {
        self.height
    }

    /// The number of columns.
    #[inline(always)]
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Whether `pos` lies within the grid.
    #[inline(always)]
    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    #[inline(always)]
    fn index(&self, pos: Pos) -> Result<usize, OutOfBounds> {
        if self.in_bounds(pos) {
            Ok(pos.row as usize * self.width as usize + pos.col as usize)
        } else {
            Err(OutOfBounds(pos))
        }
    }

    /// The [`Cell`] at `pos`.
    #[inline(always)]
    pub fn get(&self, pos: Pos) -> Result<Cell, OutOfBounds> {
        Ok(self.cells[self.index(pos)?])
    }

    /// Replaces the [`Cell`] at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if asked to place a piece on a [`Cell::Null`].
    #[inline(always)]
    pub fn set(&mut self, pos: Pos, cell: Cell) -> Result<(), OutOfBounds> {
        let i = self.index(pos)?;
        assert!(
            !(cell.is_occupied() && self.cells[i].is_null()),
            "cannot place a piece on the null cell `{pos}`"
        );

        self.cells[i] = cell;
        Ok(())
    }

    /// The neighbour of `pos` along `d`, unless it falls off the grid.
    #[inline(always)]
    pub fn step(&self, pos: Pos, d: Direction) -> Option<Pos> {
        pos.offset(d).filter(|&p| self.in_bounds(p))
    }

    /// An iterator over all positions in row-major order.
    pub fn positions(&self) -> impl DoubleEndedIterator<Item = Pos> {
        let width = self.width;
        (0..self.height).flat_map(move |row| (0..width).map(move |col| Pos::new(row, col)))
    }

    /// An iterator over all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, Cell)> + '_ {
        self.positions().zip(self.cells.iter().copied())
    }

    /// An iterator over the pieces of a player in row-major order.
    pub fn pieces(&self, owner: PlayerId) -> impl Iterator<Item = (Pos, Piece)> + '_ {
        self.iter()
            .filter_map(|(pos, c)| c.piece().map(|p| (pos, p)))
            .filter(move |(_, p)| p.owner == owner)
    }

    /// How many pieces a player has on the board.
    pub fn count(&self, owner: PlayerId) -> usize {
        self.pieces(owner).count()
    }

    /// How many [`Cell::Blank`]s are left.
    pub fn blanks(&self) -> usize {
        self.cells.iter().filter(|c| c.is_blank()).count()
    }

    /// Whether `pos` is a playable cell on the edge of the playable area.
    ///
    /// That is, some orthogonal neighbour is either off the grid or [`Cell::Null`].
    pub fn is_border(&self, pos: Pos) -> bool {
        match self.get(pos) {
            Err(_) | Ok(Cell::Null) => false,
            Ok(_) => Direction::ORTHOGONAL.into_iter().any(|d| {
                self.step(pos, d)
                    .map_or(true, |n| self.get(n).map_or(true, |c| c.is_null()))
            }),
        }
    }
}
