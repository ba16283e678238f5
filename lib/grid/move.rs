use crate::grid::{ParsePieceKindError, ParsePosError, PieceKind, Pos};
use derive_more::{Display, Error, From};
use std::str::FromStr;

/// A move in coordinate notation.
///
/// * `<piece> <row>,<col>` puts a piece from the reserve on the board;
/// * `<row>,<col> <row>,<col>` moves a piece already on the board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Move {
    #[display(fmt = "{piece} {target}")]
    Placement { piece: PieceKind, target: Pos },
    #[display(fmt = "{origin} {destination}")]
    Movement { origin: Pos, destination: Pos },
}

impl Move {
    /// The cell a piece moves out of, if this is a [`Move::Movement`].
    #[inline(always)]
    pub fn origin(&self) -> Option<Pos> {
        match *self {
            Move::Placement { .. } => None,
            Move::Movement { origin, .. } => Some(origin),
        }
    }

    /// The cell a piece ends up in.
    #[inline(always)]
    pub fn whither(&self) -> Pos {
        match *self {
            Move::Placement { target, .. } => target,
            Move::Movement { destination, .. } => destination,
        }
    }

    /// Whether this is a [`Move::Placement`].
    #[inline(always)]
    pub fn is_placement(&self) -> bool {
        matches!(self, Move::Placement { .. })
    }
}

/// The reason why parsing [`Move`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParseMoveError {
    #[display(fmt = "expected exactly two whitespace-separated tokens")]
    #[from(ignore)]
    InvalidTokenCount,

    #[display(fmt = "invalid piece")]
    InvalidPiece(ParsePieceKindError),

    #[display(fmt = "invalid origin")]
    #[from(ignore)]
    InvalidOrigin(ParsePosError),

    #[display(fmt = "invalid target")]
    #[from(ignore)]
    InvalidTarget(ParsePosError),
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use ParseMoveError::*;

        let tokens: Vec<&str> = s.split_whitespace().collect();
        let [whence, whither] = tokens[..] else {
            return Err(InvalidTokenCount);
        };

        if whence.contains(',') {
            Ok(Move::Movement {
                origin: whence.parse().map_err(InvalidOrigin)?,
                destination: whither.parse().map_err(InvalidTarget)?,
            })
        } else {
            Ok(Move::Placement {
                piece: whence.parse()?,
                target: whither.parse().map_err(InvalidTarget)?,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn parsing_printed_move_is_an_identity(m: Move) {
        assert_eq!(m.to_string().parse(), Ok(m));
    }

    #[proptest]
    fn parsing_move_ignores_surrounding_whitespace(m: Move) {
        assert_eq!(format!("  {m}\t\n").parse(), Ok(m));
    }

    #[proptest]
    fn placement_is_written_as_piece_and_target(piece: PieceKind, target: Pos) {
        assert_eq!(
            Move::Placement { piece, target }.to_string(),
            format!("{piece} {},{}", target.row, target.col)
        );
    }

    #[proptest]
    fn movement_is_written_as_pair_of_coordinates(origin: Pos, destination: Pos) {
        assert_eq!(
            Move::Movement { origin, destination }.to_string(),
            format!("{origin} {destination}")
        );
    }

    #[proptest]
    fn parsing_move_fails_if_token_count_is_not_two(
        #[strategy(proptest::collection::vec("[a-z0-9,]{1,4}", 0..5))]
        #[filter(#tokens.len() != 2)]
        tokens: Vec<String>,
    ) {
        assert_eq!(
            tokens.join(" ").parse::<Move>(),
            Err(ParseMoveError::InvalidTokenCount)
        );
    }

    #[proptest]
    fn parsing_move_fails_if_piece_is_invalid(
        #[strategy("[a-z]{0,3}[_.+-][a-z]{0,3}")] piece: String,
        target: Pos,
    ) {
        assert_eq!(
            format!("{piece} {target}").parse::<Move>(),
            Err(ParseMoveError::InvalidPiece(ParsePieceKindError))
        );
    }

    #[proptest]
    fn parsing_move_fails_if_target_is_invalid(
        piece: PieceKind,
        #[strategy("[0-9]{1,2}|[a-z]{1,2}")] target: String,
    ) {
        assert_eq!(
            format!("{piece} {target}").parse::<Move>(),
            Err(ParseMoveError::InvalidTarget(ParsePosError::MissingSeparator))
        );
    }

    #[proptest]
    fn parsing_move_fails_if_origin_is_invalid(
        #[strategy("[a-z],[0-9]")] origin: String,
        destination: Pos,
    ) {
        assert!(matches!(
            format!("{origin} {destination}").parse::<Move>(),
            Err(ParseMoveError::InvalidOrigin(ParsePosError::InvalidRow(_)))
        ));
    }

    #[proptest]
    fn only_movements_have_an_origin(m: Move) {
        assert_eq!(m.origin().is_some(), !m.is_placement());
    }
}
