use crate::grid::{Board, Cell, Piece, Pos};
use crate::rules::Capability;
use bitflags::bitflags;

bitflags! {
    /// Characteristics of a [`Destination`].
    #[derive(Default)]
    pub struct MoveKind: u8 {
        const QUIET =   0b00000001;
        const CAPTURE = 0b00000010;
        const ANY =     Self::QUIET.bits | Self::CAPTURE.bits;
    }
}

/// A cell a piece may move into.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Destination {
    /// Where the piece lands.
    pub pos: Pos,
    /// The cell whose piece is removed by this move, if any.
    pub capture: Option<Pos>,
}

impl Destination {
    #[inline(always)]
    fn quiet(pos: Pos) -> Self {
        Destination { pos, capture: None }
    }

    #[inline(always)]
    fn capture(pos: Pos, captured: Pos) -> Self {
        Destination {
            pos,
            capture: Some(captured),
        }
    }

    /// Whether this move removes an opponent piece.
    #[inline(always)]
    pub fn is_capture(&self) -> bool {
        self.capture.is_some()
    }

    /// The [`MoveKind`] of this destination.
    #[inline(always)]
    pub fn kind(&self) -> MoveKind {
        if self.is_capture() {
            MoveKind::CAPTURE
        } else {
            MoveKind::QUIET
        }
    }
}

/// Enumerates where `piece`, standing at `whence`, may move to.
///
/// Steps and slides come first, one direction at a time in declaration order,
/// followed by jumps in the same order and finally leaps.
pub fn destinations(
    board: &Board,
    capability: &Capability,
    piece: Piece,
    whence: Pos,
    kind: MoveKind,
) -> Vec<Destination> {
    let cell = |pos: Pos| board.get(pos).unwrap_or(Cell::Null);
    let is_opponent = |pos: Pos| cell(pos).owner() == Some(!piece.owner);

    let mut moves = Vec::new();

    for d in capability.directions(piece.owner) {
        let mut at = whence;
        while let Some(next) = board.step(at, d) {
            match cell(next) {
                Cell::Blank => moves.push(Destination::quiet(next)),
                Cell::Occupied(p) if p.owner != piece.owner => {
                    if capability.slides && capability.slide_captures {
                        moves.push(Destination::capture(next, next));
                    }

                    break;
                }

                _ => break,
            }

            if !capability.slides {
                break;
            }

            at = next;
        }
    }

    if capability.jumps {
        for d in capability.directions(piece.owner) {
            let Some(over) = board.step(whence, d) else { continue };
            let Some(onto) = board.step(over, d) else { continue };
            if is_opponent(over) && cell(onto).is_blank() {
                moves.push(Destination::capture(onto, over));
            }
        }
    }

    for d in capability.leaps(piece.owner) {
        let Some(onto) = board.step(whence, d) else { continue };
        match cell(onto) {
            Cell::Blank => moves.push(Destination::quiet(onto)),
            Cell::Occupied(p) if p.owner != piece.owner => {
                moves.push(Destination::capture(onto, onto))
            }
            _ => {}
        }
    }

    moves.retain(|m| kind.intersects(m.kind()));
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Direction, Legend, PlayerId};
    use proptest::prelude::*;
    use test_strategy::proptest;

    fn legend() -> Legend {
        Legend::from_iter([
            ('A', Piece::new("A".parse().unwrap(), PlayerId::One)),
            ('O', Piece::new("O".parse().unwrap(), PlayerId::Two)),
        ])
    }

    fn piece(owner: PlayerId) -> Piece {
        Piece::new("A".parse().unwrap(), owner)
    }

    fn man() -> Capability {
        Capability {
            directions: vec![Direction(-1, -1), Direction(-1, 1)],
            jumps: true,
            forward_only: true,
            ..Capability::default()
        }
    }

    fn rook() -> Capability {
        Capability {
            directions: Direction::ORTHOGONAL.to_vec(),
            slides: true,
            slide_captures: true,
            ..Capability::default()
        }
    }

    fn knight() -> Capability {
        Capability {
            leaps: vec![
                Direction(-2, -1),
                Direction(-2, 1),
                Direction(-1, 2),
                Direction(1, 2),
                Direction(2, 1),
                Direction(2, -1),
                Direction(1, -2),
                Direction(-1, -2),
            ],
            ..Capability::default()
        }
    }

    fn at(row: u8, col: u8) -> Pos {
        Pos::new(row, col)
    }

    #[test]
    fn steps_only_reach_adjacent_blank_cells() {
        let board = legend().parse(["___", "_O_", "___", "_A_"]).unwrap();
        let moves = destinations(&board, &man(), piece(PlayerId::One), at(3, 1), MoveKind::ANY);
        assert_eq!(
            moves,
            [Destination::quiet(at(2, 0)), Destination::quiet(at(2, 2))]
        );
    }

    #[test]
    fn forward_only_pieces_step_the_other_way_for_player_two() {
        let board = legend().parse(["_O_", "___"]).unwrap();
        let moves = destinations(&board, &man(), piece(PlayerId::Two), at(0, 1), MoveKind::ANY);
        assert_eq!(
            moves,
            [Destination::quiet(at(1, 0)), Destination::quiet(at(1, 2))]
        );
    }

    #[test]
    fn jumps_capture_adjacent_opponents_onto_blank_cells() {
        let board = legend()
            .parse(["____", "____", "_O__", "A___"])
            .unwrap();

        let moves = destinations(&board, &man(), piece(PlayerId::One), at(3, 0), MoveKind::ANY);
        assert_eq!(moves, [Destination::capture(at(1, 2), at(2, 1))]);
    }

    #[test]
    fn jumps_need_a_blank_landing_cell() {
        let board = legend().parse(["__O_", "_O__", "A___"]).unwrap();
        let moves = destinations(&board, &man(), piece(PlayerId::One), at(2, 0), MoveKind::ANY);
        assert!(moves.is_empty());
    }

    #[test]
    fn jumps_never_go_over_own_pieces() {
        let board = legend().parse(["___", "_A_", "A__"]).unwrap();
        let moves = destinations(&board, &man(), piece(PlayerId::One), at(2, 0), MoveKind::CAPTURE);
        assert!(moves.is_empty());
    }

    #[test]
    fn slides_stop_at_the_first_piece_and_capture_opponents() {
        let board = legend().parse(["A_O_", "____", "A___"]).unwrap();
        let moves = destinations(&board, &rook(), piece(PlayerId::One), at(0, 0), MoveKind::ANY);
        assert_eq!(
            moves,
            [
                Destination::quiet(at(0, 1)),
                Destination::capture(at(0, 2), at(0, 2)),
                Destination::quiet(at(1, 0)),
            ]
        );
    }

    #[test]
    fn slides_without_capture_stop_before_opponents() {
        let capability = Capability {
            slide_captures: false,
            ..rook()
        };

        let board = legend().parse(["A_O_"]).unwrap();
        let moves = destinations(&board, &capability, piece(PlayerId::One), at(0, 0), MoveKind::ANY);
        assert_eq!(moves, [Destination::quiet(at(0, 1))]);
    }

    #[test]
    fn slides_stop_at_null_cells() {
        let board = legend().parse(["A_ _"]).unwrap();
        let moves = destinations(&board, &rook(), piece(PlayerId::One), at(0, 0), MoveKind::ANY);
        assert_eq!(moves, [Destination::quiet(at(0, 1))]);
    }

    #[test]
    fn leaps_land_on_blank_or_opponent_cells_only() {
        let board = legend().parse(["_A_", "___", "A_O"]).unwrap();
        let moves = destinations(&board, &knight(), piece(PlayerId::One), at(0, 0), MoveKind::ANY);
        assert_eq!(
            moves,
            [Destination::quiet(at(1, 2)), Destination::quiet(at(2, 1))]
        );

        let moves = destinations(&board, &knight(), piece(PlayerId::One), at(0, 1), MoveKind::ANY);
        assert_eq!(moves, [Destination::capture(at(2, 2), at(2, 2))]);
    }

    #[proptest]
    fn enumeration_is_deterministic(b: Board, c: Capability, p: Piece, pos: Pos) {
        assert_eq!(
            destinations(&b, &c, p, pos, MoveKind::ANY),
            destinations(&b, &c, p, pos, MoveKind::ANY)
        );
    }

    #[proptest]
    fn destinations_are_in_bounds_and_never_own_occupied(
        b: Board,
        c: Capability,
        p: Piece,
        pos: Pos,
    ) {
        for d in destinations(&b, &c, p, pos, MoveKind::ANY) {
            let cell = b.get(d.pos)?;
            assert!(!cell.is_null());
            assert_ne!(cell.owner(), Some(p.owner));
        }
    }

    #[proptest]
    fn captured_cells_hold_opponent_pieces(b: Board, c: Capability, p: Piece, pos: Pos) {
        for d in destinations(&b, &c, p, pos, MoveKind::CAPTURE) {
            let captured = d.capture.unwrap();
            assert_eq!(b.get(captured)?.owner(), Some(!p.owner));
        }
    }

    #[proptest]
    fn move_kind_filters_destinations(b: Board, c: Capability, p: Piece, pos: Pos) {
        let all = destinations(&b, &c, p, pos, MoveKind::ANY);
        let quiet = destinations(&b, &c, p, pos, MoveKind::QUIET);
        let captures = destinations(&b, &c, p, pos, MoveKind::CAPTURE);

        prop_assert!(quiet.iter().all(|d| !d.is_capture()));
        prop_assert!(captures.iter().all(|d| d.is_capture()));
        prop_assert_eq!(quiet.len() + captures.len(), all.len());
    }
}
