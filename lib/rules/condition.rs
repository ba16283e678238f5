use crate::game::{GameState, Outcome};
use crate::grid::{Board, Direction, PieceKind, PlayerId, Pos};
use crate::rules::RuleSet;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A set of cells a piece may reach to win the game.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub enum Region {
    /// Playable cells next to the edge of the playable area.
    Border,

    /// The row furthest away from the owner of the piece.
    ///
    /// That is the first row for [`PlayerId::One`] and the last one for [`PlayerId::Two`].
    FarEdge,

    /// An explicit list of cells.
    Cells(Vec<Pos>),
}

impl Region {
    /// Whether `pos` lies in this region as seen by `owner`.
    pub fn contains(&self, board: &Board, owner: PlayerId, pos: Pos) -> bool {
        match self {
            Region::Border => board.is_border(pos),
            Region::FarEdge => match owner {
                PlayerId::One => pos.row == 0,
                PlayerId::Two => pos.row + 1 == board.height(),
            },
            Region::Cells(cells) => cells.contains(&pos),
        }
    }
}

/// A terminal condition of a game.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub enum Condition {
    /// A player left with no pieces, neither on the board nor in the reserve, loses.
    Extinction,

    /// The player to move loses if they have no legal move.
    ///
    /// The game is drawn instead if the opponent would be stuck too and `draw_if_both` is set.
    Immobility { draw_if_both: bool },

    /// The game ends once no blank cell is left.
    ///
    /// It's a draw, unless `majority` is set, in which case the player with
    /// more pieces on the board wins.
    FullBoard { majority: bool },

    /// The game ends once neither player has a legal move.
    ///
    /// It's a draw, unless `majority` is set, in which case the player with
    /// more pieces on the board wins.
    Deadlock { majority: bool },

    /// A player with as many pieces in a straight line wins.
    Alignment(u8),

    /// A player with a piece of `kind` standing in `region` wins.
    Breakthrough { kind: PieceKind, region: Region },

    /// A player left with no piece of this kind, neither on the board nor in the reserve, loses.
    Regicide(PieceKind),
}

impl Condition {
    /// The [`Outcome`] of the game if this condition is met.
    pub fn evaluate(&self, rules: &RuleSet, state: &GameState) -> Option<Outcome> {
        let board = state.board();
        let reserves = state.reserves();

        match self {
            Condition::Extinction => defeat(|p| board.count(p) == 0 && reserves[p].is_empty()),

            Condition::Immobility { draw_if_both } => {
                let turn = state.turn();
                if state.has_moves(rules, turn) {
                    None
                } else if *draw_if_both && !state.has_moves(rules, !turn) {
                    Some(Outcome::Draw)
                } else {
                    Some(Outcome::Winner(!turn))
                }
            }

            Condition::FullBoard { majority } => {
                (board.blanks() == 0).then(|| tally(board, *majority))
            }

            Condition::Deadlock { majority } => {
                let stuck = PlayerId::iter().all(|p| !state.has_moves(rules, p));
                stuck.then(|| tally(board, *majority))
            }

            Condition::Alignment(n) => victory(|p| is_aligned(board, p, *n)),

            Condition::Breakthrough { kind, region } => victory(|p| {
                board
                    .pieces(p)
                    .any(|(pos, piece)| piece.kind == *kind && region.contains(board, p, pos))
            }),

            Condition::Regicide(kind) => defeat(|p| {
                reserves[p].count(*kind) == 0 && board.pieces(p).all(|(_, piece)| piece.kind != *kind)
            }),
        }
    }
}

/// Directions along which alignments are counted.
const LINES: [Direction; 4] = [
    Direction(0, 1),
    Direction(1, 0),
    Direction(1, 1),
    Direction(1, -1),
];

fn is_aligned(board: &Board, owner: PlayerId, n: u8) -> bool {
    board.pieces(owner).any(|(pos, _)| {
        LINES.into_iter().any(|d| {
            let mut run = 1;
            let mut at = pos;
            while let Some(next) = board.step(at, d) {
                if board.get(next).ok().and_then(|c| c.owner()) != Some(owner) {
                    break;
                }

                run += 1;
                at = next;
            }

            run >= n as usize
        })
    })
}

fn tally(board: &Board, majority: bool) -> Outcome {
    if !majority {
        return Outcome::Draw;
    }

    match board.count(PlayerId::One).cmp(&board.count(PlayerId::Two)) {
        Ordering::Greater => Outcome::Winner(PlayerId::One),
        Ordering::Less => Outcome::Winner(PlayerId::Two),
        Ordering::Equal => Outcome::Draw,
    }
}

/// The outcome when players who meet `won` win, or a draw if both do.
fn victory(won: impl Fn(PlayerId) -> bool) -> Option<Outcome> {
    match (won(PlayerId::One), won(PlayerId::Two)) {
        (true, true) => Some(Outcome::Draw),
        (true, false) => Some(Outcome::Winner(PlayerId::One)),
        (false, true) => Some(Outcome::Winner(PlayerId::Two)),
        (false, false) => None,
    }
}

/// The outcome when players who meet `lost` lose, or a draw if both do.
fn defeat(lost: impl Fn(PlayerId) -> bool) -> Option<Outcome> {
    victory(|p| lost(!p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    fn evaluate(layout: &[&str], condition: &str) -> Option<Outcome> {
        let rules: RuleSet = format!(
            r#"(
                name: "test",
                pieces: {{
                    "A": (directions: [(-1, 0)]),
                    "K": (directions: [(-1, 0)]),
                    "O": (directions: [(1, 0)]),
                }},
                legend: {{
                    'A': (kind: "A", owner: One),
                    'K': (kind: "K", owner: One),
                    'O': (kind: "O", owner: Two),
                    'k': (kind: "K", owner: Two),
                }},
                layout: {layout:?},
            )"#
        )
        .parse()
        .unwrap();

        let condition: Condition = ron::de::from_str(condition).unwrap();
        let state = GameState::new(&rules).unwrap();
        condition.evaluate(&rules, &state)
    }

    #[test]
    fn player_without_pieces_loses() {
        assert_eq!(
            evaluate(&["A_", "__"], "Extinction"),
            Some(Outcome::Winner(PlayerId::One))
        );

        assert_eq!(evaluate(&["A_", "_O"], "Extinction"), None);
    }

    #[test]
    fn player_to_move_without_moves_loses() {
        assert_eq!(
            evaluate(&["A_", "_O"], "Immobility(draw_if_both: false)"),
            Some(Outcome::Winner(PlayerId::Two))
        );

        assert_eq!(evaluate(&["_O", "A_"], "Immobility(draw_if_both: false)"), None);
    }

    #[test]
    fn game_is_drawn_if_both_players_are_stuck() {
        assert_eq!(
            evaluate(&["A_", "_O"], "Immobility(draw_if_both: true)"),
            Some(Outcome::Draw)
        );

        assert_eq!(
            evaluate(&["A_", "_O", "__"], "Immobility(draw_if_both: true)"),
            Some(Outcome::Winner(PlayerId::Two))
        );
    }

    #[test]
    fn full_board_is_drawn_or_won_by_majority() {
        assert_eq!(
            evaluate(&["AO", "A "], "FullBoard(majority: false)"),
            Some(Outcome::Draw)
        );

        assert_eq!(
            evaluate(&["AO", "A "], "FullBoard(majority: true)"),
            Some(Outcome::Winner(PlayerId::One))
        );

        assert_eq!(
            evaluate(&["AO", "OA"], "FullBoard(majority: true)"),
            Some(Outcome::Draw)
        );

        assert_eq!(evaluate(&["AO", "_A"], "FullBoard(majority: true)"), None);
    }

    #[test]
    fn deadlock_ends_the_game_once_nobody_can_move() {
        assert_eq!(
            evaluate(&["O_", "AO"], "Deadlock(majority: true)"),
            Some(Outcome::Winner(PlayerId::Two))
        );

        assert_eq!(evaluate(&["_O", "A_"], "Deadlock(majority: true)"), None);
    }

    #[test]
    fn aligned_pieces_win() {
        assert_eq!(
            evaluate(&["A__", "_A_", "__A"], "Alignment(3)"),
            Some(Outcome::Winner(PlayerId::One))
        );

        assert_eq!(
            evaluate(&["__O", "_O_", "O__"], "Alignment(3)"),
            Some(Outcome::Winner(PlayerId::Two))
        );

        assert_eq!(evaluate(&["A_A", "_A_", "___"], "Alignment(3)"), None);
    }

    #[test]
    fn simultaneous_alignments_are_drawn() {
        assert_eq!(
            evaluate(&["AAA", "___", "OOO"], "Alignment(3)"),
            Some(Outcome::Draw)
        );
    }

    #[test]
    fn alignments_are_broken_by_other_pieces() {
        assert_eq!(evaluate(&["AOA", "___", "___"], "Alignment(2)"), None);
    }

    #[test]
    fn piece_reaching_the_region_wins() {
        assert_eq!(
            evaluate(&["___", "_K_", "___"], r#"Breakthrough(kind: "K", region: Border)"#),
            None
        );

        assert_eq!(
            evaluate(&["___", "K__", "___"], r#"Breakthrough(kind: "K", region: Border)"#),
            Some(Outcome::Winner(PlayerId::One))
        );

        assert_eq!(
            evaluate(&["A__", "___", "___"], r#"Breakthrough(kind: "K", region: Border)"#),
            None
        );

        assert_eq!(
            evaluate(&["___", "___", "_O_"], r#"Breakthrough(kind: "O", region: FarEdge)"#),
            Some(Outcome::Winner(PlayerId::Two))
        );

        assert_eq!(
            evaluate(&["___", "_K_", "___"], r#"Breakthrough(kind: "K", region: Cells([(row: 1, col: 1)]))"#),
            Some(Outcome::Winner(PlayerId::One))
        );
    }

    #[test]
    fn player_without_the_distinguished_piece_loses() {
        assert_eq!(
            evaluate(&["A_", "_k"], r#"Regicide("K")"#),
            Some(Outcome::Winner(PlayerId::Two))
        );

        assert_eq!(evaluate(&["K_", "_k"], r#"Regicide("K")"#), None);
    }

    #[test]
    fn far_edge_depends_on_the_owner() {
        let board = Board::new(3, 3);
        assert!(Region::FarEdge.contains(&board, PlayerId::One, Pos::new(0, 1)));
        assert!(!Region::FarEdge.contains(&board, PlayerId::One, Pos::new(2, 1)));
        assert!(Region::FarEdge.contains(&board, PlayerId::Two, Pos::new(2, 1)));
        assert!(!Region::FarEdge.contains(&board, PlayerId::Two, Pos::new(0, 1)));
    }

    #[proptest]
    fn explicit_cells_contain_exactly_themselves(b: Board, p: PlayerId, cells: Vec<Pos>, pos: Pos) {
        assert_eq!(
            Region::Cells(cells.clone()).contains(&b, p, pos),
            cells.contains(&pos)
        );
    }
}
