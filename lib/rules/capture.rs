use crate::grid::{Board, PlayerId, Pos};
use crate::rules::{MoveKind, RuleSet};
use serde::{Deserialize, Serialize};

/// How captures are sequenced.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(default, deny_unknown_fields)]
pub struct CaptureRules {
    /// Whether a player who can capture must do so.
    pub forced: bool,

    /// Whether a piece that captured must keep capturing while it can.
    pub chained: bool,

    /// Whether captured pieces return to their owner's reserve.
    pub recycle: bool,
}

/// Whether any piece of `player` has a capture available.
pub fn can_capture(rules: &RuleSet, board: &Board, player: PlayerId) -> bool {
    board
        .pieces(player)
        .any(|(pos, p)| !rules.destinations(board, p, pos, MoveKind::CAPTURE).is_empty())
}

/// Where the capture chain continues after a piece captured its way into `whither`.
///
/// Returns `None` if captures don't chain or the piece has no further capture.
pub fn continuation(rules: &RuleSet, board: &Board, whither: Pos) -> Option<Pos> {
    if !rules.captures.chained {
        return None;
    }

    let piece = board.get(whither).ok()?.piece()?;
    let captures = rules.destinations(board, piece, whither, MoveKind::CAPTURE);
    (!captures.is_empty()).then_some(whither)
}
