use crate::game::{GameState, InvalidMove, Reserves};
use crate::grid::{Board, Direction, Legend, Move, ParseLayoutError};
use crate::grid::{Piece, PieceKind, PlayerId, Pos};
use crate::rules::{destinations, Capability, CaptureRules, Condition, Destination, MoveKind};
use crate::rules::{PlacementRules, Region};
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt, str::FromStr};

/// The complete description of a game variant.
#[derive(Debug, Clone, Eq, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RuleSet {
    /// The name of the variant.
    pub name: String,

    /// How every kind of piece moves.
    pub pieces: BTreeMap<PieceKind, Capability>,

    /// The symbols used in the [layout](`Self::layout`).
    pub legend: Legend,

    /// The initial board, one row per line.
    pub layout: Vec<String>,

    /// The pieces each player starts with off the board.
    #[serde(default)]
    pub reserves: Reserves,

    #[serde(default)]
    pub placement: PlacementRules,

    #[serde(default)]
    pub captures: CaptureRules,

    /// Whether a player without legal moves passes the turn to the opponent.
    #[serde(default)]
    pub passing: bool,

    /// The player who moves first.
    #[serde(default)]
    pub opener: PlayerId,

    /// How the game ends, in order of precedence.
    #[serde(default)]
    pub conditions: Vec<Condition>,
}

/// The reason why a [`RuleSet`] is inconsistent.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum InvalidRuleSet {
    #[display(fmt = "invalid layout")]
    InvalidLayout(ParseLayoutError),

    #[display(fmt = "piece `{_0}` is used but never described")]
    #[from(ignore)]
    UnknownPiece(#[error(not(source))] PieceKind),

    #[display(fmt = "symbol `{_0:?}` is reserved")]
    #[from(ignore)]
    ReservedSymbol(#[error(not(source))] char),

    #[display(fmt = "direction `{_0}` cannot be mirrored")]
    #[from(ignore)]
    InvalidDirection(#[error(not(source))] Direction),
}

/// The reason why parsing [`RuleSet`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParseRuleSetError {
    #[display(fmt = "failed to parse the rule set")]
    Syntax(ron::de::SpannedError),

    #[display(fmt = "inconsistent rule set")]
    Invalid(InvalidRuleSet),
}

impl RuleSet {
    /// The [`Capability`] of a kind of piece.
    #[inline(always)]
    pub fn capability(&self, kind: PieceKind) -> Option<&Capability> {
        self.pieces.get(&kind)
    }

    /// Enumerates where `piece`, standing at `whence`, may move to.
    ///
    /// Unknown kinds of pieces don't move at all.
    pub fn destinations(
        &self,
        board: &Board,
        piece: Piece,
        whence: Pos,
        kind: MoveKind,
    ) -> Vec<Destination> {
        match self.capability(piece.kind) {
            Some(c) => destinations(board, c, piece, whence, kind),
            None => Vec::new(),
        }
    }

    /// The initial [`Board`].
    pub fn board(&self) -> Result<Board, ParseLayoutError> {
        self.legend.parse(self.layout.iter().map(String::as_str))
    }

    /// Checks that every piece mentioned is described and the layout is valid.
    pub fn check(&self) -> Result<(), InvalidRuleSet> {
        let known = |kind: PieceKind| {
            if self.pieces.contains_key(&kind) {
                Ok(())
            } else {
                Err(InvalidRuleSet::UnknownPiece(kind))
            }
        };

        for (symbol, piece) in self.legend.iter() {
            if symbol == Legend::NULL || symbol == Legend::BLANK {
                return Err(InvalidRuleSet::ReservedSymbol(symbol));
            }

            known(piece.kind)?;
        }

        for c in self.pieces.values() {
            // Deltas must be negatable for the opponent's point of view.
            for &d in c.directions.iter().chain(&c.leaps) {
                if d.row() == i8::MIN || d.col() == i8::MIN {
                    return Err(InvalidRuleSet::InvalidDirection(d));
                }
            }
        }

        for promotion in self.pieces.values().filter_map(|c| c.promotion) {
            known(promotion)?;
        }

        for p in PlayerId::iter() {
            for (kind, _) in self.reserves[p].iter() {
                known(kind)?;
            }
        }

        for condition in &self.conditions {
            match condition {
                Condition::Breakthrough { kind, .. } | Condition::Regicide(kind) => known(*kind)?,
                _ => {}
            }
        }

        self.board()?;
        Ok(())
    }

    /// Parses a [`Move`] and checks it against the board and the known pieces.
    ///
    /// This does not check whether the move is legal, see [`GameState::validate`].
    pub fn parse(&self, state: &GameState, text: &str) -> Result<Move, InvalidMove> {
        let m: Move = text.parse()?;

        if let Some(origin) = m.origin() {
            state.board().get(origin)?;
        }

        state.board().get(m.whither())?;

        if let Move::Placement { piece, .. } = m {
            if self.capability(piece).is_none() {
                return Err(InvalidMove::UnknownPiece(piece));
            }
        }

        Ok(m)
    }

    /// Whether `piece` landing on `pos` is promoted, and into what.
    pub fn promotion(&self, board: &Board, piece: Piece, pos: Pos) -> Option<PieceKind> {
        let promotion = self.capability(piece.kind)?.promotion?;
        Region::FarEdge
            .contains(board, piece.owner, pos)
            .then_some(promotion)
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ron::ser::to_string(self).map_err(|_| fmt::Error)?)
    }
}

impl FromStr for RuleSet {
    type Err = ParseRuleSetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rules: RuleSet = ron::de::from_str(s)?;
        rules.check()?;
        Ok(rules)
    }
}
