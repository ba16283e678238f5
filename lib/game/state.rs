use crate::game::{InvalidMove, MoveContext, Outcome, Phase, Reserves};
use crate::grid::{Board, Cell, Move, Piece, PlayerId, Pos};
use crate::rules::{can_capture, continuation, InvalidRuleSet, MoveKind, RuleSet};
use std::collections::HashSet;
use tracing::{debug, instrument, trace};

/// The state of a game in progress.
///
/// A [`GameState`] only ever changes by applying moves that pass validation,
/// so a rejected move leaves it untouched.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct GameState {
    board: Board,
    turn: PlayerId,
    phase: Phase,
    pending: Option<Pos>,
    reserves: Reserves,
    round: u32,
}

impl GameState {
    /// Sets up a new game.
    pub fn new(rules: &RuleSet) -> Result<Self, InvalidRuleSet> {
        rules.check()?;

        let reserves = rules.reserves.clone();
        let (phase, turn) = if reserves.is_depleted() {
            (Phase::Movement, rules.opener)
        } else if reserves[rules.opener].is_empty() {
            (Phase::Placement, !rules.opener)
        } else {
            (Phase::Placement, rules.opener)
        };

        let mut state = GameState {
            board: rules.board()?,
            turn,
            phase,
            pending: None,
            reserves,
            round: 1,
        };

        state.conclude(rules);
        Ok(state)
    }

    /// The current board.
    #[inline(always)]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player to move.
    #[inline(always)]
    pub fn turn(&self) -> PlayerId {
        self.turn
    }

    /// The current [`Phase`].
    #[inline(always)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The piece that must keep capturing, if a capture chain is in progress.
    #[inline(always)]
    pub fn pending_capture(&self) -> Option<Pos> {
        self.pending
    }

    /// The pieces players have yet to place.
    #[inline(always)]
    pub fn reserves(&self) -> &Reserves {
        &self.reserves
    }

    /// How many times the turn has come back to the opening player, plus one.
    #[inline(always)]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// The [`Outcome`] of the game, if it has finished.
    #[inline(always)]
    pub fn outcome(&self) -> Option<Outcome> {
        self.phase.outcome()
    }

    /// Checks whether a move is legal without playing it.
    pub fn validate(&self, rules: &RuleSet, m: Move) -> Result<MoveContext, InvalidMove> {
        use InvalidMove::*;

        if let Phase::Finished(o) = self.phase {
            return Err(GameOver(o));
        }

        match m {
            Move::Placement { piece: kind, target } => {
                if let Some(p) = self.pending {
                    return Err(MustContinueCapture(p));
                }

                if rules.capability(kind).is_none() {
                    return Err(UnknownPiece(kind));
                }

                let cell = self.board.get(target)?;
                if cell.is_null() || rules.placement.is_forbidden(target) {
                    return Err(IllegalDestination(target));
                } else if cell.is_occupied() {
                    return Err(OccupiedTarget(target));
                } else if self.reserves[self.turn].count(kind) == 0 {
                    return Err(ReserveEmpty(kind));
                }

                let piece = Piece::new(kind, self.turn);
                let flips = rules.placement.flips(&self.board, piece, target);
                if rules.placement.must_flip && flips.is_empty() {
                    return Err(IllegalDestination(target));
                }

                if self.phase == Phase::Movement && self.is_capture_forced(rules) {
                    return Err(CaptureRequired);
                }

                Ok(MoveContext {
                    m,
                    piece,
                    capture: None,
                    flips,
                })
            }

            Move::Movement {
                origin,
                destination,
            } => {
                if self.phase == Phase::Placement {
                    return Err(WrongPhase(self.phase));
                }

                let cell = self.board.get(origin)?;
                let target = self.board.get(destination)?;

                match self.pending {
                    Some(p) if p != origin => return Err(MustContinueCapture(p)),
                    _ => {}
                }

                let piece = match cell {
                    Cell::Occupied(p) if p.owner == self.turn => p,
                    _ => return Err(NotYourPiece(origin)),
                };

                let found = rules
                    .destinations(&self.board, piece, origin, MoveKind::ANY)
                    .into_iter()
                    .filter(|d| d.pos == destination)
                    .max_by_key(|d| d.is_capture());

                let Some(d) = found else {
                    return Err(if target.is_occupied() {
                        OccupiedTarget(destination)
                    } else {
                        IllegalDestination(destination)
                    });
                };

                if !d.is_capture() {
                    if let Some(p) = self.pending {
                        return Err(MustContinueCapture(p));
                    } else if self.is_capture_forced(rules) {
                        return Err(CaptureRequired);
                    }
                }

                Ok(MoveContext {
                    m,
                    piece,
                    capture: d.capture,
                    flips: Vec::new(),
                })
            }
        }
    }

    /// Returns the state after a move, unless it's illegal.
    #[instrument(level = "trace", skip(self, rules), err)]
    pub fn apply(&self, rules: &RuleSet, m: Move) -> Result<GameState, InvalidMove> {
        let (next, _) = self.transition(rules, m)?;
        Ok(next)
    }

    /// Plays a move in place, unless it's illegal.
    pub fn play(&mut self, rules: &RuleSet, m: Move) -> Result<MoveContext, InvalidMove> {
        let (next, ctx) = self.transition(rules, m)?;
        *self = next;
        Ok(ctx)
    }

    /// The legal moves of the player to move, placements first.
    pub fn moves(&self, rules: &RuleSet) -> Vec<MoveContext> {
        let mut seen = HashSet::new();
        self.candidates(rules)
            .filter(|m| seen.insert(*m))
            .filter_map(|m| self.validate(rules, m).ok())
            .collect()
    }

    /// Whether `player` would have any legal move if it were their turn.
    pub fn has_moves(&self, rules: &RuleSet, player: PlayerId) -> bool {
        if player == self.turn {
            self.candidates(rules)
                .any(|m| self.validate(rules, m).is_ok())
        } else {
            let mut other = self.clone();
            other.turn = player;
            other.pending = None;
            other.has_moves(rules, player)
        }
    }

    fn candidates<'a>(&'a self, rules: &'a RuleSet) -> impl Iterator<Item = Move> + 'a {
        let placements = self.reserves[self.turn].iter().flat_map(move |(piece, _)| {
            self.board
                .positions()
                .map(move |target| Move::Placement { piece, target })
        });

        let movements = self.board.pieces(self.turn).flat_map(move |(origin, piece)| {
            rules
                .destinations(&self.board, piece, origin, MoveKind::ANY)
                .into_iter()
                .map(move |d| Move::Movement {
                    origin,
                    destination: d.pos,
                })
        });

        placements.chain(movements)
    }

    fn is_capture_forced(&self, rules: &RuleSet) -> bool {
        rules.captures.forced && can_capture(rules, &self.board, self.turn)
    }

    fn transition(&self, rules: &RuleSet, m: Move) -> Result<(GameState, MoveContext), InvalidMove> {
        let ctx = self.validate(rules, m)?;
        let mut next = self.clone();
        next.commit(rules, &ctx)?;
        Ok((next, ctx))
    }

    fn commit(&mut self, rules: &RuleSet, ctx: &MoveContext) -> Result<(), InvalidMove> {
        match ctx.r#move() {
            Move::Placement { piece, target } => {
                self.reserves[self.turn].take(piece);
                self.board.set(target, ctx.piece().into())?;
                for &f in ctx.flips() {
                    self.board.set(f, ctx.piece().into())?;
                }

                self.pending = None;
            }

            Move::Movement {
                origin,
                destination,
            } => {
                self.board.set(origin, Cell::Blank)?;

                if let Some(captured) = ctx.capture() {
                    if let Some(p) = self.board.get(captured)?.piece() {
                        if rules.captures.recycle {
                            self.reserves[p.owner].put(p.kind);
                        }
                    }

                    self.board.set(captured, Cell::Blank)?;
                }

                let mut piece = ctx.piece();
                let promotion = rules.promotion(&self.board, piece, destination);
                if let Some(kind) = promotion {
                    debug!(%piece, %destination, %kind, "promoted");
                    piece.kind = kind;
                }

                self.board.set(destination, piece.into())?;

                self.pending = match promotion {
                    None if ctx.is_capture() => continuation(rules, &self.board, destination),
                    _ => None,
                };
            }
        }

        match self.pending {
            Some(pos) => trace!(%pos, "capture chain continues"),
            None => self.end_turn(rules),
        }

        self.conclude(rules);
        Ok(())
    }

    fn end_turn(&mut self, rules: &RuleSet) {
        let current = self.turn;
        let mut next = !current;

        if self.phase == Phase::Placement {
            if self.reserves.is_depleted() {
                debug!(round = self.round, "reserves depleted, moving on to the movement phase");
                self.phase = Phase::Movement;
            } else if self.reserves[next].is_empty() {
                next = current;
            }
        }

        if rules.passing
            && next != current
            && !self.has_moves(rules, next)
            && self.has_moves(rules, current)
        {
            debug!(player = %next, "no legal moves, passing");
            next = current;
        }

        if next != current && next == rules.opener {
            self.round += 1;
        }

        self.turn = next;
    }

    fn conclude(&mut self, rules: &RuleSet) {
        if self.phase.is_finished() {
            return;
        }

        let outcome = rules.conditions.iter().find_map(|c| c.evaluate(rules, self));
        if let Some(o) = outcome {
            debug!(outcome = %o, round = self.round, "game over");
            self.phase = Phase::Finished(o);
        }
    }
}
