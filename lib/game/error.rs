use crate::game::{Outcome, Phase};
use crate::grid::{OutOfBounds, ParseMoveError, PieceKind, Pos};
use derive_more::{Display, Error};

/// The reason why a move was rejected.
///
/// Every variant is recoverable, the game state is left untouched and the
/// player may simply try again.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum InvalidMove {
    #[display(fmt = "malformed move")]
    MalformedMove(ParseMoveError),

    #[display(fmt = "`{_0}` is out of bounds")]
    OutOfBounds(#[error(not(source))] Pos),

    #[display(fmt = "there is no piece of yours at `{_0}`")]
    NotYourPiece(#[error(not(source))] Pos),

    #[display(fmt = "`{_0}` is not a legal destination")]
    IllegalDestination(#[error(not(source))] Pos),

    #[display(fmt = "a capture is available and must be taken")]
    CaptureRequired,

    #[display(fmt = "the piece at `{_0}` must keep capturing")]
    MustContinueCapture(#[error(not(source))] Pos),

    #[display(fmt = "there is no `{_0}` left in the reserve")]
    ReserveEmpty(#[error(not(source))] PieceKind),

    #[display(fmt = "`{_0}` is not blank")]
    OccupiedTarget(#[error(not(source))] Pos),

    #[display(fmt = "unknown piece `{_0}`")]
    UnknownPiece(#[error(not(source))] PieceKind),

    #[display(fmt = "not allowed during the {_0} phase")]
    WrongPhase(#[error(not(source))] Phase),

    #[display(fmt = "the game is over, {_0}")]
    GameOver(#[error(not(source))] Outcome),
}

impl From<ParseMoveError> for InvalidMove {
    fn from(e: ParseMoveError) -> Self {
        InvalidMove::MalformedMove(e)
    }
}

impl From<OutOfBounds> for InvalidMove {
    fn from(OutOfBounds(pos): OutOfBounds) -> Self {
        InvalidMove::OutOfBounds(pos)
    }
}
