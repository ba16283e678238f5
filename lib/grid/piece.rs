use crate::grid::PlayerId;
use arrayvec::ArrayString;
use derive_more::{Constructor, DebugCustom, Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The identifier of a type of piece.
///
/// A short alphanumeric token, such as `A` or `king`, which is also how the
/// piece is named in [`Move`][`crate::grid::Move`] notation.
#[derive(
    DebugCustom, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize, Serialize,
)]
#[debug(fmt = "PieceKind({self})")]
#[serde(try_from = "String", into = "String")]
pub struct PieceKind(ArrayString<8>);

impl PieceKind {
    /// The token that identifies this kind.
    #[inline(always)]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(test)]
impl proptest::arbitrary::Arbitrary for PieceKind {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        use proptest::prelude::*;
        "[A-Za-z][A-Za-z0-9]{0,7}"
            .prop_map(|s| s.parse().unwrap())
            .boxed()
    }
}

/// The reason why parsing [`PieceKind`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "expected between 1 and 8 alphanumeric characters")]
pub struct ParsePieceKindError;

impl FromStr for PieceKind {
    type Err = ParsePieceKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.chars().all(char::is_alphanumeric) {
            return Err(ParsePieceKindError);
        }

        let token = ArrayString::from(s).map_err(|_| ParsePieceKindError)?;
        Ok(PieceKind(token))
    }
}

impl TryFrom<String> for PieceKind {
    type Error = ParsePieceKindError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<PieceKind> for String {
    fn from(k: PieceKind) -> Self {
        k.as_str().to_string()
    }
}

/// A [`PieceKind`] owned by one of the players.
#[derive(
    Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Constructor,
    Deserialize, Serialize,
)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{kind} of player {owner}")]
#[serde(deny_unknown_fields)]
pub struct Piece {
    pub kind: PieceKind,
    pub owner: PlayerId,
}
