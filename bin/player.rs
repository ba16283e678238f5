use lib::game::GameState;
use lib::rules::RuleSet;

/// Trait for types that know how to come up with moves.
#[cfg_attr(test, mockall::automock(type Error = String;))]
pub trait Player {
    /// The reason why no move could be requested.
    type Error;

    /// Requests the next move of the player to move, in coordinate notation.
    fn request_move(&mut self, rules: &RuleSet, state: &GameState) -> Result<String, Self::Error>;
}
