use crate::player::Player;
use derive_more::{Constructor, Display, Error};
use lib::game::GameState;
use lib::grid::PlayerId;
use lib::rules::RuleSet;
use tracing::{field::display, info, instrument, warn, Span};

/// The reason why the [`Game`] was interrupted.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "player {player} was unable to come up with a move")]
pub struct GameInterrupted<E> {
    player: PlayerId,
    source: E,
}

/// Runs a game to completion.
#[derive(Debug, Constructor)]
pub struct Game<P> {
    player: P,
}

impl<P: Player> Game<P> {
    /// Requests moves until the game is over.
    ///
    /// Moves that fail to parse or are illegal are reported and requested again.
    #[instrument(level = "debug", skip(self, rules, state), err,
        fields(variant = %rules.name, outcome))]
    pub fn play(
        mut self,
        rules: &RuleSet,
        mut state: GameState,
    ) -> Result<GameState, GameInterrupted<P::Error>> {
        loop {
            if let Some(o) = state.outcome() {
                Span::current().record("outcome", display(o));
                break Ok(state);
            }

            let player = state.turn();
            let text = self
                .player
                .request_move(rules, &state)
                .map_err(|source| GameInterrupted { player, source })?;

            match rules.parse(&state, &text).and_then(|m| state.play(rules, m)) {
                Err(e) => warn!(%player, %text, "{e}"),
                Ok(ctx) => info!(%player, played = %ctx, round = state.round()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{player::MockPlayer, variant::Variant};
    use proptest::sample::Selector;
    use test_strategy::proptest;

    fn tictactoe() -> RuleSet {
        "tictactoe".parse::<Variant>().unwrap().into_rules()
    }

    #[test]
    fn game_ends_when_it_is_over() {
        let mut rules = tictactoe();
        rules.layout = vec!["XXX".into(), "OO_".into(), "___".into()];
        let state = GameState::new(&rules).unwrap();
        assert!(state.outcome().is_some());

        let g = Game::new(MockPlayer::new());
        assert_eq!(g.play(&rules, state.clone()), Ok(state));
    }

    #[proptest]
    fn game_plays_requested_moves_until_over(selector: Selector) {
        let rules = tictactoe();
        let initial = GameState::new(&rules)?;

        let mut state = initial.clone();
        let mut moves = Vec::new();
        while state.outcome().is_none() {
            let ctx = selector.select(state.moves(&rules));
            moves.push(ctx.to_string());
            state.play(&rules, ctx.r#move())?;
        }

        moves.reverse();

        let mut p = MockPlayer::new();
        p.expect_request_move()
            .times(moves.len())
            .returning(move |_, _| Ok(moves.pop().unwrap()));

        assert_eq!(Game::new(p).play(&rules, initial), Ok(state));
    }

    #[test]
    fn illegal_moves_are_requested_again() {
        let rules = tictactoe();
        let state = GameState::new(&rules).unwrap();

        let mut moves = vec![
            "X 0,2", "O 1,1", "X 0,1", "O 2,2", "X 0,0", "X 0,0", "O 0,0", "garbage",
        ];

        let mut p = MockPlayer::new();
        p.expect_request_move()
            .times(moves.len())
            .returning(move |_, _| Ok(moves.pop().unwrap().into()));

        let state = Game::new(p).play(&rules, state).unwrap();
        assert_eq!(
            state.outcome(),
            Some(lib::game::Outcome::Winner(PlayerId::One))
        );
    }

    #[proptest]
    fn game_interrupts_if_player_fails(e: String) {
        let rules = tictactoe();
        let state = GameState::new(&rules)?;

        let err = e.clone();
        let mut p = MockPlayer::new();
        p.expect_request_move()
            .once()
            .return_once(move |_, _| Err(err));

        assert_eq!(
            Game::new(p).play(&rules, state),
            Err(GameInterrupted {
                player: PlayerId::One,
                source: e
            })
        );
    }
}
