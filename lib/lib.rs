/// Board, pieces and move notation.
pub mod grid;
/// Turn-by-turn state of a game.
pub mod game;
/// Variant descriptions and the rules they compose.
pub mod rules;
