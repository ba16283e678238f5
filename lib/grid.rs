mod board;
mod cell;
mod direction;
mod layout;
mod r#move;
mod perspective;
mod piece;
mod player;
mod pos;

pub use board::*;
pub use cell::*;
pub use direction::*;
pub use layout::*;
pub use perspective::*;
pub use piece::*;
pub use player::*;
pub use pos::*;
pub use r#move::*;
