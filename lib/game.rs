mod context;
mod error;
mod outcome;
mod phase;
mod reserve;
mod state;

pub use context::*;
pub use error::*;
pub use outcome::*;
pub use phase::*;
pub use reserve::*;
pub use state::*;
