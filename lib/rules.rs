mod capability;
mod capture;
mod condition;
mod movegen;
mod placement;
mod ruleset;

pub use capability::*;
pub use capture::*;
pub use condition::*;
pub use movegen::*;
pub use placement::*;
pub use ruleset::*;
