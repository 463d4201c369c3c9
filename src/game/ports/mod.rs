//! Port contracts between the game core and the outside world.

mod bonus;
mod observer;

pub use bonus::BonusRoll;
pub use observer::StageObserver;
