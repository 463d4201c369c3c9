//! Orchestration services for the game core.

mod rewards;
mod tracker;

pub use rewards::{SWIPE_BONUS_RANGE, fixed_reward, reward_for};
pub use tracker::{Completion, GestureOutcome, ProgressTracker, SessionSnapshot};
