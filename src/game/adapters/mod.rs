//! Adapter implementations of the game ports.

mod rng;
mod shared;

pub use rng::ThreadRngBonus;
pub use shared::{SharedTracker, SharedTrackerResult, TrackerPoisoned};
