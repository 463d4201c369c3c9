//! `rand`-backed bonus roll adapter.

use crate::game::ports::BonusRoll;
use rand::Rng;

/// Bonus roller backed by the thread-local random number generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngBonus;

impl BonusRoll for ThreadRngBonus {
    fn roll(&self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        rand::rng().random_range(min..=max)
    }
}
