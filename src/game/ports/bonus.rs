//! Randomised reward source for swipe gestures.

/// Source of bonus point rolls.
///
/// Swipe gestures award a randomised number of points; routing the roll
/// through a port keeps the tracker deterministic under test.
pub trait BonusRoll: Send + Sync {
    /// Returns a value in `[min, max]`, inclusive on both ends.
    fn roll(&self, min: u32, max: u32) -> u32;
}
