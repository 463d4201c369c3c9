//! Point reward table for recognised gestures.

use crate::game::domain::GestureKind;
use crate::game::ports::BonusRoll;

/// Inclusive bonus range rolled for swipe gestures.
pub const SWIPE_BONUS_RANGE: (u32, u32) = (1, 5);

/// Returns the fixed point reward for a gesture.
///
/// Returns `None` when the reward is randomised (swipes) or the kind is
/// synthetic and never rewarded.
#[must_use]
pub const fn fixed_reward(kind: GestureKind) -> Option<u32> {
    match kind {
        GestureKind::Tap => Some(1),
        GestureKind::DoubleTap => Some(2),
        GestureKind::Drag => Some(3),
        GestureKind::Pinch => Some(4),
        GestureKind::LongPress => Some(5),
        GestureKind::SwipeLeft | GestureKind::SwipeRight | GestureKind::Points => None,
    }
}

/// Resolves the points awarded for a recognised gesture.
///
/// Swipes roll a bonus through the given port; the synthetic `points` kind
/// awards nothing.
#[must_use]
pub fn reward_for(kind: GestureKind, bonus: &impl BonusRoll) -> u32 {
    match kind {
        GestureKind::SwipeLeft | GestureKind::SwipeRight => {
            let (min, max) = SWIPE_BONUS_RANGE;
            bonus.roll(min, max)
        }
        other => fixed_reward(other).unwrap_or(0),
    }
}
