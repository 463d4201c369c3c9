//! Stage selection for the game's visual reward assets.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of stage visuals shipped with the game, including the idle stage.
pub const STAGE_COUNT: usize = 9;

/// Highest selectable stage index.
pub const MAX_STAGE: u8 = 8;

/// Index selecting one of the fixed stage visuals.
///
/// The stage only changes on a new task completion; it never exceeds
/// [`MAX_STAGE`] even when more tasks complete than stage art exists, so a
/// missing visual can never take the session down.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Stage(u8);

impl Stage {
    /// The idle stage shown before any task completes.
    pub const IDLE: Self = Self(0);

    /// Selects the stage for the given number of observed task completions,
    /// clamping to the available stage art.
    #[must_use]
    pub fn for_completions(completions: usize) -> Self {
        let clamped = completions.min(usize::from(MAX_STAGE));
        Self(u8::try_from(clamped).unwrap_or(MAX_STAGE))
    }

    /// Returns the stage index in `[0, MAX_STAGE]`.
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Whether this is the idle stage.
    #[must_use]
    pub const fn is_idle(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
