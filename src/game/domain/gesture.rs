//! Classified gesture kinds consumed by the progress tracker.

use super::ParseGestureKindError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A discrete, classified user-input gesture.
///
/// Classification itself (recogniser priority, wait-for relationships,
/// long-press timing) happens outside this crate; the tracker only consumes
/// the final disambiguated kind. [`GestureKind::Points`] is synthetic: it is
/// driven by the running point total rather than by a recognised gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureKind {
    /// A single tap.
    Tap,
    /// Two taps in quick succession.
    DoubleTap,
    /// A press held past the classifier's duration threshold.
    LongPress,
    /// A completed drag across the play area.
    Drag,
    /// A leftward fling.
    SwipeLeft,
    /// A rightward fling.
    SwipeRight,
    /// A pinch or stretch.
    Pinch,
    /// Synthetic kind tracking the running point total.
    Points,
}

impl GestureKind {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tap => "tap",
            Self::DoubleTap => "double_tap",
            Self::LongPress => "long_press",
            Self::Drag => "drag",
            Self::SwipeLeft => "swipe_left",
            Self::SwipeRight => "swipe_right",
            Self::Pinch => "pinch",
            Self::Points => "points",
        }
    }

    /// Whether this kind is driven by the point total instead of input.
    #[must_use]
    pub const fn is_synthetic(self) -> bool {
        matches!(self, Self::Points)
    }
}

impl TryFrom<&str> for GestureKind {
    type Error = ParseGestureKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "tap" => Ok(Self::Tap),
            "double_tap" => Ok(Self::DoubleTap),
            "long_press" => Ok(Self::LongPress),
            "drag" => Ok(Self::Drag),
            "swipe_left" => Ok(Self::SwipeLeft),
            "swipe_right" => Ok(Self::SwipeRight),
            "pinch" => Ok(Self::Pinch),
            "points" => Ok(Self::Points),
            _ => Err(ParseGestureKindError(value.to_owned())),
        }
    }
}

impl fmt::Display for GestureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
