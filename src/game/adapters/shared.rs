//! Thread-safe tracker handle applying each update as one atomic step.

use crate::game::domain::{GestureKind, Stage};
use crate::game::ports::BonusRoll;
use crate::game::services::{GestureOutcome, ProgressTracker, SessionSnapshot};
use mockable::Clock;
use std::sync::{Arc, RwLock};
use thiserror::Error;

/// Error returned when the tracker lock was poisoned by a panicking writer.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("tracker lock poisoned by a panicking writer")]
pub struct TrackerPoisoned;

/// Result type for shared tracker operations.
pub type SharedTrackerResult<T> = Result<T, TrackerPoisoned>;

/// Cloneable handle sharing one [`ProgressTracker`] across threads.
///
/// Gesture events are normally serialised by the UI event loop; this wrapper
/// covers hosts where a background timer can land an update concurrently
/// with fresh input (a long-press finishing while a tap arrives). Every
/// operation takes the lock once, so each update applies as a single
/// indivisible transaction and no increments are lost.
pub struct SharedTracker<C, B>
where
    C: Clock + Send + Sync,
    B: BonusRoll,
{
    inner: Arc<RwLock<ProgressTracker<C, B>>>,
}

impl<C, B> Clone for SharedTracker<C, B>
where
    C: Clock + Send + Sync,
    B: BonusRoll,
{
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C, B> SharedTracker<C, B>
where
    C: Clock + Send + Sync,
    B: BonusRoll,
{
    /// Wraps a tracker for shared access.
    #[must_use]
    pub fn new(tracker: ProgressTracker<C, B>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(tracker)),
        }
    }

    /// Records a classified gesture event.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerPoisoned`] when a previous holder panicked.
    pub fn record_gesture(&self, kind: GestureKind) -> SharedTrackerResult<GestureOutcome> {
        let mut tracker = self.inner.write().map_err(|_| TrackerPoisoned)?;
        Ok(tracker.record_gesture(kind))
    }

    /// Records a classified gesture event with an explicit amount.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerPoisoned`] when a previous holder panicked.
    pub fn record_gesture_with(
        &self,
        kind: GestureKind,
        amount: u32,
    ) -> SharedTrackerResult<GestureOutcome> {
        let mut tracker = self.inner.write().map_err(|_| TrackerPoisoned)?;
        Ok(tracker.record_gesture_with(kind, amount))
    }

    /// Credits points and re-runs the `points`-kind task update.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerPoisoned`] when a previous holder panicked.
    pub fn add_points(&self, amount: u64) -> SharedTrackerResult<GestureOutcome> {
        let mut tracker = self.inner.write().map_err(|_| TrackerPoisoned)?;
        Ok(tracker.add_points(amount))
    }

    /// Applies a recognised gesture end to end (reward plus progress).
    ///
    /// # Errors
    ///
    /// Returns [`TrackerPoisoned`] when a previous holder panicked.
    pub fn apply_gesture(&self, kind: GestureKind) -> SharedTrackerResult<GestureOutcome> {
        let mut tracker = self.inner.write().map_err(|_| TrackerPoisoned)?;
        Ok(tracker.apply_gesture(kind))
    }

    /// Returns the running point total.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerPoisoned`] when a previous holder panicked.
    pub fn points(&self) -> SharedTrackerResult<u64> {
        let tracker = self.inner.read().map_err(|_| TrackerPoisoned)?;
        Ok(tracker.points())
    }

    /// Returns the stage currently selected for display.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerPoisoned`] when a previous holder panicked.
    pub fn stage(&self) -> SharedTrackerResult<Stage> {
        let tracker = self.inner.read().map_err(|_| TrackerPoisoned)?;
        Ok(tracker.stage())
    }

    /// Builds a read-only snapshot of the whole session.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerPoisoned`] when a previous holder panicked.
    pub fn snapshot(&self) -> SharedTrackerResult<SessionSnapshot> {
        let tracker = self.inner.read().map_err(|_| TrackerPoisoned)?;
        Ok(tracker.snapshot())
    }
}
