//! Gesture-to-task progress tracking for the cat game.
//!
//! This module converts classified gesture events into monotonically
//! increasing per-task progress, a point total, and the display stage shown
//! to the player. Point changes explicitly re-run the `points`-kind task
//! update so point-based tasks never drift out of sync with the total. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
