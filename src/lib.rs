//! Catplay: gesture-driven achievement tracking for a cat-raising mini game.
//!
//! This crate implements the game's progress core: a stream of discrete,
//! classified gesture events is converted into monotonically increasing
//! per-task progress counters, a running point total, and a derived display
//! stage selecting one of nine visual reward assets.
//!
//! # Architecture
//!
//! Catplay follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (RNG, shared state)
//!
//! Gesture *classification* stays outside the boundary: the core consumes
//! final, disambiguated gesture events and never re-implements recogniser
//! priority or wait-for relationships.
//!
//! # Modules
//!
//! - [`game`]: Task progress tracking, gesture rewards, and stage selection

pub mod game;
