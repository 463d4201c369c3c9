//! Unit tests for the game module.
//!
//! Tests are organised by domain concept, covering happy paths, error cases,
//! and edge cases for all public APIs.

mod catalog_tests;
mod shared_tests;
mod stage_tests;
