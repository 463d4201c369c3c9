//! Domain model for gesture-driven task progress.
//!
//! The game domain models classified gesture kinds, trackable tasks with
//! monotonic progress, and the display stage derived from completions, while
//! keeping all infrastructure concerns outside of the domain boundary.

mod catalog;
mod error;
mod gesture;
mod ids;
mod stage;
mod task;

pub use catalog::{CatalogError, TaskSeed, default_catalog, tasks_from_json, tasks_from_seeds};
pub use error::{GameDomainError, ParseGestureKindError};
pub use gesture::GestureKind;
pub use ids::{SessionId, TargetCount, TaskId};
pub use stage::{MAX_STAGE, STAGE_COUNT, Stage};
pub use task::Task;
