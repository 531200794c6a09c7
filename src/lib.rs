// Library crate for the event-program live results engine
// This file exposes the public API for integration tests and embedders

pub mod activity;
pub mod entity;
pub mod shared;
pub mod sport;
pub mod stats;

// Re-export commonly used types for easier access in tests
pub use activity::{
    parse, ActivityRepository, ActivityStatus, InMemoryActivityRepository, ParsedActivity,
    ScoreboardService, SportsActivity,
};
pub use entity::{Gender, Participant, Player, Team};
pub use shared::AppError;
pub use sport::{BallKind, CardKind, Game, SportKind};
pub use stats::MatchOutcome;
