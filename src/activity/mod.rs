// Public API
pub use models::{band, Activity, ActivityStatus, EventBand, RosterError, SportsActivity};
pub use parse::{parse, ParseError, ParsedActivity};
pub use repository::{ActivityRepository, InMemoryActivityRepository};
pub use service::ScoreboardService;

// Internal modules
mod models;
mod parse;
mod repository;
mod service;
