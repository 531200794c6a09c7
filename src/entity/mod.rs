// Public API
pub use participant::{Gender, Participant, Player};
pub use team::{slugify, Team};

// Internal modules
mod participant;
mod team;
