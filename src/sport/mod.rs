// Public API
pub use basketball::{Basketball, PointEvent, TeamBasketballStats};
pub use cricket::{Ball, BallKind, Cricket, Innings, Over};
pub use football::{CardKind, Football, PlayerRef, PositionEntry, TeamFootballStats};
pub use other::{OtherSport, TeamPoints};

// Internal modules
mod basketball;
mod cricket;
mod football;
mod other;

use serde::Serialize;
use thiserror::Error;

/// Discriminant codes inside the sports band. Anything else in the band
/// falls back to the generic point-based sport.
pub mod sport_code {
    pub const CRICKET: u32 = 1001;
    pub const FOOTBALL: u32 = 1002;
    pub const BASKETBALL: u32 = 1003;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SportKind {
    Cricket,
    Football,
    Basketball,
    Generic,
}

impl SportKind {
    pub fn from_code(code: u32) -> SportKind {
        match code {
            sport_code::CRICKET => SportKind::Cricket,
            sport_code::FOOTBALL => SportKind::Football,
            sport_code::BASKETBALL => SportKind::Basketball,
            _ => SportKind::Generic,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SportKind::Cricket => "cricket",
            SportKind::Football => "football",
            SportKind::Basketball => "basketball",
            SportKind::Generic => "generic",
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum GameError {
    #[error("Expected a {0} game for this activity")]
    WrongSport(&'static str),
    #[error("At least two teams are required")]
    NotEnoughTeams,
    #[error("Team is not part of this activity: {0}")]
    UnknownTeam(String),
    #[error("No innings at index {0}")]
    InningsOutOfRange(usize),
    #[error("Invalid point denomination: {0} (expected 1, 2 or 3)")]
    InvalidPointValue(u8),
}

/// The sport-specific event-log container inside a sports activity.
///
/// The serialized `game` document carries no discriminant of its own; the
/// activity's sport code selects the variant, so the union is tagged here
/// rather than inferred from the payload shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Game {
    Cricket(Cricket),
    Football(Football),
    Basketball(Basketball),
    Other(OtherSport),
}

impl Game {
    /// The empty log a freshly created activity starts with
    pub fn empty(kind: SportKind) -> Game {
        match kind {
            SportKind::Cricket => Game::Cricket(Cricket::default()),
            SportKind::Football => Game::Football(Football::default()),
            SportKind::Basketball => Game::Basketball(Basketball::default()),
            SportKind::Generic => Game::Other(OtherSport::default()),
        }
    }

    pub fn kind(&self) -> SportKind {
        match self {
            Game::Cricket(_) => SportKind::Cricket,
            Game::Football(_) => SportKind::Football,
            Game::Basketball(_) => SportKind::Basketball,
            Game::Other(_) => SportKind::Generic,
        }
    }

    pub fn as_cricket(&self) -> Result<&Cricket, GameError> {
        match self {
            Game::Cricket(game) => Ok(game),
            _ => Err(GameError::WrongSport("cricket")),
        }
    }

    pub fn as_cricket_mut(&mut self) -> Result<&mut Cricket, GameError> {
        match self {
            Game::Cricket(game) => Ok(game),
            _ => Err(GameError::WrongSport("cricket")),
        }
    }

    pub fn as_football(&self) -> Result<&Football, GameError> {
        match self {
            Game::Football(game) => Ok(game),
            _ => Err(GameError::WrongSport("football")),
        }
    }

    pub fn as_football_mut(&mut self) -> Result<&mut Football, GameError> {
        match self {
            Game::Football(game) => Ok(game),
            _ => Err(GameError::WrongSport("football")),
        }
    }

    pub fn as_basketball(&self) -> Result<&Basketball, GameError> {
        match self {
            Game::Basketball(game) => Ok(game),
            _ => Err(GameError::WrongSport("basketball")),
        }
    }

    pub fn as_basketball_mut(&mut self) -> Result<&mut Basketball, GameError> {
        match self {
            Game::Basketball(game) => Ok(game),
            _ => Err(GameError::WrongSport("basketball")),
        }
    }

    pub fn as_other(&self) -> Result<&OtherSport, GameError> {
        match self {
            Game::Other(game) => Ok(game),
            _ => Err(GameError::WrongSport("generic")),
        }
    }

    pub fn as_other_mut(&mut self) -> Result<&mut OtherSport, GameError> {
        match self {
            Game::Other(game) => Ok(game),
            _ => Err(GameError::WrongSport("generic")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_map_to_kinds() {
        assert_eq!(SportKind::from_code(1001), SportKind::Cricket);
        assert_eq!(SportKind::from_code(1002), SportKind::Football);
        assert_eq!(SportKind::from_code(1003), SportKind::Basketball);
        // Unlisted codes inside the band fall back to the generic sport
        assert_eq!(SportKind::from_code(1004), SportKind::Generic);
        assert_eq!(SportKind::from_code(1999), SportKind::Generic);
    }

    #[test]
    fn empty_game_matches_kind() {
        for kind in [
            SportKind::Cricket,
            SportKind::Football,
            SportKind::Basketball,
            SportKind::Generic,
        ] {
            assert_eq!(Game::empty(kind).kind(), kind);
        }
    }

    #[test]
    fn accessor_rejects_wrong_sport() {
        let mut game = Game::empty(SportKind::Football);
        assert_eq!(
            game.as_cricket().unwrap_err(),
            GameError::WrongSport("cricket")
        );
        assert!(game.as_football_mut().is_ok());
    }

    #[test]
    fn game_serializes_without_discriminant() {
        let game = Game::empty(SportKind::Cricket);
        let value = serde_json::to_value(&game).unwrap();
        assert_eq!(value, serde_json::json!({ "innings": [] }));
    }
}
