use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter,
)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
    #[default]
    #[serde(rename = "O")]
    Other,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Gender::Male => "M",
                Gender::Female => "F",
                Gender::Other => "O",
            }
        )
    }
}

impl TryFrom<&str> for Gender {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "M" => Ok(Gender::Male),
            "F" => Ok(Gender::Female),
            "O" => Ok(Gender::Other),
            _ => Err(s.to_string()),
        }
    }
}

/// A person registered for the event program. Identity is immutable and is
/// never deleted while a played event still references it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub usn: String,
    pub name: String,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Participant {
    pub fn new(usn: &str, name: &str, gender: Gender) -> Self {
        Self {
            usn: usn.to_string(),
            name: name.to_string(),
            gender,
            email: None,
            phone: None,
        }
    }
}

/// A participant scoped to one sports activity: team assignment, lineup
/// flag and a sport-specific stats bag (position etc.)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    #[serde(flatten)]
    pub participant: Participant,
    // Team assignment is by id equality only, no object references
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    #[serde(default)]
    pub is_playing: bool,
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub stats: serde_json::Map<String, serde_json::Value>,
}

impl Player {
    pub fn new(participant: Participant, team_id: Option<String>, is_playing: bool) -> Self {
        Self {
            participant,
            team_id,
            is_playing,
            stats: serde_json::Map::new(),
        }
    }

    pub fn usn(&self) -> &str {
        &self.participant.usn
    }

    pub fn name(&self) -> &str {
        &self.participant.name
    }

    /// A player without a team assignment cannot be scored
    pub fn is_assigned(&self) -> bool {
        self.team_id.is_some()
    }
}
