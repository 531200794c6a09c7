//! The single construction entry point for untyped activity payloads.
//!
//! Dispatch is keyed on the activity's discriminant code, never on the
//! shape of the `game` value: the band is classified by floor comparison
//! and, inside the sports band, the exact code picks the game variant
//! with the generic sport as the fallback.

use chrono::{DateTime, TimeZone, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::entity::{slugify, Participant, Player, Team};
use crate::sport::{sport_code, Basketball, Cricket, Football, Game, OtherSport, SportKind};

use super::models::{Activity, EventBand, SportsActivity};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Payload must be a JSON object")]
    NotAnObject,
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Invalid value for {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParsedActivity {
    Sports(SportsActivity),
    General(Activity),
}

impl ParsedActivity {
    pub fn into_sports(self) -> Option<SportsActivity> {
        match self {
            ParsedActivity::Sports(activity) => Some(activity),
            ParsedActivity::General(_) => None,
        }
    }
}

/// Parses a whole-document payload into the matching activity shape.
///
/// Optional fields default (empty collections, `now` for a missing start
/// time); a missing `participants` array is a hard validation error
/// because the rest of the pipeline assumes one.
pub fn parse(payload: &Value) -> Result<ParsedActivity, ParseError> {
    let obj = payload.as_object().ok_or(ParseError::NotAnObject)?;

    let code = discriminant(obj)?;
    let id = string_field(obj, "id");
    let name = string_field(obj, "name");
    let start_time = match obj.get("startTime") {
        None | Some(Value::Null) => Utc::now(),
        Some(value) => parse_datetime("startTime", value)?,
    };
    let end_time = match obj.get("endTime") {
        None | Some(Value::Null) => None,
        Some(value) => Some(parse_datetime("endTime", value)?),
    };

    let participants = obj
        .get("participants")
        .ok_or(ParseError::MissingField("participants"))?
        .as_array()
        .ok_or(ParseError::InvalidField {
            field: "participants",
            reason: "expected an array".to_string(),
        })?;

    match EventBand::classify(code) {
        EventBand::Sports => {
            let players: Vec<Player> = parse_list("participants", participants)?;
            let mut teams: Vec<Team> = match obj.get("teams") {
                None | Some(Value::Null) => vec![],
                Some(Value::Array(list)) => parse_list("teams", list)?,
                Some(_) => {
                    return Err(ParseError::InvalidField {
                        field: "teams",
                        reason: "expected an array".to_string(),
                    })
                }
            };
            // Older documents may predate the slug field
            for team in &mut teams {
                if team.slug.is_empty() {
                    team.slug = slugify(&team.name);
                }
            }
            let game = parse_game(code, obj.get("game"))?;

            Ok(ParsedActivity::Sports(SportsActivity {
                id,
                name,
                start_time,
                end_time,
                code,
                teams,
                participants: players,
                game,
            }))
        }
        _ => {
            let participants: Vec<Participant> = parse_list("participants", participants)?;
            Ok(ParsedActivity::General(Activity {
                id,
                name,
                start_time,
                end_time,
                code,
                participants,
            }))
        }
    }
}

/// Normalizes the `eventType` payload field to the internal discriminant;
/// `type` is accepted as an alias for already-internal documents.
fn discriminant(obj: &serde_json::Map<String, Value>) -> Result<u32, ParseError> {
    let value = obj
        .get("eventType")
        .or_else(|| obj.get("type"))
        .ok_or(ParseError::MissingField("eventType"))?;
    value
        .as_u64()
        .and_then(|code| u32::try_from(code).ok())
        .ok_or_else(|| ParseError::InvalidField {
            field: "eventType",
            reason: format!("expected an integer code, got {value}"),
        })
}

/// Second dispatch inside the sports band: the exact code selects the
/// game constructor, anything unlisted builds the generic sport. A
/// missing game value yields the empty log.
fn parse_game(code: u32, value: Option<&Value>) -> Result<Game, ParseError> {
    let kind = SportKind::from_code(code);
    let value = match value {
        None | Some(Value::Null) => return Ok(Game::empty(kind)),
        Some(value) => value.clone(),
    };

    let game = match code {
        sport_code::CRICKET => Game::Cricket(from_game_value::<Cricket>(value)?),
        sport_code::FOOTBALL => Game::Football(from_game_value::<Football>(value)?),
        sport_code::BASKETBALL => Game::Basketball(from_game_value::<Basketball>(value)?),
        _ => Game::Other(from_game_value::<OtherSport>(value)?),
    };
    Ok(game)
}

fn from_game_value<T: DeserializeOwned>(value: Value) -> Result<T, ParseError> {
    serde_json::from_value(value).map_err(|err| ParseError::InvalidField {
        field: "game",
        reason: err.to_string(),
    })
}

fn parse_list<T: DeserializeOwned>(
    field: &'static str,
    list: &[Value],
) -> Result<Vec<T>, ParseError> {
    list.iter()
        .map(|value| {
            serde_json::from_value(value.clone()).map_err(|err| ParseError::InvalidField {
                field,
                reason: err.to_string(),
            })
        })
        .collect()
}

fn string_field(obj: &serde_json::Map<String, Value>, key: &str) -> String {
    obj.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn parse_datetime(field: &'static str, value: &Value) -> Result<DateTime<Utc>, ParseError> {
    if let Some(text) = value.as_str() {
        return DateTime::parse_from_rfc3339(text)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|err| ParseError::InvalidField {
                field,
                reason: err.to_string(),
            });
    }
    if let Some(millis) = value.as_i64() {
        return Utc
            .timestamp_millis_opt(millis)
            .single()
            .ok_or(ParseError::InvalidField {
                field,
                reason: format!("{millis} is out of range"),
            });
    }
    Err(ParseError::InvalidField {
        field,
        reason: "expected an RFC 3339 string or epoch milliseconds".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sports_payload(code: u32) -> Value {
        json!({
            "id": "act-1",
            "name": "Finals",
            "eventType": code,
            "startTime": "2024-03-14T09:00:00Z",
            "participants": [],
        })
    }

    #[test]
    fn missing_participants_is_a_hard_error() {
        let payload = json!({ "eventType": 1001, "name": "Finals" });
        assert!(matches!(
            parse(&payload),
            Err(ParseError::MissingField("participants"))
        ));
    }

    #[test]
    fn missing_discriminant_is_a_hard_error() {
        let payload = json!({ "participants": [] });
        assert!(matches!(
            parse(&payload),
            Err(ParseError::MissingField("eventType"))
        ));
    }

    #[test]
    fn type_field_is_accepted_as_alias() {
        let payload = json!({ "type": 1001, "participants": [] });
        let activity = parse(&payload).unwrap().into_sports().unwrap();
        assert_eq!(activity.code, 1001);
        assert_eq!(activity.sport(), SportKind::Cricket);
    }

    #[test]
    fn optional_fields_default() {
        let payload = json!({ "eventType": 1001, "participants": [] });
        let activity = parse(&payload).unwrap().into_sports().unwrap();
        assert_eq!(activity.id, "");
        assert!(activity.teams.is_empty());
        assert_eq!(activity.end_time, None);
        assert_eq!(activity.game, Game::Cricket(Cricket::default()));
    }

    #[test]
    fn exact_code_selects_the_game_variant() {
        for (code, kind) in [
            (1001, SportKind::Cricket),
            (1002, SportKind::Football),
            (1003, SportKind::Basketball),
            (1017, SportKind::Generic),
        ] {
            let activity = parse(&sports_payload(code)).unwrap().into_sports().unwrap();
            assert_eq!(activity.game.kind(), kind);
        }
    }

    #[test]
    fn non_sports_bands_build_the_base_shape() {
        let payload = json!({
            "eventType": 2104,
            "name": "Dance Off",
            "participants": [{ "usn": "u1", "name": "Asha", "gender": "F" }],
        });
        match parse(&payload).unwrap() {
            ParsedActivity::General(activity) => {
                assert_eq!(activity.code, 2104);
                assert_eq!(activity.participants.len(), 1);
            }
            ParsedActivity::Sports(_) => panic!("cultural code must not build a sports activity"),
        }
    }

    #[test]
    fn start_time_accepts_epoch_millis() {
        let payload = json!({
            "eventType": 1002,
            "startTime": 1710406800000i64,
            "participants": [],
        });
        let activity = parse(&payload).unwrap().into_sports().unwrap();
        assert_eq!(activity.start_time.timestamp_millis(), 1710406800000);
    }

    #[test]
    fn malformed_game_shape_is_a_validation_error() {
        let payload = json!({
            "eventType": 1001,
            "participants": [],
            "game": { "innings": [{ "battingTeam": "a" }] },
        });
        // bowlingTeam is required on an innings record
        assert!(matches!(
            parse(&payload),
            Err(ParseError::InvalidField { field: "game", .. })
        ));
    }

    #[test]
    fn unknown_ball_code_is_a_validation_error() {
        let payload = json!({
            "eventType": 1001,
            "participants": [],
            "game": { "innings": [{
                "battingTeam": "a",
                "bowlingTeam": "b",
                "overs": [{ "bowlerId": "x", "balls": [
                    { "batsmanId": "p", "runs": 1, "extraRuns": 0, "type": "XX" }
                ]}]
            }]},
        });
        assert!(matches!(
            parse(&payload),
            Err(ParseError::InvalidField { field: "game", .. })
        ));
    }

    #[test]
    fn slug_is_backfilled_for_older_documents() {
        let payload = json!({
            "eventType": 1002,
            "participants": [],
            "teams": [{ "id": "t1", "name": "Team Alpha" }],
        });
        let activity = parse(&payload).unwrap().into_sports().unwrap();
        assert_eq!(activity.teams[0].slug, "team-alpha");
    }
}
