use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::entity::{slugify, Participant, Player, Team};
use crate::sport::{Game, GameError, SportKind};

/// Band floors for the activity discriminant. Bands are contiguous
/// integer ranges classified by floor comparison, so new sub-types slot
/// into a band without touching dispatch code.
pub mod band {
    pub const SPORTS: u32 = 1000;
    pub const CULTURAL: u32 = 2000;
    pub const TECH: u32 = 3000;
    pub const GENERAL: u32 = 4000;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventBand {
    Sports,
    Cultural,
    Tech,
    General,
}

impl EventBand {
    /// Classifies by comparing against band floors from the top down.
    /// Codes below the sports floor land in the general band.
    pub fn classify(code: u32) -> EventBand {
        if code >= band::GENERAL {
            EventBand::General
        } else if code >= band::TECH {
            EventBand::Tech
        } else if code >= band::CULTURAL {
            EventBand::Cultural
        } else if code >= band::SPORTS {
            EventBand::Sports
        } else {
            EventBand::General
        }
    }
}

/// Never stored; always derived from the two timestamps and the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ActivityStatus {
    Upcoming,
    Ongoing,
    Completed,
}

impl ActivityStatus {
    pub fn at(start: DateTime<Utc>, end: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Self {
        if end.is_some() {
            ActivityStatus::Completed
        } else if now < start {
            ActivityStatus::Upcoming
        } else {
            ActivityStatus::Ongoing
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum RosterError {
    #[error("A team with an equivalent name already exists: {0}")]
    DuplicateTeamName(String),
    #[error("Team is not part of this activity: {0}")]
    UnknownTeam(String),
    #[error("Player is not part of this activity: {0}")]
    UnknownPlayer(String),
}

/// A non-sports program item (cultural, tech, general bands). Only the
/// shape the parser needs; those bands' feature surfaces are out of
/// scope here.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub name: String,
    pub start_time: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(rename = "type")]
    pub code: u32,
    pub participants: Vec<Participant>,
}

impl Activity {
    pub fn status(&self, now: DateTime<Utc>) -> ActivityStatus {
        ActivityStatus::at(self.start_time, self.end_time, now)
    }
}

/// A sports program item: teams, sport-scoped players and one game log.
///
/// Events inside `game` reference teams and players by id only. Nothing
/// here enforces that those ids resolve; dangling references are
/// tolerated and rendered as "Unknown" by the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SportsActivity {
    pub id: String,
    pub name: String,
    pub start_time: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(rename = "type")]
    pub code: u32,
    pub teams: Vec<Team>,
    pub participants: Vec<Player>,
    pub game: Game,
}

impl SportsActivity {
    pub fn new(id: &str, name: &str, code: u32, start_time: DateTime<Utc>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            start_time,
            end_time: None,
            code,
            teams: vec![],
            participants: vec![],
            game: Game::empty(SportKind::from_code(code)),
        }
    }

    pub fn sport(&self) -> SportKind {
        SportKind::from_code(self.code)
    }

    pub fn status(&self, now: DateTime<Utc>) -> ActivityStatus {
        ActivityStatus::at(self.start_time, self.end_time, now)
    }

    /// Adds a team, guarding against a case-insensitively identical name.
    /// The returned team carries its stable id.
    pub fn add_team(&mut self, name: &str) -> Result<&Team, RosterError> {
        let slug = slugify(name);
        if self.teams.iter().any(|team| team.slug == slug) {
            return Err(RosterError::DuplicateTeamName(name.to_string()));
        }
        self.teams.push(Team::new(name));
        Ok(self.teams.last().unwrap())
    }

    /// Renames a team in place. The id stays stable, so player
    /// assignments and logged events keep resolving; the new name must
    /// not collide with another team's slug.
    pub fn rename_team(&mut self, team_id: &str, name: &str) -> Result<(), RosterError> {
        let slug = slugify(name);
        if self
            .teams
            .iter()
            .any(|team| team.slug == slug && team.id != team_id)
        {
            return Err(RosterError::DuplicateTeamName(name.to_string()));
        }
        let team = self
            .teams
            .iter_mut()
            .find(|team| team.id == team_id)
            .ok_or_else(|| RosterError::UnknownTeam(team_id.to_string()))?;
        team.rename(name);
        Ok(())
    }

    /// Registers a player. A team assignment, when present, must name a
    /// team of this activity; the game log itself is not checked.
    pub fn add_player(&mut self, player: Player) -> Result<&Player, RosterError> {
        if let Some(team_id) = &player.team_id {
            if self.team(team_id).is_none() {
                return Err(RosterError::UnknownTeam(team_id.clone()));
            }
        }
        self.participants.push(player);
        Ok(self.participants.last().unwrap())
    }

    pub fn team(&self, team_id: &str) -> Option<&Team> {
        self.teams.iter().find(|team| team.id == team_id)
    }

    pub fn player(&self, usn: &str) -> Option<&Player> {
        self.participants.iter().find(|player| player.usn() == usn)
    }

    pub fn team_ids(&self) -> Vec<String> {
        self.teams.iter().map(|team| team.id.clone()).collect()
    }

    /// Players assigned to one team
    pub fn roster(&self, team_id: &str) -> Vec<&Player> {
        self.participants
            .iter()
            .filter(|player| player.team_id.as_deref() == Some(team_id))
            .collect()
    }

    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    pub fn playing_count(&self) -> usize {
        self.participants.iter().filter(|p| p.is_playing).count()
    }

    /// Opens the next cricket innings; the activity owns the team list,
    /// so side selection happens here. Fails on non-cricket activities
    /// and on rosters with fewer than two teams.
    pub fn start_innings(&mut self, batting_first: &str) -> Result<usize, GameError> {
        let team_ids = self.team_ids();
        self.game.as_cricket_mut()?.start_innings(&team_ids, batting_first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    use crate::entity::Gender;
    use crate::sport::sport_code;

    fn cricket_activity() -> SportsActivity {
        SportsActivity::new(
            "act-1",
            "Cricket Finals",
            sport_code::CRICKET,
            Utc.with_ymd_and_hms(2024, 3, 14, 9, 0, 0).unwrap(),
        )
    }

    #[rstest]
    #[case(999, EventBand::General)]
    #[case(1000, EventBand::Sports)]
    #[case(1999, EventBand::Sports)]
    #[case(2000, EventBand::Cultural)]
    #[case(2999, EventBand::Cultural)]
    #[case(3000, EventBand::Tech)]
    #[case(4000, EventBand::General)]
    #[case(9999, EventBand::General)]
    fn bands_classify_by_floor(#[case] code: u32, #[case] expected: EventBand) {
        assert_eq!(EventBand::classify(code), expected);
    }

    #[test]
    fn status_is_a_function_of_timestamps() {
        let start = Utc.with_ymd_and_hms(2024, 3, 14, 9, 0, 0).unwrap();
        let before = start - chrono::Duration::hours(1);
        let after = start + chrono::Duration::hours(1);

        assert_eq!(ActivityStatus::at(start, None, before), ActivityStatus::Upcoming);
        assert_eq!(ActivityStatus::at(start, None, after), ActivityStatus::Ongoing);
        // An end time means completed, regardless of the clock
        assert_eq!(
            ActivityStatus::at(start, Some(after), before),
            ActivityStatus::Completed
        );
    }

    #[test]
    fn duplicate_team_names_are_rejected_before_mutation() {
        let mut activity = cricket_activity();
        activity.add_team("Team Alpha").unwrap();
        let result = activity.add_team("TEAM ALPHA");
        assert!(matches!(result, Err(RosterError::DuplicateTeamName(_))));
        assert_eq!(activity.teams.len(), 1);
    }

    #[test]
    fn rename_keeps_roster_links_intact() {
        let mut activity = cricket_activity();
        let team_id = activity.add_team("Old Name").unwrap().id.clone();
        let player = Player::new(
            Participant::new("1XX20CS001", "Asha", Gender::Female),
            Some(team_id.clone()),
            true,
        );
        activity.add_player(player).unwrap();

        activity.rename_team(&team_id, "New Name").unwrap();

        assert_eq!(activity.team(&team_id).unwrap().name, "New Name");
        assert_eq!(activity.roster(&team_id).len(), 1);
    }

    #[test]
    fn rename_rejects_collision_with_other_team() {
        let mut activity = cricket_activity();
        let a = activity.add_team("Alpha").unwrap().id.clone();
        activity.add_team("Beta").unwrap();

        let result = activity.rename_team(&a, "beta");
        assert!(matches!(result, Err(RosterError::DuplicateTeamName(_))));
        // Renaming a team to its own name is not a collision
        assert!(activity.rename_team(&a, "ALPHA").is_ok());
    }

    #[test]
    fn player_assignment_must_reference_a_known_team() {
        let mut activity = cricket_activity();
        let player = Player::new(
            Participant::new("1XX20CS001", "Asha", Gender::Female),
            Some("ghost-team".to_string()),
            true,
        );
        assert!(matches!(
            activity.add_player(player),
            Err(RosterError::UnknownTeam(_))
        ));

        let unassigned = Player::new(
            Participant::new("1XX20CS002", "Ravi", Gender::Male),
            None,
            false,
        );
        assert!(activity.add_player(unassigned).is_ok());
    }

    #[test]
    fn counts_distinguish_lineup_from_substitutes() {
        let mut activity = cricket_activity();
        let team_id = activity.add_team("Alpha").unwrap().id.clone();
        for (usn, playing) in [("u1", true), ("u2", true), ("u3", false)] {
            let player = Player::new(
                Participant::new(usn, usn, Gender::Other),
                Some(team_id.clone()),
                playing,
            );
            activity.add_player(player).unwrap();
        }

        assert_eq!(activity.participant_count(), 3);
        assert_eq!(activity.playing_count(), 2);
        assert_eq!(activity.roster(&team_id).len(), 3);
    }

    #[test]
    fn start_innings_requires_a_cricket_game() {
        let mut activity = SportsActivity::new(
            "act-2",
            "Football Finals",
            sport_code::FOOTBALL,
            Utc::now(),
        );
        activity.add_team("Alpha").unwrap();
        activity.add_team("Beta").unwrap();
        assert!(matches!(
            activity.start_innings("whatever"),
            Err(GameError::WrongSport("cricket"))
        ));
    }

    #[test]
    fn start_innings_uses_the_activity_roster() {
        let mut activity = cricket_activity();
        let alpha = activity.add_team("Alpha").unwrap().id.clone();
        activity.add_team("Beta").unwrap();

        let index = activity.start_innings(&alpha).unwrap();
        assert_eq!(index, 0);
        let cricket = activity.game.as_cricket().unwrap();
        assert_eq!(cricket.innings[0].batting_team, alpha);
    }
}
