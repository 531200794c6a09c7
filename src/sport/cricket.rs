use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use super::GameError;

/// Delivery outcome, encoded with the scorer's short codes on the wire
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter,
)]
pub enum BallKind {
    #[default]
    #[serde(rename = "")]
    Normal,
    #[serde(rename = "W")]
    Wicket,
    #[serde(rename = "WD")]
    Wide,
    #[serde(rename = "NB")]
    NoBall,
    #[serde(rename = "B")]
    Bye,
    #[serde(rename = "LB")]
    LegBye,
}

impl BallKind {
    /// Wides and no-balls do not count toward the six-ball over
    pub fn is_legal_delivery(self) -> bool {
        !matches!(self, BallKind::Wide | BallKind::NoBall)
    }

    /// Extras awarded by the delivery itself, never entered by the caller
    pub fn extra_runs(self) -> u32 {
        match self {
            BallKind::Wide | BallKind::NoBall => 1,
            _ => 0,
        }
    }

    pub fn is_wicket(self) -> bool {
        matches!(self, BallKind::Wicket)
    }
}

impl fmt::Display for BallKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                BallKind::Normal => "",
                BallKind::Wicket => "W",
                BallKind::Wide => "WD",
                BallKind::NoBall => "NB",
                BallKind::Bye => "B",
                BallKind::LegBye => "LB",
            }
        )
    }
}

impl TryFrom<&str> for BallKind {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "" => Ok(BallKind::Normal),
            "W" => Ok(BallKind::Wicket),
            "WD" => Ok(BallKind::Wide),
            "NB" => Ok(BallKind::NoBall),
            "B" => Ok(BallKind::Bye),
            "LB" => Ok(BallKind::LegBye),
            _ => Err(s.to_string()),
        }
    }
}

/// One recorded delivery. `runs` is always the batsman's credited runs
/// (zero for wides and wickets); `extra_runs` carries the penalty runs
/// that are not credited to the batsman.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ball {
    pub batsman_id: String,
    #[serde(default)]
    pub runs: u32,
    #[serde(default)]
    pub extra_runs: u32,
    #[serde(rename = "type", default)]
    pub kind: BallKind,
}

/// All deliveries by one bowler within an innings. Grouping is strictly
/// by bowler identity; the log never auto-rolls at six legal balls, so a
/// single entry can hold more than one nominal over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Over {
    pub bowler_id: String,
    #[serde(default)]
    pub balls: Vec<Ball>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Innings {
    pub batting_team: String,
    pub bowling_team: String,
    #[serde(default)]
    pub overs: Vec<Over>,
}

/// The cricket event log: innings → overs → balls. All scoreboard values
/// are recomputed from this log; nothing derived is stored here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cricket {
    #[serde(default)]
    pub innings: Vec<Innings>,
}

impl Cricket {
    /// Opens the next innings and returns its index.
    ///
    /// The first innings bats the externally supplied toss choice; every
    /// later innings swaps the previous innings' sides (strict
    /// alternation, one innings per team per turn).
    pub fn start_innings(
        &mut self,
        team_ids: &[String],
        batting_first: &str,
    ) -> Result<usize, GameError> {
        if team_ids.len() < 2 {
            return Err(GameError::NotEnoughTeams);
        }

        let innings = match self.innings.last() {
            Some(previous) => Innings {
                batting_team: previous.bowling_team.clone(),
                bowling_team: previous.batting_team.clone(),
                overs: vec![],
            },
            None => {
                if !team_ids.iter().any(|id| id == batting_first) {
                    return Err(GameError::UnknownTeam(batting_first.to_string()));
                }
                let bowling = team_ids
                    .iter()
                    .find(|id| *id != batting_first)
                    .cloned()
                    .ok_or(GameError::NotEnoughTeams)?;
                Innings {
                    batting_team: batting_first.to_string(),
                    bowling_team: bowling,
                    overs: vec![],
                }
            }
        };

        self.innings.push(innings);
        Ok(self.innings.len() - 1)
    }

    /// Appends a delivery to the given innings, under the over record of
    /// the bowler (created on first delivery). Extras are derived from
    /// the ball kind; wides and wickets credit the batsman zero runs.
    pub fn add_ball(
        &mut self,
        innings_index: usize,
        bowler_id: &str,
        batsman_id: &str,
        runs: u32,
        kind: BallKind,
    ) -> Result<(), GameError> {
        let innings = self
            .innings
            .get_mut(innings_index)
            .ok_or(GameError::InningsOutOfRange(innings_index))?;

        let credited = match kind {
            BallKind::Wide | BallKind::Wicket => 0,
            _ => runs,
        };
        let ball = Ball {
            batsman_id: batsman_id.to_string(),
            runs: credited,
            extra_runs: kind.extra_runs(),
            kind,
        };

        match innings
            .overs
            .iter_mut()
            .find(|over| over.bowler_id == bowler_id)
        {
            Some(over) => over.balls.push(ball),
            None => innings.overs.push(Over {
                bowler_id: bowler_id.to_string(),
                balls: vec![ball],
            }),
        }

        Ok(())
    }

    /// Corrective edit: removes an innings wholesale and returns it
    pub fn delete_innings(&mut self, index: usize) -> Result<Innings, GameError> {
        if index >= self.innings.len() {
            return Err(GameError::InningsOutOfRange(index));
        }
        Ok(self.innings.remove(index))
    }
}
