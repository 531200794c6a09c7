use serde::{Deserialize, Serialize};

use super::GameError;

/// One scoring action. `points` is the denomination of the action (free
/// throw 1, field goal 2, three-pointer 3). Totals sum this field; they
/// never count events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointEvent {
    pub player_id: String,
    pub points: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamBasketballStats {
    pub team_id: String,
    #[serde(default)]
    pub points: Vec<PointEvent>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Basketball {
    #[serde(default)]
    pub stats: Vec<TeamBasketballStats>,
}

impl Basketball {
    pub fn team_stats(&self, team_id: &str) -> Option<&TeamBasketballStats> {
        self.stats.iter().find(|s| s.team_id == team_id)
    }

    pub fn record_points(
        &mut self,
        team_id: &str,
        player_id: &str,
        points: u8,
    ) -> Result<(), GameError> {
        if !(1..=3).contains(&points) {
            return Err(GameError::InvalidPointValue(points));
        }

        let entry = match self.stats.iter().position(|s| s.team_id == team_id) {
            Some(index) => &mut self.stats[index],
            None => {
                self.stats.push(TeamBasketballStats {
                    team_id: team_id.to_string(),
                    points: vec![],
                });
                self.stats.last_mut().unwrap()
            }
        };

        entry.points.push(PointEvent {
            player_id: player_id.to_string(),
            points,
        });
        Ok(())
    }
}
