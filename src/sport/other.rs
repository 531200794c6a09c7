use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamPoints {
    pub team_id: String,
    #[serde(default)]
    pub points: u32,
}

/// Generic point-based sport (volleyball, tug of war, ...): one running
/// total per team and no player-level breakdown. This is the only game
/// variant whose score is stored rather than derived from an event log.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OtherSport {
    #[serde(default)]
    pub points: Vec<TeamPoints>,
}

impl OtherSport {
    fn team_entry(&mut self, team_id: &str) -> &mut TeamPoints {
        if let Some(index) = self.points.iter().position(|p| p.team_id == team_id) {
            return &mut self.points[index];
        }
        self.points.push(TeamPoints {
            team_id: team_id.to_string(),
            points: 0,
        });
        self.points.last_mut().unwrap()
    }

    pub fn add_points(&mut self, team_id: &str, points: u32) {
        self.team_entry(team_id).points += points;
    }

    /// Corrective edit; the total clamps at zero rather than going
    /// negative.
    pub fn remove_points(&mut self, team_id: &str, points: u32) {
        let entry = self.team_entry(team_id);
        entry.points = entry.points.saturating_sub(points);
    }

    pub fn points_for(&self, team_id: &str) -> u32 {
        self.points
            .iter()
            .find(|p| p.team_id == team_id)
            .map(|p| p.points)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_accumulate_per_team() {
        let mut game = OtherSport::default();
        game.add_points("team-a", 10);
        game.add_points("team-a", 5);
        game.add_points("team-b", 7);

        assert_eq!(game.points_for("team-a"), 15);
        assert_eq!(game.points_for("team-b"), 7);
        assert_eq!(game.points_for("team-c"), 0);
    }

    #[test]
    fn removal_clamps_at_zero() {
        let mut game = OtherSport::default();
        game.add_points("team-a", 3);
        game.remove_points("team-a", 10);
        assert_eq!(game.points_for("team-a"), 0);
    }
}
