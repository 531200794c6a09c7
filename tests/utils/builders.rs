use scoreboard::{Gender, Participant, Player};

use super::setup::TestSetup;

// ============================================================================
// Entity Helpers
// ============================================================================

pub fn participant(usn: &str, name: &str) -> Participant {
    Participant::new(usn, name, Gender::Other)
}

pub fn player(usn: &str, name: &str, team_id: &str) -> Player {
    Player::new(participant(usn, name), Some(team_id.to_string()), true)
}

// ============================================================================
// Activity Setup Utilities
// ============================================================================

pub struct BuiltActivity {
    pub activity_id: String,
    /// Team ids in the order the teams were added
    pub team_ids: Vec<String>,
    /// One player usn per team, same order as `team_ids`
    pub player_ids: Vec<String>,
}

pub struct ActivityBuilder {
    name: String,
    code: u32,
    teams: Vec<String>,
}

impl ActivityBuilder {
    pub fn new(name: &str, code: u32) -> Self {
        Self {
            name: name.to_string(),
            code,
            teams: vec![],
        }
    }

    /// The common two-team fixture
    pub fn with_teams(mut self, teams: &[&str]) -> Self {
        self.teams = teams.iter().map(|t| t.to_string()).collect();
        self
    }

    /// Creates the activity, its teams and one registered player per team
    pub async fn build(self, setup: &TestSetup) -> BuiltActivity {
        let activity = setup
            .service
            .create_activity(&self.name, self.code, None)
            .await
            .unwrap();

        let mut team_ids = vec![];
        let mut player_ids = vec![];
        for (index, team_name) in self.teams.iter().enumerate() {
            let team = setup
                .service
                .add_team(&activity.id, team_name)
                .await
                .unwrap();

            let usn = format!("USN-{index}");
            setup
                .service
                .add_player(
                    &activity.id,
                    player(&usn, &format!("Player {index}"), &team.id),
                )
                .await
                .unwrap();

            team_ids.push(team.id);
            player_ids.push(usn);
        }

        BuiltActivity {
            activity_id: activity.id,
            team_ids,
            player_ids,
        }
    }
}
