use serde::{Deserialize, Serialize};

/// A discrete event attributed to one player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRef {
    pub player_id: String,
}

impl PlayerRef {
    pub fn new(player_id: &str) -> Self {
        Self {
            player_id: player_id.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionEntry {
    pub player_id: String,
    pub position: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    Red,
    Yellow,
}

/// Flat multisets of discrete events for one team. There is no innings or
/// period structure; order within each list is append order.
///
/// Own goals are a category of their own: no aggregate subtracts them from
/// this team's total or credits the opposition. That asymmetry follows the
/// recorded product behavior and is a policy question, not a bug here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamFootballStats {
    pub team_id: String,
    #[serde(default)]
    pub goals: Vec<PlayerRef>,
    #[serde(default)]
    pub own_goals: Vec<PlayerRef>,
    #[serde(default)]
    pub assists: Vec<PlayerRef>,
    #[serde(default)]
    pub red_cards: Vec<PlayerRef>,
    #[serde(default)]
    pub yellow_cards: Vec<PlayerRef>,
    #[serde(default)]
    pub positions: Vec<PositionEntry>,
}

impl TeamFootballStats {
    fn new(team_id: &str) -> Self {
        Self {
            team_id: team_id.to_string(),
            goals: vec![],
            own_goals: vec![],
            assists: vec![],
            red_cards: vec![],
            yellow_cards: vec![],
            positions: vec![],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Football {
    #[serde(default)]
    pub stats: Vec<TeamFootballStats>,
}

impl Football {
    /// Per-team entry, created on first use. Unknown team ids are
    /// accepted here and surface as "Unknown" at presentation time.
    fn team_entry(&mut self, team_id: &str) -> &mut TeamFootballStats {
        if let Some(index) = self.stats.iter().position(|s| s.team_id == team_id) {
            return &mut self.stats[index];
        }
        self.stats.push(TeamFootballStats::new(team_id));
        self.stats.last_mut().unwrap()
    }

    pub fn team_stats(&self, team_id: &str) -> Option<&TeamFootballStats> {
        self.stats.iter().find(|s| s.team_id == team_id)
    }

    pub fn record_goal(&mut self, team_id: &str, player_id: &str) {
        self.team_entry(team_id).goals.push(PlayerRef::new(player_id));
    }

    pub fn record_own_goal(&mut self, team_id: &str, player_id: &str) {
        self.team_entry(team_id)
            .own_goals
            .push(PlayerRef::new(player_id));
    }

    pub fn record_assist(&mut self, team_id: &str, player_id: &str) {
        self.team_entry(team_id)
            .assists
            .push(PlayerRef::new(player_id));
    }

    pub fn record_card(&mut self, team_id: &str, player_id: &str, kind: CardKind) {
        let entry = self.team_entry(team_id);
        let cards = match kind {
            CardKind::Red => &mut entry.red_cards,
            CardKind::Yellow => &mut entry.yellow_cards,
        };
        cards.push(PlayerRef::new(player_id));
    }

    pub fn set_position(&mut self, team_id: &str, player_id: &str, position: &str) {
        let entry = self.team_entry(team_id);
        match entry
            .positions
            .iter_mut()
            .find(|p| p.player_id == player_id)
        {
            Some(existing) => existing.position = position.to_string(),
            None => entry.positions.push(PositionEntry {
                player_id: player_id.to_string(),
                position: position.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_event_creates_the_team_entry() {
        let mut game = Football::default();
        game.record_goal("team-a", "p1");
        game.record_goal("team-a", "p2");
        game.record_assist("team-b", "p9");

        assert_eq!(game.stats.len(), 2);
        assert_eq!(game.team_stats("team-a").unwrap().goals.len(), 2);
        assert_eq!(game.team_stats("team-b").unwrap().assists.len(), 1);
    }

    #[test]
    fn cards_land_in_their_own_lists() {
        let mut game = Football::default();
        game.record_card("team-a", "p1", CardKind::Yellow);
        game.record_card("team-a", "p1", CardKind::Yellow);
        game.record_card("team-a", "p2", CardKind::Red);

        let stats = game.team_stats("team-a").unwrap();
        assert_eq!(stats.yellow_cards.len(), 2);
        assert_eq!(stats.red_cards.len(), 1);
    }

    #[test]
    fn own_goals_are_a_separate_category() {
        let mut game = Football::default();
        game.record_goal("team-a", "p1");
        game.record_own_goal("team-a", "p3");

        let stats = game.team_stats("team-a").unwrap();
        assert_eq!(stats.goals.len(), 1);
        assert_eq!(stats.own_goals.len(), 1);
    }

    #[test]
    fn set_position_replaces_existing_assignment() {
        let mut game = Football::default();
        game.set_position("team-a", "p1", "GK");
        game.set_position("team-a", "p1", "CB");

        let stats = game.team_stats("team-a").unwrap();
        assert_eq!(stats.positions.len(), 1);
        assert_eq!(stats.positions[0].position, "CB");
    }
}
