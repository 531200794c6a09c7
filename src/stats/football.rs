//! Football aggregation over the flat per-team event multisets. Every
//! goal event is worth exactly one; own goals are tallied separately and
//! deliberately left out of both sides' totals (recorded product
//! behavior, see DESIGN.md).

use crate::sport::{CardKind, Football};

use super::{leaderboard, tally, LeaderboardEntry, MatchOutcome};

/// Goal count for one team, or across all teams when `team_id` is `None`.
pub fn total_goals(game: &Football, team_id: Option<&str>) -> u32 {
    game.stats
        .iter()
        .filter(|stats| team_id.map_or(true, |id| stats.team_id == id))
        .map(|stats| stats.goals.len() as u32)
        .sum()
}

pub fn card_count(game: &Football, team_id: &str, kind: CardKind) -> u32 {
    game.team_stats(team_id)
        .map(|stats| match kind {
            CardKind::Red => stats.red_cards.len() as u32,
            CardKind::Yellow => stats.yellow_cards.len() as u32,
        })
        .unwrap_or(0)
}

pub fn top_scorers(game: &Football, n: usize) -> Vec<LeaderboardEntry> {
    let totals = tally(
        game.stats
            .iter()
            .flat_map(|stats| stats.goals.iter())
            .map(|goal| (goal.player_id.as_str(), 1)),
    );
    leaderboard(totals, n)
}

pub fn top_assists(game: &Football, n: usize) -> Vec<LeaderboardEntry> {
    let totals = tally(
        game.stats
            .iter()
            .flat_map(|stats| stats.assists.iter())
            .map(|assist| (assist.player_id.as_str(), 1)),
    );
    leaderboard(totals, n)
}

pub fn outcome(game: &Football, team_ids: &[String]) -> Option<MatchOutcome> {
    let totals: Vec<(String, u32)> = team_ids
        .iter()
        .map(|id| (id.clone(), total_goals(game, Some(id))))
        .collect();
    super::decide_outcome(&totals)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teams() -> Vec<String> {
        vec!["team-a".to_string(), "team-b".to_string()]
    }

    fn sample_game() -> Football {
        let mut game = Football::default();
        game.record_goal("team-a", "p1");
        game.record_goal("team-a", "p1");
        game.record_goal("team-a", "p2");
        game.record_goal("team-b", "p9");
        game.record_assist("team-a", "p2");
        game
    }

    #[test]
    fn goals_count_one_each() {
        let game = sample_game();
        assert_eq!(total_goals(&game, Some("team-a")), 3);
        assert_eq!(total_goals(&game, Some("team-b")), 1);
        assert_eq!(total_goals(&game, None), 4);
    }

    #[test]
    fn own_goals_change_no_total() {
        let mut game = sample_game();
        let before_a = total_goals(&game, Some("team-a"));
        let before_b = total_goals(&game, Some("team-b"));

        game.record_own_goal("team-a", "p3");

        assert_eq!(total_goals(&game, Some("team-a")), before_a);
        assert_eq!(total_goals(&game, Some("team-b")), before_b);
    }

    #[test]
    fn scorers_rank_by_event_count() {
        let game = sample_game();
        let leaders = top_scorers(&game, 5);
        assert_eq!(leaders[0].player_id, "p1");
        assert_eq!(leaders[0].value, 2);
        // p2 and p9 both have one goal: first-seen order holds
        assert_eq!(leaders[1].player_id, "p2");
        assert_eq!(leaders[2].player_id, "p9");
    }

    #[test]
    fn assists_rank_independently_of_goals() {
        let game = sample_game();
        let leaders = top_assists(&game, 5);
        assert_eq!(leaders.len(), 1);
        assert_eq!(leaders[0].player_id, "p2");
    }

    #[test]
    fn cards_tally_per_team() {
        let mut game = Football::default();
        game.record_card("team-a", "p1", CardKind::Yellow);
        game.record_card("team-a", "p2", CardKind::Yellow);
        game.record_card("team-a", "p1", CardKind::Red);

        assert_eq!(card_count(&game, "team-a", CardKind::Yellow), 2);
        assert_eq!(card_count(&game, "team-a", CardKind::Red), 1);
        assert_eq!(card_count(&game, "team-b", CardKind::Red), 0);
    }

    #[test]
    fn winner_by_goals_with_margin() {
        let game = sample_game();
        assert_eq!(
            outcome(&game, &teams()),
            Some(MatchOutcome::Won {
                team_id: "team-a".to_string(),
                margin: 2
            })
        );
    }

    #[test]
    fn scoreless_match_is_a_tie() {
        let game = Football::default();
        assert_eq!(outcome(&game, &teams()), Some(MatchOutcome::Tied));
    }
}
