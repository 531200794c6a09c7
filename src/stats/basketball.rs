//! Basketball aggregation. Totals sum the point denomination of each
//! scoring action: a three-pointer contributes three, never one.

use crate::sport::Basketball;

use super::{leaderboard, tally, LeaderboardEntry, MatchOutcome};

pub fn total_points(game: &Basketball, team_id: Option<&str>) -> u32 {
    game.stats
        .iter()
        .filter(|stats| team_id.map_or(true, |id| stats.team_id == id))
        .flat_map(|stats| stats.points.iter())
        .map(|event| event.points as u32)
        .sum()
}

pub fn top_scorers(game: &Basketball, n: usize) -> Vec<LeaderboardEntry> {
    let totals = tally(
        game.stats
            .iter()
            .flat_map(|stats| stats.points.iter())
            .map(|event| (event.player_id.as_str(), event.points as u32)),
    );
    leaderboard(totals, n)
}

pub fn outcome(game: &Basketball, team_ids: &[String]) -> Option<MatchOutcome> {
    let totals: Vec<(String, u32)> = team_ids
        .iter()
        .map(|id| (id.clone(), total_points(game, Some(id))))
        .collect();
    super::decide_outcome(&totals)
}
