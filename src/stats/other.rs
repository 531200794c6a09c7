//! Generic sport aggregation. The running total per team is the stored
//! score itself; only the winner pattern is derived.

use crate::sport::OtherSport;

use super::MatchOutcome;

pub fn total_points(game: &OtherSport, team_id: &str) -> u32 {
    game.points_for(team_id)
}

pub fn outcome(game: &OtherSport, team_ids: &[String]) -> Option<MatchOutcome> {
    let totals: Vec<(String, u32)> = team_ids
        .iter()
        .map(|id| (id.clone(), game.points_for(id)))
        .collect();
    super::decide_outcome(&totals)
}
