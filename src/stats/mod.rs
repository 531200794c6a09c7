// Public API
pub use models::{
    BattingLine, BowlingLine, CricketScorecard, InningsView, LeaderboardEntry, LeaderboardLine,
    MatchOutcome, ScoreboardView, TeamScoreLine, UNKNOWN_LABEL,
};

pub mod basketball;
pub mod cricket;
pub mod football;
pub mod other;

mod models;

/// Shared winner pattern: compare each team's primary total in the
/// sport's native unit. Fewer than two teams is undecidable (sentinel,
/// not an error); an equal top total is a tie; otherwise the highest
/// total wins with margin = difference to the runner-up.
pub fn decide_outcome(totals: &[(String, u32)]) -> Option<MatchOutcome> {
    if totals.len() < 2 {
        return None;
    }

    let mut ranked: Vec<&(String, u32)> = totals.iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let (top, runner_up) = (ranked[0], ranked[1]);
    if top.1 == runner_up.1 {
        return Some(MatchOutcome::Tied);
    }
    Some(MatchOutcome::Won {
        team_id: top.0.clone(),
        margin: top.1 - runner_up.1,
    })
}

/// Folds `(id, value)` events into per-id totals, preserving first-seen
/// order so that ranking ties keep insertion order downstream.
pub(crate) fn tally<'a, I>(events: I) -> Vec<(String, u32)>
where
    I: IntoIterator<Item = (&'a str, u32)>,
{
    let mut totals: Vec<(String, u32)> = Vec::new();
    for (id, value) in events {
        match totals.iter_mut().find(|(existing, _)| existing == id) {
            Some((_, total)) => *total += value,
            None => totals.push((id.to_string(), value)),
        }
    }
    totals
}

/// Ranks totals descending and keeps the top `n`. The sort is stable, so
/// equal totals stay in first-seen order (no secondary tie-break).
pub(crate) fn leaderboard(totals: Vec<(String, u32)>, n: usize) -> Vec<LeaderboardEntry> {
    let mut ranked = totals;
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
        .into_iter()
        .take(n)
        .map(|(player_id, value)| LeaderboardEntry { player_id, value })
        .collect()
}
