//! Cricket aggregation: pure functions recomputed from the innings log on
//! every call. Nothing here mutates or caches, so arbitrary edits to
//! historical balls can never leave a stale total behind.

use std::fmt;

use crate::sport::{Ball, Cricket, Innings};

use super::{leaderboard, tally, LeaderboardEntry, MatchOutcome};

/// Overs as completed-overs plus spare legal balls. "4.3" means 4 overs
/// and 3 balls. An over has six legal balls, so this is not a decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OversCount {
    pub completed: u32,
    pub balls: u32,
}

impl OversCount {
    pub fn from_legal_balls(legal: u32) -> Self {
        Self {
            completed: legal / 6,
            balls: legal % 6,
        }
    }
}

impl fmt::Display for OversCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.completed, self.balls)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BattingFigures {
    pub runs: u32,
    /// Wides and no-balls bowled at the batsman do not count as faced
    pub balls_faced: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BowlerFigures {
    pub conceded: u32,
    pub legal_balls: u32,
    pub wickets: u32,
}

fn team_balls<'a>(game: &'a Cricket, team_id: &'a str) -> impl Iterator<Item = &'a Ball> {
    game.innings
        .iter()
        .filter(move |innings| innings.batting_team == team_id)
        .flat_map(|innings| innings.overs.iter())
        .flat_map(|over| over.balls.iter())
}

/// Team total = Σ(runs + extraRuns) over every ball of the team's
/// batting innings.
pub fn total_runs(game: &Cricket, team_id: &str) -> u32 {
    team_balls(game, team_id)
        .map(|ball| ball.runs + ball.extra_runs)
        .sum()
}

/// Wickets lost by the batting team. A wicket does not imply the end of
/// an over.
pub fn wicket_count(game: &Cricket, team_id: &str) -> u32 {
    team_balls(game, team_id)
        .filter(|ball| ball.kind.is_wicket())
        .count() as u32
}

/// Overs faced by the batting team, counting legal deliveries only.
pub fn team_overs(game: &Cricket, team_id: &str) -> OversCount {
    let legal = team_balls(game, team_id)
        .filter(|ball| ball.kind.is_legal_delivery())
        .count() as u32;
    OversCount::from_legal_balls(legal)
}

fn innings_balls(innings: &Innings) -> impl Iterator<Item = &Ball> {
    innings.overs.iter().flat_map(|over| over.balls.iter())
}

/// Innings-local total, wickets and overs for scorecard lines.
pub fn innings_total(innings: &Innings) -> u32 {
    innings_balls(innings)
        .map(|ball| ball.runs + ball.extra_runs)
        .sum()
}

pub fn innings_wickets(innings: &Innings) -> u32 {
    innings_balls(innings)
        .filter(|ball| ball.kind.is_wicket())
        .count() as u32
}

pub fn innings_overs(innings: &Innings) -> OversCount {
    let legal = innings_balls(innings)
        .filter(|ball| ball.kind.is_legal_delivery())
        .count() as u32;
    OversCount::from_legal_balls(legal)
}

pub fn batting_figures(innings: &Innings, batsman_id: &str) -> BattingFigures {
    innings
        .overs
        .iter()
        .flat_map(|over| over.balls.iter())
        .filter(|ball| ball.batsman_id == batsman_id)
        .fold(BattingFigures::default(), |mut figures, ball| {
            figures.runs += ball.runs;
            if ball.kind.is_legal_delivery() {
                figures.balls_faced += 1;
            }
            figures
        })
}

/// Runs per hundred balls faced; `None` when no ball has been faced
/// rather than a division by zero.
pub fn strike_rate(innings: &Innings, batsman_id: &str) -> Option<f64> {
    let figures = batting_figures(innings, batsman_id);
    if figures.balls_faced == 0 {
        return None;
    }
    Some(figures.runs as f64 / figures.balls_faced as f64 * 100.0)
}

pub fn bowler_figures(innings: &Innings, bowler_id: &str) -> BowlerFigures {
    innings
        .overs
        .iter()
        .filter(|over| over.bowler_id == bowler_id)
        .flat_map(|over| over.balls.iter())
        .fold(BowlerFigures::default(), |mut figures, ball| {
            figures.conceded += ball.runs + ball.extra_runs;
            if ball.kind.is_legal_delivery() {
                figures.legal_balls += 1;
            }
            if ball.kind.is_wicket() {
                figures.wickets += 1;
            }
            figures
        })
}

/// Runs conceded per over bowled; 0.0 before the first legal delivery.
pub fn economy_rate(innings: &Innings, bowler_id: &str) -> f64 {
    let figures = bowler_figures(innings, bowler_id);
    if figures.legal_balls == 0 {
        return 0.0;
    }
    figures.conceded as f64 / (figures.legal_balls as f64 / 6.0)
}

/// Batsmen ranked by credited runs across all innings; ties keep the
/// order batsmen first appeared in the log.
pub fn top_scorers(game: &Cricket, n: usize) -> Vec<LeaderboardEntry> {
    let totals = tally(
        game.innings
            .iter()
            .flat_map(|innings| innings.overs.iter())
            .flat_map(|over| over.balls.iter())
            .map(|ball| (ball.batsman_id.as_str(), ball.runs)),
    );
    leaderboard(totals, n)
}

/// Batsmen of one innings in appearance order with their figures.
pub fn batting_lines(innings: &Innings) -> Vec<(String, BattingFigures)> {
    let mut batsmen: Vec<String> = Vec::new();
    for over in &innings.overs {
        for ball in &over.balls {
            if !batsmen.iter().any(|id| *id == ball.batsman_id) {
                batsmen.push(ball.batsman_id.clone());
            }
        }
    }
    batsmen
        .into_iter()
        .map(|id| {
            let figures = batting_figures(innings, &id);
            (id, figures)
        })
        .collect()
}

/// Bowlers of one innings in spell order with their figures.
pub fn bowling_lines(innings: &Innings) -> Vec<(String, BowlerFigures)> {
    innings
        .overs
        .iter()
        .map(|over| {
            let figures = bowler_figures(innings, &over.bowler_id);
            (over.bowler_id.clone(), figures)
        })
        .collect()
}

pub fn outcome(game: &Cricket, team_ids: &[String]) -> Option<MatchOutcome> {
    let totals: Vec<(String, u32)> = team_ids
        .iter()
        .map(|id| (id.clone(), total_runs(game, id)))
        .collect();
    super::decide_outcome(&totals)
}
