use serde::Serialize;

use crate::activity::ActivityStatus;

/// Label rendered for any player/team id the roster can no longer
/// resolve. Historical logs stay viewable after roster edits.
pub const UNKNOWN_LABEL: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "result", rename_all = "camelCase")]
pub enum MatchOutcome {
    #[serde(rename_all = "camelCase")]
    Won { team_id: String, margin: u32 },
    Tied,
}

/// A ranked total keyed by player id; name resolution happens at the
/// presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub player_id: String,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardLine {
    pub player_id: String,
    pub player_name: String,
    pub value: u32,
}

/// One team's line on the summary scoreboard. `wickets` and `overs` are
/// only present for cricket.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamScoreLine {
    pub team_id: String,
    pub team_name: String,
    pub score: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wickets: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overs: Option<String>,
}

/// The viewer-facing summary for one activity. Always complete and
/// renderable, even over partially populated or inconsistent logs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreboardView {
    pub activity_id: String,
    pub activity_name: String,
    pub sport: String,
    pub status: ActivityStatus,
    pub lines: Vec<TeamScoreLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<MatchOutcome>,
    pub leaders: Vec<LeaderboardLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BattingLine {
    pub player_id: String,
    pub player_name: String,
    pub runs: u32,
    pub balls_faced: u32,
    /// "-" when no legal ball has been faced
    pub strike_rate: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BowlingLine {
    pub player_id: String,
    pub player_name: String,
    /// "O.B" with six legal balls to the over
    pub overs: String,
    pub conceded: u32,
    pub wickets: u32,
    pub economy: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InningsView {
    pub batting_team: String,
    pub bowling_team: String,
    pub total_runs: u32,
    pub wickets: u32,
    pub overs: String,
    pub batting: Vec<BattingLine>,
    pub bowling: Vec<BowlingLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CricketScorecard {
    pub activity_id: String,
    pub innings: Vec<InningsView>,
}
