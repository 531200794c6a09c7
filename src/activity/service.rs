use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::entity::{Player, Team};
use crate::shared::AppError;
use crate::sport::{BallKind, CardKind, Game};
use crate::stats::{
    self, BattingLine, BowlingLine, CricketScorecard, InningsView, LeaderboardLine,
    MatchOutcome, ScoreboardView, TeamScoreLine, UNKNOWN_LABEL,
};

use super::models::{EventBand, SportsActivity};
use super::repository::ActivityRepository;

/// The admin and viewer facade over the activity store.
///
/// Every mutation is one read-modify-write of the whole document; the
/// admin UI is the single logical writer per activity, so no optimistic
/// locking is attempted. Read entry points recompute every aggregate
/// from the game log on each call.
pub struct ScoreboardService {
    repository: Arc<dyn ActivityRepository>,
}

impl ScoreboardService {
    pub fn new(repository: Arc<dyn ActivityRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn create_activity(
        &self,
        name: &str,
        code: u32,
        start_time: Option<DateTime<Utc>>,
    ) -> Result<SportsActivity, AppError> {
        if name.trim().is_empty() {
            return Err(AppError::Validation(
                "Activity name cannot be empty".to_string(),
            ));
        }
        if EventBand::classify(code) != EventBand::Sports {
            return Err(AppError::Validation(format!(
                "Code {code} is outside the sports band"
            )));
        }

        let activity = SportsActivity::new(
            &Uuid::new_v4().to_string(),
            name.trim(),
            code,
            start_time.unwrap_or_else(Utc::now),
        );
        self.repository.upsert(&activity).await?;

        info!(
            activity_id = %activity.id,
            sport = activity.sport().label(),
            "Activity created"
        );
        Ok(activity)
    }

    pub async fn get_activity(&self, activity_id: &str) -> Result<SportsActivity, AppError> {
        self.repository
            .get(activity_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Activity not found: {activity_id}")))
    }

    pub async fn list_activities(&self) -> Result<Vec<SportsActivity>, AppError> {
        self.repository.list().await
    }

    pub async fn delete_activity(&self, activity_id: &str) -> Result<(), AppError> {
        self.repository.remove(activity_id).await
    }

    /// Marks the activity concluded; status derives from the end time.
    #[instrument(skip(self))]
    pub async fn conclude_activity(
        &self,
        activity_id: &str,
        end_time: Option<DateTime<Utc>>,
    ) -> Result<(), AppError> {
        self.with_activity(activity_id, |activity| {
            activity.end_time = Some(end_time.unwrap_or_else(Utc::now));
            Ok(())
        })
        .await
    }

    // ------------------------------------------------------------------
    // Roster administration
    // ------------------------------------------------------------------

    #[instrument(skip(self))]
    pub async fn add_team(&self, activity_id: &str, name: &str) -> Result<Team, AppError> {
        let team = self
            .with_activity(activity_id, |activity| {
                Ok(activity.add_team(name)?.clone())
            })
            .await?;
        debug!(activity_id, team_id = %team.id, "Team added");
        Ok(team)
    }

    #[instrument(skip(self))]
    pub async fn rename_team(
        &self,
        activity_id: &str,
        team_id: &str,
        name: &str,
    ) -> Result<(), AppError> {
        self.with_activity(activity_id, |activity| {
            activity.rename_team(team_id, name)?;
            Ok(())
        })
        .await
    }

    #[instrument(skip(self, player), fields(usn = player.usn()))]
    pub async fn add_player(&self, activity_id: &str, player: Player) -> Result<(), AppError> {
        self.with_activity(activity_id, |activity| {
            activity.add_player(player)?;
            Ok(())
        })
        .await
    }

    // ------------------------------------------------------------------
    // Cricket mutations
    // ------------------------------------------------------------------

    #[instrument(skip(self))]
    pub async fn start_innings(
        &self,
        activity_id: &str,
        batting_first: &str,
    ) -> Result<usize, AppError> {
        let index = self
            .with_activity(activity_id, |activity| {
                Ok(activity.start_innings(batting_first)?)
            })
            .await?;
        info!(activity_id, innings = index, "Innings opened");
        Ok(index)
    }

    #[instrument(skip(self))]
    pub async fn record_ball(
        &self,
        activity_id: &str,
        innings_index: usize,
        bowler_id: &str,
        batsman_id: &str,
        runs: u32,
        kind: BallKind,
    ) -> Result<(), AppError> {
        self.with_activity(activity_id, |activity| {
            // Dangling references are tolerated in the log and rendered
            // as "Unknown" on read; they still get flagged here.
            if activity.player(batsman_id).is_none() {
                warn!(activity_id, batsman_id, "Ball references unknown batsman");
            }
            if activity.player(bowler_id).is_none() {
                warn!(activity_id, bowler_id, "Ball references unknown bowler");
            }
            activity
                .game
                .as_cricket_mut()?
                .add_ball(innings_index, bowler_id, batsman_id, runs, kind)?;
            Ok(())
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn delete_innings(
        &self,
        activity_id: &str,
        innings_index: usize,
    ) -> Result<(), AppError> {
        self.with_activity(activity_id, |activity| {
            activity.game.as_cricket_mut()?.delete_innings(innings_index)?;
            Ok(())
        })
        .await
    }

    // ------------------------------------------------------------------
    // Football mutations
    // ------------------------------------------------------------------

    #[instrument(skip(self))]
    pub async fn record_goal(
        &self,
        activity_id: &str,
        team_id: &str,
        player_id: &str,
    ) -> Result<(), AppError> {
        self.with_activity(activity_id, |activity| {
            activity.game.as_football_mut()?.record_goal(team_id, player_id);
            Ok(())
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn record_own_goal(
        &self,
        activity_id: &str,
        team_id: &str,
        player_id: &str,
    ) -> Result<(), AppError> {
        self.with_activity(activity_id, |activity| {
            activity
                .game
                .as_football_mut()?
                .record_own_goal(team_id, player_id);
            Ok(())
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn record_assist(
        &self,
        activity_id: &str,
        team_id: &str,
        player_id: &str,
    ) -> Result<(), AppError> {
        self.with_activity(activity_id, |activity| {
            activity
                .game
                .as_football_mut()?
                .record_assist(team_id, player_id);
            Ok(())
        })
        .await
    }

    #[instrument(skip(self, kind))]
    pub async fn record_card(
        &self,
        activity_id: &str,
        team_id: &str,
        player_id: &str,
        kind: CardKind,
    ) -> Result<(), AppError> {
        self.with_activity(activity_id, |activity| {
            activity
                .game
                .as_football_mut()?
                .record_card(team_id, player_id, kind);
            Ok(())
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn set_position(
        &self,
        activity_id: &str,
        team_id: &str,
        player_id: &str,
        position: &str,
    ) -> Result<(), AppError> {
        self.with_activity(activity_id, |activity| {
            activity
                .game
                .as_football_mut()?
                .set_position(team_id, player_id, position);
            Ok(())
        })
        .await
    }

    // ------------------------------------------------------------------
    // Basketball and generic mutations
    // ------------------------------------------------------------------

    #[instrument(skip(self))]
    pub async fn record_basket(
        &self,
        activity_id: &str,
        team_id: &str,
        player_id: &str,
        points: u8,
    ) -> Result<(), AppError> {
        self.with_activity(activity_id, |activity| {
            activity
                .game
                .as_basketball_mut()?
                .record_points(team_id, player_id, points)?;
            Ok(())
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn add_points(
        &self,
        activity_id: &str,
        team_id: &str,
        points: u32,
    ) -> Result<(), AppError> {
        self.with_activity(activity_id, |activity| {
            activity.game.as_other_mut()?.add_points(team_id, points);
            Ok(())
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn remove_points(
        &self,
        activity_id: &str,
        team_id: &str,
        points: u32,
    ) -> Result<(), AppError> {
        self.with_activity(activity_id, |activity| {
            activity.game.as_other_mut()?.remove_points(team_id, points);
            Ok(())
        })
        .await
    }

    // ------------------------------------------------------------------
    // Read entry points
    // ------------------------------------------------------------------

    /// The viewer summary for any sport. Complete and renderable even
    /// over partially populated or inconsistent logs.
    pub async fn scoreboard(&self, activity_id: &str) -> Result<ScoreboardView, AppError> {
        let activity = self.get_activity(activity_id).await?;
        Ok(build_scoreboard(&activity))
    }

    /// The full cricket scorecard with batting and bowling lines.
    pub async fn cricket_scorecard(
        &self,
        activity_id: &str,
    ) -> Result<CricketScorecard, AppError> {
        let activity = self.get_activity(activity_id).await?;
        let game = activity.game.as_cricket()?;

        let innings = game
            .innings
            .iter()
            .map(|innings| build_innings_view(&activity, innings))
            .collect();

        Ok(CricketScorecard {
            activity_id: activity.id.clone(),
            innings,
        })
    }

    async fn with_activity<T>(
        &self,
        activity_id: &str,
        mutate: impl FnOnce(&mut SportsActivity) -> Result<T, AppError>,
    ) -> Result<T, AppError> {
        let mut activity = self.get_activity(activity_id).await?;
        let result = mutate(&mut activity)?;
        self.repository.upsert(&activity).await?;
        Ok(result)
    }
}

fn team_label(activity: &SportsActivity, team_id: &str) -> String {
    activity
        .team(team_id)
        .map(|team| team.name.clone())
        .unwrap_or_else(|| UNKNOWN_LABEL.to_string())
}

fn player_label(activity: &SportsActivity, player_id: &str) -> String {
    activity
        .player(player_id)
        .map(|player| player.name().to_string())
        .unwrap_or_else(|| UNKNOWN_LABEL.to_string())
}

fn resolve_leaders(
    activity: &SportsActivity,
    entries: Vec<stats::LeaderboardEntry>,
) -> Vec<LeaderboardLine> {
    entries
        .into_iter()
        .map(|entry| LeaderboardLine {
            player_name: player_label(activity, &entry.player_id),
            player_id: entry.player_id,
            value: entry.value,
        })
        .collect()
}

const LEADERBOARD_SIZE: usize = 5;

fn build_scoreboard(activity: &SportsActivity) -> ScoreboardView {
    let team_ids = activity.team_ids();

    let (lines, outcome, leaders): (Vec<TeamScoreLine>, Option<MatchOutcome>, _) =
        match &activity.game {
            Game::Cricket(game) => (
                team_ids
                    .iter()
                    .map(|id| TeamScoreLine {
                        team_id: id.clone(),
                        team_name: team_label(activity, id),
                        score: stats::cricket::total_runs(game, id),
                        wickets: Some(stats::cricket::wicket_count(game, id)),
                        overs: Some(stats::cricket::team_overs(game, id).to_string()),
                    })
                    .collect(),
                stats::cricket::outcome(game, &team_ids),
                resolve_leaders(activity, stats::cricket::top_scorers(game, LEADERBOARD_SIZE)),
            ),
            Game::Football(game) => (
                team_ids
                    .iter()
                    .map(|id| TeamScoreLine {
                        team_id: id.clone(),
                        team_name: team_label(activity, id),
                        score: stats::football::total_goals(game, Some(id.as_str())),
                        wickets: None,
                        overs: None,
                    })
                    .collect(),
                stats::football::outcome(game, &team_ids),
                resolve_leaders(
                    activity,
                    stats::football::top_scorers(game, LEADERBOARD_SIZE),
                ),
            ),
            Game::Basketball(game) => (
                team_ids
                    .iter()
                    .map(|id| TeamScoreLine {
                        team_id: id.clone(),
                        team_name: team_label(activity, id),
                        score: stats::basketball::total_points(game, Some(id.as_str())),
                        wickets: None,
                        overs: None,
                    })
                    .collect(),
                stats::basketball::outcome(game, &team_ids),
                resolve_leaders(
                    activity,
                    stats::basketball::top_scorers(game, LEADERBOARD_SIZE),
                ),
            ),
            Game::Other(game) => (
                team_ids
                    .iter()
                    .map(|id| TeamScoreLine {
                        team_id: id.clone(),
                        team_name: team_label(activity, id),
                        score: stats::other::total_points(game, id),
                        wickets: None,
                        overs: None,
                    })
                    .collect(),
                stats::other::outcome(game, &team_ids),
                vec![],
            ),
        };

    ScoreboardView {
        activity_id: activity.id.clone(),
        activity_name: activity.name.clone(),
        sport: activity.sport().label().to_string(),
        status: activity.status(Utc::now()),
        lines,
        outcome,
        leaders,
    }
}

fn build_innings_view(activity: &SportsActivity, innings: &crate::sport::Innings) -> InningsView {
    let batting = stats::cricket::batting_lines(innings)
        .into_iter()
        .map(|(player_id, figures)| BattingLine {
            player_name: player_label(activity, &player_id),
            runs: figures.runs,
            balls_faced: figures.balls_faced,
            // "-" when no legal ball faced, never NaN
            strike_rate: stats::cricket::strike_rate(innings, &player_id)
                .map(|rate| format!("{rate:.2}"))
                .unwrap_or_else(|| "-".to_string()),
            player_id,
        })
        .collect();

    let bowling = stats::cricket::bowling_lines(innings)
        .into_iter()
        .map(|(player_id, figures)| BowlingLine {
            player_name: player_label(activity, &player_id),
            overs: stats::cricket::OversCount::from_legal_balls(figures.legal_balls).to_string(),
            conceded: figures.conceded,
            wickets: figures.wickets,
            economy: format!("{:.2}", stats::cricket::economy_rate(innings, &player_id)),
            player_id,
        })
        .collect();

    InningsView {
        batting_team: team_label(activity, &innings.batting_team),
        bowling_team: team_label(activity, &innings.bowling_team),
        total_runs: stats::cricket::innings_total(innings),
        wickets: stats::cricket::innings_wickets(innings),
        overs: stats::cricket::innings_overs(innings).to_string(),
        batting,
        bowling,
    }
}
