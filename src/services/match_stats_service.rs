use sqlx::PgPool;
use uuid::Uuid;

use crate::db::helpers::require_record;
use crate::db::{leagues, match_stats, matches, players, scoring_rules};
use crate::error::AppError;
use crate::models::match_stats::{PlayerMatchStats, PlayerMatchStatsResult, StatCounts};
use crate::models::scoring::Role;
use crate::scoring::{propagation, PointTotals, PointsCalculator, RuleTable};

/// Records per-match player stats and turns them into fantasy points
#[derive(Debug)]
pub struct MatchStatsService {
    pool: PgPool,
}

impl MatchStatsService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Store the stats of `player_id` in `match_id`, compute both role totals
    /// and credit every roster holding the player.
    ///
    /// Everything happens in one transaction. A resubmission replaces the
    /// stored snapshot and takes back what the earlier one credited, so the
    /// ledger always reflects the latest snapshot credited to the users
    /// holding the player at that time.
    #[tracing::instrument(name = "Update player match stats", skip(self, counts))]
    pub async fn update_player_match_stats(
        &self,
        match_id: Uuid,
        player_id: Uuid,
        counts: StatCounts,
    ) -> Result<PlayerMatchStatsResult, AppError> {
        counts.validate()?;

        let mut tx = self.pool.begin().await?;

        let game = require_record(
            matches::find_match_by_id(&mut *tx, match_id).await?,
            "Match not found",
        )?;
        let player = require_record(
            players::find_player_for_update(&mut *tx, player_id).await?,
            "Player not found",
        )?;

        if player.league_id != game.league_id {
            return Err(AppError::validation("Player does not belong to the match's league"));
        }

        let previous = match_stats::find_player_match_stats(&mut *tx, match_id, player_id)
            .await?
            .map(|stats| PointTotals::new(stats.total_field_points, stats.total_goalkeeper_points))
            .unwrap_or_default();

        let mut rules = Vec::new();
        for role in Role::ALL {
            rules.extend(scoring_rules::find_scoring_rules_by_role(&mut *tx, role).await?);
        }
        let table = RuleTable::new(rules);
        if table.is_empty() {
            tracing::warn!("No scoring rules configured, every total will be 0");
        } else {
            tracing::debug!("Scoring with {} rule(s)", table.len());
        }
        let calculator = PointsCalculator::new(table);
        let totals = calculator.totals(&counts);

        if !totals.is_finite() {
            return Err(AppError::Computation(format!(
                "Non-finite totals for player {} in match {}: {:?}",
                player_id, match_id, totals
            )));
        }

        let stored = match_stats::upsert_player_match_stats(&mut *tx, match_id, player_id, &counts, &totals).await?;

        // Reverses this match's earlier credits, then credits the current holders
        let credits = propagation::propagate(&mut *tx, match_id, player_id, game.league_id, totals).await?;

        let delta = totals.delta_from(&previous);
        if !delta.is_zero() {
            players::add_to_total_points(&mut *tx, player_id, delta.for_role(player.position)).await?;
        }

        tx.commit().await?;

        tracing::info!(
            "Stats for player {} in match {}: field {:.2}, goalkeeper {:.2} (delta {:.2}/{:.2})",
            player_id, match_id, stored.total_field_points, stored.total_goalkeeper_points,
            delta.field, delta.goalkeeper
        );

        Ok(PlayerMatchStatsResult {
            match_id,
            player_id,
            total_field_points: stored.total_field_points,
            total_goalkeeper_points: stored.total_goalkeeper_points,
            credited_users: credits.len(),
        })
    }

    /// League id of a match, for authorization checks in handlers.
    pub async fn league_of_match(&self, match_id: Uuid) -> Result<Uuid, AppError> {
        let game = require_record(
            matches::find_match_by_id(&self.pool, match_id).await?,
            "Match not found",
        )?;
        Ok(game.league_id)
    }

    pub async fn get_match_stats(&self, match_id: Uuid, user_id: Uuid) -> Result<Vec<PlayerMatchStats>, AppError> {
        let league_id = self.league_of_match(match_id).await?;
        if !leagues::is_member(&self.pool, league_id, user_id).await? {
            return Err(AppError::Forbidden("You are not a member of this league".to_string()));
        }
        Ok(match_stats::find_stats_by_match(&self.pool, match_id).await?)
    }
}
