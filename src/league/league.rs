use sqlx::PgPool;
use uuid::Uuid;

use crate::config::league::LeagueSettings;
use crate::db::helpers::{conflict_on_unique, is_unique_violation, require_record};
use crate::db::{leagues, matches, players, rosters, scores};
use crate::error::AppError;
use crate::league::validation::LeagueValidator;
use crate::models::league::*;
use crate::models::match_stats::{CreateMatchRequest, Match};
use crate::models::player::{CreatePlayerRequest, Player};
use crate::utils::join_code::{generate_join_code, normalize_join_code};

const MAX_JOIN_CODE_ATTEMPTS: usize = 5;

/// Main league service: league lifecycle, membership, players and matches
pub struct LeagueService {
    pool: PgPool,
    settings: LeagueSettings,
    validator: LeagueValidator,
}

impl LeagueService {
    pub fn new(pool: PgPool, settings: LeagueSettings) -> Self {
        Self {
            pool,
            settings,
            validator: LeagueValidator::new(),
        }
    }

    /// Create a league owned by `owner_id`, who also becomes its first member.
    pub async fn create_league(&self, owner_id: Uuid, request: CreateLeagueRequest) -> Result<League, AppError> {
        self.validator.validate_name("League", &request.name)?;
        let name = request.name.trim();

        for attempt in 1..=MAX_JOIN_CODE_ATTEMPTS {
            let join_code = generate_join_code(self.settings.join_code_length);
            let mut tx = self.pool.begin().await?;

            let league = match leagues::insert_league(&mut *tx, name, &join_code, owner_id).await {
                Ok(league) => league,
                Err(e) if is_unique_violation(&e) => {
                    tracing::warn!("Join code collision on attempt {}, regenerating", attempt);
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            self.enroll_member(&mut tx, league.id, owner_id).await?;
            tx.commit().await?;

            tracing::info!("Created league {} ({}) owned by {}", league.id, league.name, owner_id);
            return Ok(league);
        }

        Err(AppError::Conflict("Could not generate a unique join code, please retry".to_string()))
    }

    /// Join the league identified by `join_code`.
    pub async fn join_league(&self, user_id: Uuid, join_code: &str) -> Result<League, AppError> {
        let join_code = normalize_join_code(join_code);
        let mut tx = self.pool.begin().await?;

        let league = require_record(
            leagues::find_league_by_join_code(&mut *tx, &join_code).await?,
            "No league found for this join code",
        )?;

        if leagues::is_member(&mut *tx, league.id, user_id).await? {
            return Err(AppError::Conflict("You are already a member of this league".to_string()));
        }

        self.enroll_member(&mut tx, league.id, user_id).await?;
        tx.commit().await?;

        tracing::info!("User {} joined league {}", user_id, league.id);
        Ok(league)
    }

    /// Membership row, empty roster and a zero score ledger entry.
    async fn enroll_member(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        league_id: Uuid,
        user_id: Uuid,
    ) -> Result<(), AppError> {
        leagues::insert_member(&mut **tx, league_id, user_id)
            .await
            .map_err(|e| conflict_on_unique(e, "You are already a member of this league"))?;
        rosters::create_slots_for_member(
            &mut **tx,
            user_id,
            league_id,
            self.settings.field_slots,
            self.settings.goalkeeper_slots,
        )
        .await?;
        scores::init_user_league_score(&mut **tx, user_id, league_id).await?;
        Ok(())
    }

    /// Fetch a league the caller belongs to.
    pub async fn get_league_for_member(&self, league_id: Uuid, user_id: Uuid) -> Result<League, AppError> {
        let league = require_record(
            leagues::find_league_by_id(&self.pool, league_id).await?,
            "League not found",
        )?;

        if !leagues::is_member(&self.pool, league_id, user_id).await? {
            return Err(AppError::Forbidden("You are not a member of this league".to_string()));
        }

        Ok(league)
    }

    /// Fetch a league the caller owns.
    pub async fn get_league_for_owner(&self, league_id: Uuid, user_id: Uuid) -> Result<League, AppError> {
        let league = require_record(
            leagues::find_league_by_id(&self.pool, league_id).await?,
            "League not found",
        )?;

        if !league.is_owned_by(user_id) {
            return Err(AppError::Forbidden("Only the league owner can do this".to_string()));
        }

        Ok(league)
    }

    pub async fn get_league_details(&self, league_id: Uuid, user_id: Uuid) -> Result<LeagueDetailsResponse, AppError> {
        let league = self.get_league_for_member(league_id, user_id).await?;
        let member_count = leagues::count_members(&self.pool, league_id).await?;
        Ok(LeagueDetailsResponse { league, member_count })
    }

    pub async fn get_standings(&self, league_id: Uuid, user_id: Uuid) -> Result<LeagueStandingsResponse, AppError> {
        let league = self.get_league_for_member(league_id, user_id).await?;
        let standings = scores::find_league_standings(&self.pool, league_id).await?;
        Ok(LeagueStandingsResponse { league, standings })
    }

    pub async fn create_player(
        &self,
        league_id: Uuid,
        user_id: Uuid,
        request: CreatePlayerRequest,
    ) -> Result<Player, AppError> {
        self.validator.validate_name("Player", &request.name)?;
        let league = self.get_league_for_owner(league_id, user_id).await?;
        let player = players::insert_player(&self.pool, league.id, request.name.trim(), request.position).await?;
        tracing::info!("Added player {} ({}) to league {}", player.id, player.position, league.id);
        Ok(player)
    }

    pub async fn list_players(&self, league_id: Uuid, user_id: Uuid) -> Result<Vec<Player>, AppError> {
        self.get_league_for_member(league_id, user_id).await?;
        Ok(players::find_players_by_league(&self.pool, league_id).await?)
    }

    pub async fn create_match(
        &self,
        league_id: Uuid,
        user_id: Uuid,
        request: CreateMatchRequest,
    ) -> Result<Match, AppError> {
        self.validator.validate_name("Match", &request.name)?;
        let league = self.get_league_for_owner(league_id, user_id).await?;
        let created = matches::insert_match(&self.pool, league.id, request.name.trim(), request.match_date).await?;
        tracing::info!("Created match {} in league {}", created.id, league.id);
        Ok(created)
    }

    pub async fn list_matches(&self, league_id: Uuid, user_id: Uuid) -> Result<Vec<Match>, AppError> {
        self.get_league_for_member(league_id, user_id).await?;
        Ok(matches::find_matches_by_league(&self.pool, league_id).await?)
    }
}
