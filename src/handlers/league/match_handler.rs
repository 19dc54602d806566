use actix_web::{web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::config::league::LeagueSettings;
use crate::league::LeagueService;
use crate::auth::jwt::Claims;
use crate::models::common::ApiResponse;
use crate::models::match_stats::{CreateMatchRequest, StatCounts};
use crate::services::MatchStatsService;

#[tracing::instrument(
    name = "Create match",
    skip(request, pool, settings, claims),
    fields(match_name = %request.name)
)]
pub async fn create_match(
    league_id: Uuid,
    request: web::Json<CreateMatchRequest>,
    pool: web::Data<PgPool>,
    settings: web::Data<LeagueSettings>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let user_id = claims.require_user_id()?;
    let league_service = LeagueService::new(pool.get_ref().clone(), settings.get_ref().clone());

    let created = league_service.create_match(league_id, user_id, request.into_inner()).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success("Match created successfully", created)))
}

pub async fn get_league_matches(
    league_id: Uuid,
    pool: web::Data<PgPool>,
    settings: web::Data<LeagueSettings>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let user_id = claims.require_user_id()?;
    let league_service = LeagueService::new(pool.get_ref().clone(), settings.get_ref().clone());

    let matches = league_service.list_matches(league_id, user_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Matches retrieved", matches)))
}

/// Submit (or resubmit) a player's stats for a match. League owner only.
#[tracing::instrument(
    name = "Submit player match stats",
    skip(counts, pool, settings, claims),
    fields(username = %claims.username)
)]
pub async fn update_player_match_stats(
    match_id: Uuid,
    player_id: Uuid,
    counts: web::Json<StatCounts>,
    pool: web::Data<PgPool>,
    settings: web::Data<LeagueSettings>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let user_id = claims.require_user_id()?;
    let stats_service = MatchStatsService::new(pool.get_ref().clone());
    let league_service = LeagueService::new(pool.get_ref().clone(), settings.get_ref().clone());

    let league_id = stats_service.league_of_match(match_id).await?;
    league_service.get_league_for_owner(league_id, user_id).await?;

    let result = stats_service
        .update_player_match_stats(match_id, player_id, counts.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Player match stats updated", result)))
}

pub async fn get_match_stats(
    match_id: Uuid,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let user_id = claims.require_user_id()?;
    let stats_service = MatchStatsService::new(pool.get_ref().clone());

    let stats = stats_service.get_match_stats(match_id, user_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Match stats retrieved", stats)))
}
