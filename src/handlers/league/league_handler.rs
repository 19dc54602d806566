use actix_web::{web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::config::league::LeagueSettings;
use crate::league::LeagueService;
use crate::auth::jwt::Claims;
use crate::models::common::ApiResponse;
use crate::models::league::*;

/// Create a new league owned by the caller
#[tracing::instrument(
    name = "Create league",
    skip(request, pool, settings, claims),
    fields(
        league_name = %request.name,
        username = %claims.username
    )
)]
pub async fn create_league(
    request: web::Json<CreateLeagueRequest>,
    pool: web::Data<PgPool>,
    settings: web::Data<LeagueSettings>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let user_id = claims.require_user_id()?;
    let league_service = LeagueService::new(pool.get_ref().clone(), settings.get_ref().clone());

    let league = league_service.create_league(user_id, request.into_inner()).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success("League created successfully", league)))
}

/// Join a league with its join code
#[tracing::instrument(
    name = "Join league",
    skip(request, pool, settings, claims),
    fields(username = %claims.username)
)]
pub async fn join_league(
    request: web::Json<JoinLeagueRequest>,
    pool: web::Data<PgPool>,
    settings: web::Data<LeagueSettings>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let user_id = claims.require_user_id()?;
    let league_service = LeagueService::new(pool.get_ref().clone(), settings.get_ref().clone());

    let league = league_service.join_league(user_id, &request.join_code).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Joined league successfully", league)))
}

pub async fn get_league(
    league_id: Uuid,
    pool: web::Data<PgPool>,
    settings: web::Data<LeagueSettings>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let user_id = claims.require_user_id()?;
    let league_service = LeagueService::new(pool.get_ref().clone(), settings.get_ref().clone());

    let details = league_service.get_league_details(league_id, user_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("League retrieved", details)))
}

/// Leaderboard built from the cumulative score ledger
pub async fn get_league_standings(
    league_id: Uuid,
    pool: web::Data<PgPool>,
    settings: web::Data<LeagueSettings>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let user_id = claims.require_user_id()?;
    let league_service = LeagueService::new(pool.get_ref().clone(), settings.get_ref().clone());

    let standings = league_service.get_standings(league_id, user_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Standings retrieved", standings)))
}
