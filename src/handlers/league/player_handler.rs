use actix_web::{web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::config::league::LeagueSettings;
use crate::league::LeagueService;
use crate::auth::jwt::Claims;
use crate::models::common::ApiResponse;
use crate::models::player::CreatePlayerRequest;

#[tracing::instrument(
    name = "Add player to league",
    skip(request, pool, settings, claims),
    fields(
        player_name = %request.name,
        position = %request.position
    )
)]
pub async fn create_player(
    league_id: Uuid,
    request: web::Json<CreatePlayerRequest>,
    pool: web::Data<PgPool>,
    settings: web::Data<LeagueSettings>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let user_id = claims.require_user_id()?;
    let league_service = LeagueService::new(pool.get_ref().clone(), settings.get_ref().clone());

    let player = league_service.create_player(league_id, user_id, request.into_inner()).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success("Player created successfully", player)))
}

pub async fn get_league_players(
    league_id: Uuid,
    pool: web::Data<PgPool>,
    settings: web::Data<LeagueSettings>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let user_id = claims.require_user_id()?;
    let league_service = LeagueService::new(pool.get_ref().clone(), settings.get_ref().clone());

    let players = league_service.list_players(league_id, user_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Players retrieved", players)))
}
