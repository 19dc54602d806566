use actix_web::{web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::league::RosterService;
use crate::auth::jwt::Claims;
use crate::models::common::ApiResponse;
use crate::models::roster::AssignPlayerRequest;

pub async fn get_my_roster(
    league_id: Uuid,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let user_id = claims.require_user_id()?;
    let roster_service = RosterService::new(pool.get_ref().clone());

    let slots = roster_service.get_roster(league_id, user_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Roster retrieved", slots)))
}

#[tracing::instrument(
    name = "Assign player to roster slot",
    skip(request, pool, claims),
    fields(
        player_id = %request.player_id,
        username = %claims.username
    )
)]
pub async fn assign_player(
    slot_id: Uuid,
    request: web::Json<AssignPlayerRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let user_id = claims.require_user_id()?;
    let roster_service = RosterService::new(pool.get_ref().clone());

    let slot = roster_service.assign_player(user_id, slot_id, request.player_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Player added to roster", slot)))
}

pub async fn remove_player(
    slot_id: Uuid,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let user_id = claims.require_user_id()?;
    let roster_service = RosterService::new(pool.get_ref().clone());

    let slot = roster_service.clear_slot(user_id, slot_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Player removed from roster", slot)))
}
