// src/routes/league.rs
use actix_web::{delete, get, post, put, web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::config::league::LeagueSettings;
use crate::handlers::league::{league_handler, match_handler, player_handler, roster_handler};
use crate::auth::jwt::Claims;
use crate::models::league::{CreateLeagueRequest, JoinLeagueRequest};
use crate::models::match_stats::{CreateMatchRequest, StatCounts};
use crate::models::player::CreatePlayerRequest;
use crate::models::roster::AssignPlayerRequest;

/// Create a new league
#[post("/leagues")]
async fn create_league(
    request: web::Json<CreateLeagueRequest>,
    pool: web::Data<PgPool>,
    settings: web::Data<LeagueSettings>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    league_handler::create_league(request, pool, settings, claims).await
}

/// Join a league by join code
#[post("/leagues/join")]
async fn join_league(
    request: web::Json<JoinLeagueRequest>,
    pool: web::Data<PgPool>,
    settings: web::Data<LeagueSettings>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    league_handler::join_league(request, pool, settings, claims).await
}

#[get("/leagues/{league_id}")]
async fn get_league(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
    settings: web::Data<LeagueSettings>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let league_id = path.into_inner();
    league_handler::get_league(league_id, pool, settings, claims).await
}

/// Get league standings
#[get("/leagues/{league_id}/standings")]
async fn get_league_standings(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
    settings: web::Data<LeagueSettings>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let league_id = path.into_inner();
    league_handler::get_league_standings(league_id, pool, settings, claims).await
}

/// Add a real-world player to the league pool
#[post("/leagues/{league_id}/players")]
async fn create_player(
    path: web::Path<Uuid>,
    request: web::Json<CreatePlayerRequest>,
    pool: web::Data<PgPool>,
    settings: web::Data<LeagueSettings>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let league_id = path.into_inner();
    player_handler::create_player(league_id, request, pool, settings, claims).await
}

#[get("/leagues/{league_id}/players")]
async fn get_league_players(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
    settings: web::Data<LeagueSettings>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let league_id = path.into_inner();
    player_handler::get_league_players(league_id, pool, settings, claims).await
}

/// Schedule a match in the league
#[post("/leagues/{league_id}/matches")]
async fn create_match(
    path: web::Path<Uuid>,
    request: web::Json<CreateMatchRequest>,
    pool: web::Data<PgPool>,
    settings: web::Data<LeagueSettings>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let league_id = path.into_inner();
    match_handler::create_match(league_id, request, pool, settings, claims).await
}

#[get("/leagues/{league_id}/matches")]
async fn get_league_matches(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
    settings: web::Data<LeagueSettings>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let league_id = path.into_inner();
    match_handler::get_league_matches(league_id, pool, settings, claims).await
}

/// Get the caller's roster in a league
#[get("/leagues/{league_id}/roster")]
async fn get_my_roster(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let league_id = path.into_inner();
    roster_handler::get_my_roster(league_id, pool, claims).await
}

/// Put a player into one of the caller's roster slots
#[put("/roster/slots/{slot_id}/player")]
async fn assign_roster_player(
    path: web::Path<Uuid>,
    request: web::Json<AssignPlayerRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let slot_id = path.into_inner();
    roster_handler::assign_player(slot_id, request, pool, claims).await
}

/// Empty one of the caller's roster slots
#[delete("/roster/slots/{slot_id}/player")]
async fn remove_roster_player(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let slot_id = path.into_inner();
    roster_handler::remove_player(slot_id, pool, claims).await
}

/// Submit a player's stats for a match
#[put("/matches/{match_id}/players/{player_id}/stats")]
async fn update_player_match_stats(
    path: web::Path<(Uuid, Uuid)>,
    counts: web::Json<StatCounts>,
    pool: web::Data<PgPool>,
    settings: web::Data<LeagueSettings>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let (match_id, player_id) = path.into_inner();
    match_handler::update_player_match_stats(match_id, player_id, counts, pool, settings, claims).await
}

#[get("/matches/{match_id}/stats")]
async fn get_match_stats(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let match_id = path.into_inner();
    match_handler::get_match_stats(match_id, pool, claims).await
}
