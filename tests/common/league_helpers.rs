#![allow(dead_code)]
use reqwest::{Client, Method};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::common::utils::{make_authenticated_request, TestApp, TestUser};

fn data(body: &Value) -> &Value {
    &body["data"]
}

fn uuid_of(value: &Value) -> Uuid {
    value.as_str()
        .and_then(|s| Uuid::parse_str(s).ok())
        .expect("Expected a UUID string")
}

/// Creates a league owned by `owner` and returns (league_id, join_code).
pub async fn create_league(app: &TestApp, owner: &TestUser, name: &str) -> (Uuid, String) {
    let response = make_authenticated_request(
        &Client::new(),
        Method::POST,
        &format!("{}/league/leagues", app.address),
        &owner.token,
        Some(json!({ "name": name })),
    ).await;
    assert_eq!(201, response.status().as_u16(), "League creation should succeed");

    let body: Value = response.json().await.expect("Failed to parse league response");
    let league = data(&body);
    (uuid_of(&league["id"]), league["join_code"].as_str().unwrap().to_string())
}

pub async fn join_league(app: &TestApp, user: &TestUser, join_code: &str) -> reqwest::Response {
    make_authenticated_request(
        &Client::new(),
        Method::POST,
        &format!("{}/league/leagues/join", app.address),
        &user.token,
        Some(json!({ "join_code": join_code })),
    ).await
}

pub async fn create_player(app: &TestApp, owner: &TestUser, league_id: Uuid, name: &str, position: &str) -> Uuid {
    let response = make_authenticated_request(
        &Client::new(),
        Method::POST,
        &format!("{}/league/leagues/{}/players", app.address, league_id),
        &owner.token,
        Some(json!({ "name": name, "position": position })),
    ).await;
    assert_eq!(201, response.status().as_u16(), "Player creation should succeed");

    let body: Value = response.json().await.unwrap();
    uuid_of(&data(&body)["id"])
}

pub async fn create_match(app: &TestApp, owner: &TestUser, league_id: Uuid, name: &str) -> Uuid {
    let response = make_authenticated_request(
        &Client::new(),
        Method::POST,
        &format!("{}/league/leagues/{}/matches", app.address, league_id),
        &owner.token,
        Some(json!({ "name": name, "match_date": "2025-03-15T18:00:00Z" })),
    ).await;
    assert_eq!(201, response.status().as_u16(), "Match creation should succeed");

    let body: Value = response.json().await.unwrap();
    uuid_of(&data(&body)["id"])
}

pub async fn get_roster(app: &TestApp, user: &TestUser, league_id: Uuid) -> Vec<Value> {
    let response = make_authenticated_request(
        &Client::new(),
        Method::GET,
        &format!("{}/league/leagues/{}/roster", app.address, league_id),
        &user.token,
        None,
    ).await;
    assert_eq!(200, response.status().as_u16());

    let body: Value = response.json().await.unwrap();
    data(&body).as_array().cloned().unwrap_or_default()
}

/// First empty slot of the given role in the user's roster.
pub async fn free_slot(app: &TestApp, user: &TestUser, league_id: Uuid, role: &str) -> Uuid {
    let roster = get_roster(app, user, league_id).await;
    let slot = roster
        .iter()
        .find(|slot| slot["role"] == role && slot["player_id"].is_null())
        .expect("No free slot of the requested role");
    uuid_of(&slot["id"])
}

pub async fn assign_player(app: &TestApp, user: &TestUser, slot_id: Uuid, player_id: Uuid) -> reqwest::Response {
    make_authenticated_request(
        &Client::new(),
        Method::PUT,
        &format!("{}/league/roster/slots/{}/player", app.address, slot_id),
        &user.token,
        Some(json!({ "player_id": player_id })),
    ).await
}

pub async fn create_scoring_rule(app: &TestApp, admin: &TestUser, stat_name: &str, points: f64, role: &str) -> Uuid {
    let response = make_authenticated_request(
        &Client::new(),
        Method::POST,
        &format!("{}/admin/scoring-rules", app.address),
        &admin.token,
        Some(json!({ "stat_name": stat_name, "points_per_unit": points, "role": role })),
    ).await;
    assert_eq!(201, response.status().as_u16(), "Scoring rule creation should succeed");

    let body: Value = response.json().await.unwrap();
    uuid_of(&data(&body)["id"])
}

pub async fn submit_stats(
    app: &TestApp,
    owner: &TestUser,
    match_id: Uuid,
    player_id: Uuid,
    counts: Value,
) -> reqwest::Response {
    make_authenticated_request(
        &Client::new(),
        Method::PUT,
        &format!("{}/league/matches/{}/players/{}/stats", app.address, match_id, player_id),
        &owner.token,
        Some(counts),
    ).await
}

/// Score of `user_id` in the league standings.
pub async fn standing_score(app: &TestApp, viewer: &TestUser, league_id: Uuid, user_id: Uuid) -> f64 {
    let response = make_authenticated_request(
        &Client::new(),
        Method::GET,
        &format!("{}/league/leagues/{}/standings", app.address, league_id),
        &viewer.token,
        None,
    ).await;
    assert_eq!(200, response.status().as_u16());

    let body: Value = response.json().await.unwrap();
    data(&body)["standings"]
        .as_array()
        .unwrap()
        .iter()
        .find(|entry| uuid_of(&entry["user_id"]) == user_id)
        .and_then(|entry| entry["score"].as_f64())
        .expect("User missing from standings")
}

pub async fn clear_slot(app: &TestApp, user: &TestUser, slot_id: Uuid) -> reqwest::Response {
    make_authenticated_request(
        &Client::new(),
        Method::DELETE,
        &format!("{}/league/roster/slots/{}/player", app.address, slot_id),
        &user.token,
        None,
    ).await
}
