use reqwest::{Client, Method};
use serde_json::{json, Value};

mod common;
use common::league_helpers::{
    assign_player, create_league, create_player, free_slot, get_roster, join_league,
};
use common::utils::{create_test_user_and_login, make_authenticated_request, spawn_app};

#[tokio::test]
async fn creating_a_league_enrolls_the_owner_with_an_empty_roster() {
    let test_app = spawn_app().await;
    let owner = create_test_user_and_login(&test_app).await;

    let (league_id, join_code) = create_league(&test_app, &owner, "Sunday League").await;

    assert_eq!(join_code.len(), test_app.league_settings.join_code_length);

    let roster = get_roster(&test_app, &owner, league_id).await;
    let field = roster.iter().filter(|slot| slot["role"] == "field").count();
    let goalkeeper = roster.iter().filter(|slot| slot["role"] == "goalkeeper").count();
    assert_eq!(field, test_app.league_settings.field_slots as usize);
    assert_eq!(goalkeeper, test_app.league_settings.goalkeeper_slots as usize);
    assert!(roster.iter().all(|slot| slot["player_id"].is_null()));
}

#[tokio::test]
async fn joining_by_code_is_case_insensitive_and_only_once() {
    let test_app = spawn_app().await;
    let owner = create_test_user_and_login(&test_app).await;
    let member = create_test_user_and_login(&test_app).await;
    let (league_id, join_code) = create_league(&test_app, &owner, "Join Test").await;

    let response = join_league(&test_app, &member, &format!(" {} ", join_code.to_lowercase())).await;
    assert_eq!(200, response.status().as_u16());

    let again = join_league(&test_app, &member, &join_code).await;
    assert_eq!(409, again.status().as_u16());

    let details = make_authenticated_request(
        &Client::new(),
        Method::GET,
        &format!("{}/league/leagues/{}", test_app.address, league_id),
        &member.token,
        None,
    ).await;
    assert_eq!(200, details.status().as_u16());
    let body: Value = details.json().await.unwrap();
    assert_eq!(body["data"]["member_count"], 2);
}

#[tokio::test]
async fn joining_with_unknown_code_returns_404() {
    let test_app = spawn_app().await;
    let user = create_test_user_and_login(&test_app).await;

    let response = join_league(&test_app, &user, "ZZZZZZZZ").await;

    assert_eq!(404, response.status().as_u16());
}

#[tokio::test]
async fn non_members_cannot_read_a_league() {
    let test_app = spawn_app().await;
    let owner = create_test_user_and_login(&test_app).await;
    let outsider = create_test_user_and_login(&test_app).await;
    let (league_id, _) = create_league(&test_app, &owner, "Private").await;

    let response = make_authenticated_request(
        &Client::new(),
        Method::GET,
        &format!("{}/league/leagues/{}/standings", test_app.address, league_id),
        &outsider.token,
        None,
    ).await;

    assert_eq!(403, response.status().as_u16());
}

#[tokio::test]
async fn only_the_owner_can_add_players() {
    let test_app = spawn_app().await;
    let owner = create_test_user_and_login(&test_app).await;
    let member = create_test_user_and_login(&test_app).await;
    let (league_id, join_code) = create_league(&test_app, &owner, "Owner Only").await;
    join_league(&test_app, &member, &join_code).await;

    let response = make_authenticated_request(
        &Client::new(),
        Method::POST,
        &format!("{}/league/leagues/{}/players", test_app.address, league_id),
        &member.token,
        Some(json!({ "name": "Sneaky Signing", "position": "field" })),
    ).await;

    assert_eq!(403, response.status().as_u16());
}

#[tokio::test]
async fn a_player_fills_at_most_one_slot_per_roster() {
    let test_app = spawn_app().await;
    let owner = create_test_user_and_login(&test_app).await;
    let (league_id, _) = create_league(&test_app, &owner, "Roster Rules").await;
    let player_id = create_player(&test_app, &owner, league_id, "Alex Striker", "field").await;

    let first_slot = free_slot(&test_app, &owner, league_id, "field").await;
    let response = assign_player(&test_app, &owner, first_slot, player_id).await;
    assert_eq!(200, response.status().as_u16());

    let second_slot = free_slot(&test_app, &owner, league_id, "field").await;
    let duplicate = assign_player(&test_app, &owner, second_slot, player_id).await;
    assert_eq!(409, duplicate.status().as_u16());

    // Emptying the slot frees the player again
    let cleared = make_authenticated_request(
        &Client::new(),
        Method::DELETE,
        &format!("{}/league/roster/slots/{}/player", test_app.address, first_slot),
        &owner.token,
        None,
    ).await;
    assert_eq!(200, cleared.status().as_u16());

    let retry = assign_player(&test_app, &owner, second_slot, player_id).await;
    assert_eq!(200, retry.status().as_u16());
}

#[tokio::test]
async fn players_from_another_league_cannot_be_rostered() {
    let test_app = spawn_app().await;
    let owner = create_test_user_and_login(&test_app).await;
    let (league_a, _) = create_league(&test_app, &owner, "League A").await;
    let (league_b, _) = create_league(&test_app, &owner, "League B").await;
    let foreign_player = create_player(&test_app, &owner, league_b, "Away Player", "field").await;

    let slot = free_slot(&test_app, &owner, league_a, "field").await;
    let response = assign_player(&test_app, &owner, slot, foreign_player).await;

    assert_eq!(400, response.status().as_u16());
}

#[tokio::test]
async fn users_cannot_edit_someone_elses_slots() {
    let test_app = spawn_app().await;
    let owner = create_test_user_and_login(&test_app).await;
    let member = create_test_user_and_login(&test_app).await;
    let (league_id, join_code) = create_league(&test_app, &owner, "Hands Off").await;
    join_league(&test_app, &member, &join_code).await;
    let player_id = create_player(&test_app, &owner, league_id, "Sam Keeper", "goalkeeper").await;

    let owners_slot = free_slot(&test_app, &owner, league_id, "goalkeeper").await;
    let response = assign_player(&test_app, &member, owners_slot, player_id).await;

    assert_eq!(403, response.status().as_u16());
}
