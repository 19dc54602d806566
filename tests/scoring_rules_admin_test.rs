use reqwest::{Client, Method};
use serde_json::{json, Value};

mod common;
use common::league_helpers::create_scoring_rule;
use common::utils::{
    create_admin_user_and_login, create_test_user_and_login, make_authenticated_request, spawn_app,
};

#[tokio::test]
async fn admin_can_create_list_and_delete_rules() {
    let test_app = spawn_app().await;
    let admin = create_admin_user_and_login(&test_app).await;
    let client = Client::new();

    let goal_rule = create_scoring_rule(&test_app, &admin, "goals_scored", 5.0, "field").await;
    create_scoring_rule(&test_app, &admin, "saves", 1.5, "goalkeeper").await;

    let response = make_authenticated_request(
        &client,
        Method::GET,
        &format!("{}/admin/scoring-rules?role=field", test_app.address),
        &admin.token,
        None,
    ).await;
    assert_eq!(200, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    let rules = body["data"].as_array().unwrap();
    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0]["stat_name"], "goals_scored");
    assert_eq!(rules[0]["points_per_unit"], 5.0);

    let delete = make_authenticated_request(
        &client,
        Method::DELETE,
        &format!("{}/admin/scoring-rules/{}", test_app.address, goal_rule),
        &admin.token,
        None,
    ).await;
    assert_eq!(200, delete.status().as_u16());

    let delete_again = make_authenticated_request(
        &client,
        Method::DELETE,
        &format!("{}/admin/scoring-rules/{}", test_app.address, goal_rule),
        &admin.token,
        None,
    ).await;
    assert_eq!(404, delete_again.status().as_u16());

    let all = make_authenticated_request(
        &client,
        Method::GET,
        &format!("{}/admin/scoring-rules", test_app.address),
        &admin.token,
        None,
    ).await;
    let body: Value = all.json().await.unwrap();
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn unknown_statistic_names_are_rejected() {
    let test_app = spawn_app().await;
    let admin = create_admin_user_and_login(&test_app).await;

    let response = make_authenticated_request(
        &Client::new(),
        Method::POST,
        &format!("{}/admin/scoring-rules", test_app.address),
        &admin.token,
        Some(json!({ "stat_name": "own_goals", "points_per_unit": -2.0, "role": "field" })),
    ).await;

    assert_eq!(400, response.status().as_u16());
}

#[tokio::test]
async fn unknown_roles_are_rejected() {
    let test_app = spawn_app().await;
    let admin = create_admin_user_and_login(&test_app).await;

    let response = make_authenticated_request(
        &Client::new(),
        Method::POST,
        &format!("{}/admin/scoring-rules", test_app.address),
        &admin.token,
        Some(json!({ "stat_name": "saves", "points_per_unit": 1.0, "role": "striker" })),
    ).await;

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn regular_users_cannot_manage_rules() {
    let test_app = spawn_app().await;
    let user = create_test_user_and_login(&test_app).await;

    let response = make_authenticated_request(
        &Client::new(),
        Method::POST,
        &format!("{}/admin/scoring-rules", test_app.address),
        &user.token,
        Some(json!({ "stat_name": "saves", "points_per_unit": 1.0, "role": "goalkeeper" })),
    ).await;

    assert_eq!(403, response.status().as_u16());
}
