use actix_web::{web, HttpResponse};
use secrecy::ExposeSecret;
use serde_json::json;
use sqlx::PgPool;

use crate::db::helpers::is_unique_violation;
use crate::db::users::insert_user;
use crate::models::user::RegistrationRequest;
use crate::utils::password::hash_password;

#[tracing::instrument(
    name = "Adding a new user",
    // Don't show arguments
    skip(user_form, pool),
    fields(
        username = %user_form.username,
        email = %user_form.email
    )
)]
pub async fn register_user(
    user_form: web::Json<RegistrationRequest>,
    pool: web::Data<PgPool>
) -> HttpResponse {
    let username = user_form.username.trim();
    let email = user_form.email.trim();

    if username.is_empty() || email.is_empty() || user_form.password.expose_secret().is_empty() {
        return HttpResponse::BadRequest().json(json!({
            "success": false,
            "message": "Username, email and password are required"
        }));
    }

    if !email.contains('@') {
        return HttpResponse::BadRequest().json(json!({
            "success": false,
            "message": "Invalid email address"
        }));
    }

    let password_hash = match hash_password(user_form.password.expose_secret()) {
        Ok(hash) => hash,
        Err(e) => {
            tracing::error!("Failed to hash password: {:?}", e);
            return HttpResponse::InternalServerError().finish();
        }
    };

    match insert_user(pool.get_ref(), username, email, &password_hash).await {
        Ok(user_id) => {
            tracing::info!("Registered user {}", user_id);
            HttpResponse::Ok().finish()
        }
        Err(e) if is_unique_violation(&e) => HttpResponse::Conflict().json(json!({
            "success": false,
            "message": "Username or email already taken"
        })),
        Err(e) => {
            tracing::error!("Failed to execute user insert query: {:?}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}
