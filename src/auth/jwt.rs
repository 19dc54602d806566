use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::jwt::JwtSettings;
use crate::error::AppError;
use crate::models::user::{User, UserRole, UserStatus};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,  // Subject (user id)
    pub username: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub exp: usize,   // Expiration time (as UTC timestamp)
}

impl Claims {
    pub fn for_user(user: &User, expiration_hours: i64) -> Self {
        let expires_at = Utc::now() + Duration::hours(expiration_hours);
        Self {
            sub: user.id.to_string(),
            username: user.username.clone(),
            role: user.role,
            status: user.status,
            exp: expires_at.timestamp() as usize,
        }
    }

    /// Parse the user ID from the claims subject field.
    /// Returns None if the UUID is invalid.
    pub fn user_id(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.sub).ok()
    }

    pub fn require_user_id(&self) -> Result<Uuid, AppError> {
        self.user_id()
            .ok_or_else(|| AppError::Unauthorized("Invalid user id in token".to_string()))
    }
}

pub fn issue_token(claims: &Claims, jwt_settings: &JwtSettings) -> Result<String, jsonwebtoken::errors::Error> {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(jwt_settings.secret.expose_secret().as_bytes()),
    )
}

pub fn decode_token(token: &str, jwt_settings: &JwtSettings) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_settings.secret.expose_secret().as_bytes()),
        &Validation::new(Algorithm::HS256),
    )?;
    Ok(token_data.claims)
}
