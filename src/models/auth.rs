use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Credentials posted to `/login`. The password never leaves `SecretString`
/// except for bcrypt verification.
#[derive(Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    #[serde(
        serialize_with = "crate::models::user::serialize_secret_string",
        deserialize_with = "crate::models::user::deserialize_secret_string"
    )]
    pub password: SecretString,
}

/// Bearer token handed back on a successful login
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}
