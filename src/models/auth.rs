use serde::Deserialize;

/// Response body of `POST /register/` and `POST /login/`.
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user_id: i64,
    pub username: String,
}
