//! Authentication route handlers.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::middleware::RequireAuth;
use crate::models::User;
use crate::services::AuthService;
use crate::state::AppState;

/// Registration request body.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Token response returned by register and login.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub user: User,
}

impl TokenResponse {
    fn bearer(access_token: String, user: User) -> Self {
        Self {
            access_token,
            token_type: "bearer",
            user,
        }
    }
}

/// Register a new user and issue a token.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<Json<TokenResponse>> {
    let user = AuthService::new(state.pool())
        .register(&body.email, &body.password, &body.name)
        .await?;

    tracing::info!(user_id = %user.id, "User registered");

    let token = state.tokens().issue(user.id)?;
    Ok(Json(TokenResponse::bearer(token, user)))
}

/// Authenticate a user and issue a token.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<TokenResponse>> {
    let user = AuthService::new(state.pool())
        .login(&body.email, &body.password)
        .await?;

    let token = state.tokens().issue(user.id)?;
    Ok(Json(TokenResponse::bearer(token, user)))
}

/// Return the authenticated user.
pub async fn me(RequireAuth(user): RequireAuth) -> Json<User> {
    Json(user)
}
