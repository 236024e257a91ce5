use axum::{extract::State, http::StatusCode};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, RegisterRequest},
        password::{hash_password, verify_password},
        repo::User,
    },
    error::ApiError,
    extract::JsonOrForm,
    state::AppState,
};

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    JsonOrForm(payload): JsonOrForm<RegisterRequest>,
) -> Result<(StatusCode, &'static str), ApiError> {
    let input = payload.validate().map_err(|e| {
        warn!("register missing fields");
        e
    })?;

    if User::find_by_email(&state.db, &input.email).await?.is_some() {
        warn!(email = %input.email, "email already registered");
        return Err(ApiError::DuplicateEmail);
    }

    let hash = hash_password(&input.password)?;

    // The unique index still decides if two registrations race past the
    // lookup above.
    let user = User::create(&state.db, &input.name, &input.email, &hash).await?;

    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok((StatusCode::CREATED, "Thanks for registering."))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    JsonOrForm(payload): JsonOrForm<LoginRequest>,
) -> Result<&'static str, ApiError> {
    let input = payload.validate().map_err(|e| {
        warn!("login missing fields");
        e
    })?;

    let user = match User::find_by_email(&state.db, &input.email).await? {
        Some(u) => u,
        None => {
            warn!(email = %input.email, "login unknown email");
            return Err(ApiError::NotFound);
        }
    };

    if !verify_password(&input.password, &user.password_hash)? {
        warn!(email = %input.email, user_id = %user.id, "login invalid password");
        return Err(ApiError::InvalidCredentials);
    }

    info!(user_id = %user.id, "user logged in");
    Ok("Thanks for logging in!")
}
