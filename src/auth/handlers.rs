use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use axum_extra::extract::CookieJar;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, LoginResponse, PublicUser, RegisterRequest, RegisterResponse},
        jwt::JwtKeys,
        password::{hash_password, verify_password},
        repo::User,
    },
    error::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}

fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(mut payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    payload.email = payload.email.trim().to_lowercase();

    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err(ApiError::validation("Invalid email"));
    }
    if payload.password.len() < 8 {
        warn!("password too short");
        return Err(ApiError::validation("Password too short"));
    }

    // Email immutability rests on this uniqueness check; the insert below
    // re-checks atomically for callers that race past it.
    if User::find_by_email(&state.db, &payload.email).await?.is_some() {
        warn!(email = %payload.email, "email already registered");
        return Err(ApiError::conflict("User with this email already exists"));
    }

    let hash = hash_password(&payload.password)?;

    let user = User::create(&state.db, payload.name.trim(), &payload.email, &hash)
        .await?
        .ok_or_else(|| ApiError::conflict("User with this email already exists"))?;

    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".into(),
            user_id: user.id,
        }),
    ))
}

#[instrument(skip(state, jar, payload))]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(mut payload): Json<LoginRequest>,
) -> Result<(CookieJar, Json<LoginResponse>), ApiError> {
    payload.email = payload.email.trim().to_lowercase();

    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err(ApiError::validation("Invalid email"));
    }

    let user = User::find_by_email(&state.db, &payload.email)
        .await?
        .ok_or_else(|| {
            warn!(email = %payload.email, "login unknown email");
            ApiError::auth("Invalid credentials")
        })?;

    if !verify_password(&payload.password, &user.password_hash)? {
        warn!(user_id = %user.id, "login invalid password");
        return Err(ApiError::auth("Invalid credentials"));
    }

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(user.id, &user.email)?;
    let cookie = keys.session_cookie(token, state.config.cookie_secure);

    info!(user_id = %user.id, email = %user.email, "user logged in");
    Ok((
        jar.add(cookie),
        Json(LoginResponse {
            message: "Login successful".into(),
            user: PublicUser {
                id: user.id,
                name: user.name,
                email: user.email,
            },
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_validation_accepts_ordinary_addresses() {
        assert!(is_valid_email("cook@example.com"));
        assert!(is_valid_email("a.b+c@sub.domain.org"));
    }

    #[test]
    fn email_validation_rejects_malformed_addresses() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing@tld"));
        assert!(!is_valid_email("spaces in@example.com"));
    }
}
