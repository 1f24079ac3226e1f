use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, warn};

use crate::{
    auth::{
        jwt::JwtKeys,
        password::{hash_password, verify_password},
        repo_types::User,
    },
    error::{AppError, AppResult},
    state::AppState,
};

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

pub(crate) fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn invalid_credentials() -> AppError {
    AppError::Unauthorized("Invalid credentials".into())
}

pub async fn register(state: &AppState, email: &str, password: &str) -> AppResult<User> {
    let email = normalize_email(email);
    if !is_valid_email(&email) {
        warn!(email = %email, "invalid email");
        return Err(AppError::Validation("Invalid email".into()));
    }
    if password.is_empty() {
        return Err(AppError::Validation("Password is required".into()));
    }

    if state.users.find_by_email(&email).await?.is_some() {
        warn!(email = %email, "email already registered");
        return Err(AppError::Conflict("Email already registered".into()));
    }

    let hash = hash_password(password)?;
    // The unique index still catches a concurrent registration of the same email.
    let user = state.users.create(&email, &hash).await?;
    info!(user_id = user.id, email = %user.email, created_at = %user.created_at, "user registered");
    Ok(user)
}

/// Check credentials and issue an access token.
pub async fn login(state: &AppState, email: &str, password: &str) -> AppResult<String> {
    let email = normalize_email(email);

    let Some(user) = state.users.find_by_email(&email).await? else {
        warn!(email = %email, "login unknown email");
        return Err(invalid_credentials());
    };

    if !verify_password(password, &user.password_hash)? {
        warn!(user_id = user.id, "login invalid password");
        return Err(invalid_credentials());
    }
    if !user.is_active {
        warn!(user_id = user.id, "login inactive user");
        return Err(invalid_credentials());
    }

    let token = JwtKeys::new(&state.config.jwt).issue(user.id)?;
    info!(user_id = user.id, "user logged in");
    Ok(token)
}
