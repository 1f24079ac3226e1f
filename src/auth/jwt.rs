use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use tracing::{debug, warn};

use crate::{config::JwtConfig, error::AppError, state::AppState};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user id
    pub iat: usize,
    pub exp: usize,
}

#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    algorithm: Algorithm,
    ttl: Duration,
}

impl JwtKeys {
    pub fn new(cfg: &JwtConfig) -> Self {
        Self {
            encoding: EncodingKey::from_secret(cfg.secret.as_bytes()),
            decoding: DecodingKey::from_secret(cfg.secret.as_bytes()),
            algorithm: cfg.algorithm,
            ttl: Duration::minutes(cfg.ttl_minutes),
        }
    }

    pub fn issue(&self, user_id: i64) -> anyhow::Result<String> {
        let now = OffsetDateTime::now_utc();
        let exp = now + self.ttl;
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.unix_timestamp() as usize,
            exp: exp.unix_timestamp().max(0) as usize,
        };
        let token = encode(&Header::new(self.algorithm), &claims, &self.encoding)?;
        debug!(user_id, "jwt signed");
        Ok(token)
    }

    /// Resolve a token to the user id it was issued for.
    pub fn verify(&self, token: &str) -> Result<i64, AppError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        let data = decode::<Claims>(token, &self.decoding, &validation).map_err(|e| {
            warn!(error = %e, "jwt rejected");
            AppError::Unauthorized("Invalid or expired token".into())
        })?;
        let user_id = data
            .claims
            .sub
            .parse::<i64>()
            .map_err(|_| AppError::Unauthorized("Invalid or expired token".into()))?;
        debug!(user_id, "jwt verified");
        Ok(user_id)
    }
}

impl FromRef<AppState> for JwtKeys {
    fn from_ref(state: &AppState) -> Self {
        JwtKeys::new(&state.config.jwt)
    }
}

/// Authenticated caller, resolved from `Authorization: Bearer <token>`.
pub struct AuthUser(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    JwtKeys: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::Unauthorized("Missing Authorization header".into()))?;

        let token = header
            .strip_prefix("Bearer ")
            .or_else(|| header.strip_prefix("bearer "))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::Unauthorized("Invalid Authorization header".into()))?;

        let user_id = JwtKeys::from_ref(state).verify(token)?;
        Ok(AuthUser(user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(secret: &str, algorithm: Algorithm, ttl_minutes: i64) -> JwtKeys {
        JwtKeys::new(&JwtConfig {
            secret: secret.into(),
            algorithm,
            ttl_minutes,
        })
    }

    #[test]
    fn issued_token_verifies_to_same_user() {
        let keys = keys("dev-secret", Algorithm::HS256, 5);
        let token = keys.issue(42).expect("sign");
        assert_eq!(keys.verify(&token).expect("verify"), 42);
    }

    #[test]
    fn expired_token_is_unauthorized() {
        let keys = keys("dev-secret", Algorithm::HS256, -2);
        let token = keys.issue(7).expect("sign");
        assert!(matches!(keys.verify(&token), Err(AppError::Unauthorized(_))));
    }

    #[test]
    fn token_from_other_secret_is_rejected() {
        let token = keys("secret-a", Algorithm::HS256, 5).issue(1).unwrap();
        let err = keys("secret-b", Algorithm::HS256, 5).verify(&token).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[test]
    fn algorithm_mismatch_is_rejected() {
        let token = keys("same", Algorithm::HS512, 5).issue(1).unwrap();
        let err = keys("same", Algorithm::HS256, 5).verify(&token).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[test]
    fn tampered_or_garbage_token_is_rejected() {
        let keys = keys("dev-secret", Algorithm::HS256, 5);
        let mut token = keys.issue(3).unwrap();
        token.push('x');
        assert!(keys.verify(&token).is_err());
        assert!(keys.verify("not.a.jwt").is_err());
        assert!(keys.verify("").is_err());
    }

    #[test]
    fn non_numeric_subject_is_rejected() {
        let keys = keys("dev-secret", Algorithm::HS256, 5);
        let claims = Claims {
            sub: "alice".into(),
            iat: OffsetDateTime::now_utc().unix_timestamp() as usize,
            exp: (OffsetDateTime::now_utc() + Duration::minutes(5)).unix_timestamp() as usize,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"dev-secret"),
        )
        .unwrap();
        assert!(matches!(keys.verify(&token), Err(AppError::Unauthorized(_))));
    }
}
