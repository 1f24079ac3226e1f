use anyhow::{bail, Context};
use jsonwebtoken::Algorithm;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub algorithm: Algorithm,
    pub ttl_minutes: i64,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub jwt: JwtConfig,
    pub cors_origin: String,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL is not set")?;
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET").context("JWT_SECRET is not set")?,
            algorithm: parse_algorithm(
                &std::env::var("JWT_ALG").unwrap_or_else(|_| "HS256".into()),
            )?,
            ttl_minutes: validate_ttl(parse_or("JWT_TTL_MINUTES", 60)?)?,
        };

        Ok(Self {
            database_url,
            max_connections: parse_or("DB_MAX_CONNECTIONS", 10)?,
            jwt,
            cors_origin: std::env::var("CORS_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:5173".into()),
            host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: parse_or("APP_PORT", 8080)?,
        })
    }
}

/// One year.
pub const MAX_TTL_MINUTES: i64 = 60 * 24 * 365;

/// Keeps `now + ttl` well inside the range `time` and JWT `exp` can represent.
pub fn validate_ttl(minutes: i64) -> anyhow::Result<i64> {
    if minutes <= 0 {
        bail!("JWT_TTL_MINUTES must be positive");
    }
    if minutes > MAX_TTL_MINUTES {
        bail!("JWT_TTL_MINUTES must be at most {MAX_TTL_MINUTES} (one year)");
    }
    Ok(minutes)
}

/// Tokens are signed with a shared secret, so only the HMAC family is usable.
pub fn parse_algorithm(raw: &str) -> anyhow::Result<Algorithm> {
    match raw.trim().to_ascii_uppercase().as_str() {
        "HS256" => Ok(Algorithm::HS256),
        "HS384" => Ok(Algorithm::HS384),
        "HS512" => Ok(Algorithm::HS512),
        other => bail!("unsupported JWT_ALG {other:?}; expected HS256, HS384 or HS512"),
    }
}

fn parse_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(v) => v.trim().parse::<T>().with_context(|| format!("invalid {key}")),
        Err(_) => Ok(default),
    }
}
