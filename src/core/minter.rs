use chrono::{DurationRound, TimeDelta};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use tracing::debug;

use super::clock::Clock;
use crate::models::{AppError, MintedToken, MinterConfig, TokenClaims};

/// Traduce el nombre del algoritmo. Solo la familia HMAC sirve con un secreto compartido.
pub fn parse_algorithm(name: &str) -> Result<Algorithm, AppError> {
    match name.trim() {
        "HS256" => Ok(Algorithm::HS256),
        "HS384" => Ok(Algorithm::HS384),
        "HS512" => Ok(Algorithm::HS512),
        other => Err(AppError::unsupported_algorithm(other)),
    }
}

/// Construye los claims a partir de la configuración y el reloj, y los firma
pub fn mint(config: &MinterConfig, clock: &impl Clock) -> Result<MintedToken, AppError> {
    if config.secret.is_empty() {
        return Err(AppError::empty_secret());
    }
    let algorithm = parse_algorithm(&config.algorithm)?;

    // Una sola lectura del reloj para iat y exp
    let now = clock.now();
    let issued_at = now
        .duration_trunc(TimeDelta::seconds(1))
        .unwrap_or(now);
    let expires_at = TimeDelta::try_days(config.validity_days)
        .and_then(|validity| issued_at.checked_add_signed(validity))
        .ok_or_else(|| {
            AppError::SigningFailure(format!(
                "validity window of {} days is out of range",
                config.validity_days
            ))
        })?;

    let identity = &config.identity;
    let claims = TokenClaims {
        sub: identity.subject.clone(),
        email: identity.email.clone(),
        username: identity.username.clone(),
        role: identity.role.clone(),
        iat: issued_at.timestamp(),
        exp: expires_at.timestamp(),
    };
    debug!(
        "Minting {:?} token for '{}' (iat={}, exp={})",
        algorithm, claims.sub, claims.iat, claims.exp
    );

    let token = encode(
        &Header::new(algorithm),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )?;

    Ok(MintedToken {
        token,
        claims,
        issued_at,
        expires_at,
        validity_days: config.validity_days,
    })
}
