//! JWT token codec: signed, expiring claims over the server secret

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Claims carried inside an access token
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Username (subject)
    pub sub: String,
    /// Expiration (Unix timestamp seconds)
    pub exp: usize,
    /// Issued at (Unix timestamp seconds)
    pub iat: usize,
}

/// Create an access token bound to `subject = username`.
pub fn create_token(username: &str, secret: &str, ttl_minutes: i64) -> AppResult<String> {
    let now = chrono::Utc::now();
    let claims = Claims {
        sub: username.to_string(),
        exp: (now + chrono::Duration::minutes(ttl_minutes)).timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| {
        tracing::error!("JWT creation failed: {e}");
        AppError::Internal
    })
}

/// Verify signature and expiration, returning the claims.
/// Any failure (bad signature, malformed token, expired) is `Unauthorized`.
pub fn decode_token(token: &str, secret: &str) -> AppResult<Claims> {
    let validation = Validation::default();
    jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| {
        tracing::debug!("JWT validation failed: {e}");
        AppError::unauthorized("Invalid token")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-at-least-32-bytes-long!";

    #[test]
    fn token_round_trips_subject() {
        let token = create_token("alice", SECRET, 30).unwrap();
        let claims = decode_token(&token, SECRET).unwrap();
        assert_eq!(claims.sub, "alice");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = create_token("alice", SECRET, 30).unwrap();
        let err = decode_token(&token, "a-completely-different-secret").unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[test]
    fn expired_token_is_rejected() {
        // Issued 2 hours in the past relative to its own ttl
        let token = create_token("alice", SECRET, -120).unwrap();
        let err = decode_token(&token, SECRET).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[test]
    fn malformed_token_is_rejected() {
        let err = decode_token("not.a.jwt", SECRET).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }
}
