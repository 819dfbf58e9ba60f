//! Bearer-token authentication gate
//!
//! Every route except `/health` is wrapped in [`require_auth`]. The
//! middleware validates an HS256 JWT from the `Authorization` header and
//! attaches the caller as an [`AuthUser`] request extension before the
//! handler (or any of its extractors) runs. Rejected requests never reach
//! the store.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::error::ApiError;

/// Default token lifetime for issued tokens
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 60 * 60 * 24;

/// Authentication failures
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("missing bearer token")]
    MissingToken,

    #[error("invalid token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    #[error("failed to sign token: {0}")]
    Encode(jsonwebtoken::errors::Error),
}

/// JWT claims carried by session tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Username
    pub sub: String,
    /// User profile id
    pub user_id: i32,
    pub iat: i64,
    pub exp: i64,
    pub iss: String,
}

/// Identity of the authenticated caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: i32,
    pub username: String,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.user_id,
            username: claims.sub,
        }
    }
}

/// Signs and verifies session tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("issuer", &self.issuer)
            .finish_non_exhaustive()
    }
}

impl JwtService {
    pub fn new(secret: &str, issuer: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            issuer: issuer.to_owned(),
        }
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    /// Issue a token for `user_id` valid for `ttl_secs` seconds.
    pub fn issue(&self, user_id: i32, username: &str, ttl_secs: i64) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            sub: username.to_owned(),
            user_id,
            iat: now.timestamp(),
            exp: (now + Duration::seconds(ttl_secs)).timestamp(),
            iss: self.issuer.clone(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(AuthError::Encode)
    }

    /// Verify signature, expiry and issuer.
    pub fn validate(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[self.issuer.as_str()]);

        let data = decode::<Claims>(token, &self.decoding_key, &validation)?;
        Ok(data.claims)
    }
}

/// Pull the bearer token out of the `Authorization` header
fn bearer_token(req: &Request) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Axum middleware that rejects unauthenticated requests
pub async fn require_auth(
    State(jwt): State<Arc<JwtService>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(&req).ok_or(AuthError::MissingToken)?;
    let claims = jwt.validate(token)?;

    tracing::debug!(user_id = claims.user_id, path = %req.uri().path(), "authenticated");
    req.extensions_mut().insert(AuthUser::from(claims));

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_token_validates() {
        let jwt = JwtService::new("secret", "skillmatch");
        let token = jwt.issue(42, "ada", 60).unwrap();

        let claims = jwt.validate(&token).unwrap();
        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.sub, "ada");
        assert_eq!(claims.iss, "skillmatch");
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = JwtService::new("secret", "skillmatch").issue(1, "ada", 60).unwrap();
        let other = JwtService::new("other", "skillmatch");
        assert!(matches!(other.validate(&token), Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn wrong_issuer_is_rejected() {
        let token = JwtService::new("secret", "elsewhere").issue(1, "ada", 60).unwrap();
        let jwt = JwtService::new("secret", "skillmatch");
        assert!(jwt.validate(&token).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let jwt = JwtService::new("secret", "skillmatch");
        // Past the default 60s validation leeway
        let token = jwt.issue(1, "ada", -3600).unwrap();
        assert!(jwt.validate(&token).is_err());
    }

    #[test]
    fn bearer_prefix_required() {
        let req = axum::http::Request::builder()
            .header(header::AUTHORIZATION, "Token abc")
            .body(axum::body::Body::empty())
            .unwrap();
        assert!(bearer_token(&req).is_none());

        let req = axum::http::Request::builder()
            .header(header::AUTHORIZATION, "Bearer abc")
            .body(axum::body::Body::empty())
            .unwrap();
        assert_eq!(bearer_token(&req), Some("abc"));
    }
}
