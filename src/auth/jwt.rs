use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use tracing::{debug, warn};

use crate::{config::JwtConfig, error::ApiError, state::AppState};

/// Name of the HTTP-only cookie carrying the session token.
pub const AUTH_COOKIE: &str = "auth_token";

/// Session token payload: who the user is and until when.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,
    pub email: String,
    pub iat: usize,
    pub exp: usize,
    pub iss: String,
    pub aud: String,
}

#[derive(Clone)]
pub struct JwtKeys {
    pub encoding: EncodingKey,
    pub decoding: DecodingKey,
    pub issuer: String,
    pub audience: String,
    pub session_ttl: Duration,
}

impl FromRef<AppState> for JwtKeys {
    fn from_ref(state: &AppState) -> Self {
        let JwtConfig {
            secret,
            issuer,
            audience,
            session_ttl_days,
        } = state.config.jwt.clone();
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            issuer,
            audience,
            session_ttl: Duration::days(session_ttl_days),
        }
    }
}

impl JwtKeys {
    pub fn sign(&self, user_id: i64, email: &str) -> anyhow::Result<String> {
        let now = OffsetDateTime::now_utc();
        let exp = now + self.session_ttl;
        let claims = Claims {
            sub: user_id,
            email: email.to_owned(),
            iat: now.unix_timestamp() as usize,
            exp: exp.unix_timestamp() as usize,
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
        };
        let token = encode(&Header::default(), &claims, &self.encoding)?;
        debug!(user_id = %user_id, "session token signed");
        Ok(token)
    }

    pub fn verify(&self, token: &str) -> anyhow::Result<Claims> {
        let mut validation = Validation::default();
        validation.set_audience(std::slice::from_ref(&self.audience));
        validation.set_issuer(std::slice::from_ref(&self.issuer));
        let data = decode::<Claims>(token, &self.decoding, &validation)?;
        debug!(user_id = %data.claims.sub, "session token verified");
        Ok(data.claims)
    }

    /// Builds the session cookie for a freshly signed token. Max-Age matches
    /// the embedded expiry.
    pub fn session_cookie(&self, token: String, secure: bool) -> Cookie<'static> {
        Cookie::build((AUTH_COOKIE, token))
            .http_only(true)
            .path("/")
            .same_site(SameSite::Lax)
            .max_age(self.session_ttl)
            .secure(secure)
            .build()
    }
}

/// The authenticated caller, decoded from the session cookie.
///
/// Handlers that take this extractor reject unauthenticated requests with
/// 401; any verification failure (missing cookie, malformed, expired, wrong
/// signature) resolves to absence of identity, never to a server error.
#[derive(Debug)]
pub struct AuthUser {
    pub user_id: i64,
    pub email: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    JwtKeys: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let keys = JwtKeys::from_ref(state);
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(AUTH_COOKIE)
            .map(|c| c.value().to_owned())
            .ok_or_else(|| ApiError::auth("Unauthorized"))?;

        let claims = keys.verify(&token).map_err(|_| {
            warn!("invalid or expired session token");
            ApiError::auth("Unauthorized")
        })?;

        Ok(AuthUser {
            user_id: claims.sub,
            email: claims.email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_keys() -> JwtKeys {
        let state = AppState::fake();
        JwtKeys::from_ref(&state)
    }

    #[tokio::test]
    async fn sign_and_verify_roundtrip() {
        let keys = make_keys();
        let token = keys.sign(42, "cook@example.com").expect("sign");
        let claims = keys.verify(&token).expect("verify");
        assert_eq!(claims.sub, 42);
        assert_eq!(claims.email, "cook@example.com");
        assert_eq!(claims.iss, "test-issuer");
        assert_eq!(claims.aud, "test-aud");
    }

    #[tokio::test]
    async fn verify_rejects_wrong_signature() {
        let keys = make_keys();
        let other = JwtKeys {
            encoding: EncodingKey::from_secret(b"another-secret"),
            decoding: DecodingKey::from_secret(b"another-secret"),
            issuer: keys.issuer.clone(),
            audience: keys.audience.clone(),
            session_ttl: keys.session_ttl,
        };
        let token = other.sign(7, "a@b.c").expect("sign");
        assert!(keys.verify(&token).is_err());
    }

    #[tokio::test]
    async fn verify_rejects_garbage() {
        let keys = make_keys();
        assert!(keys.verify("not-a-jwt").is_err());
    }

    #[tokio::test]
    async fn session_cookie_attributes() {
        let keys = make_keys();
        let cookie = keys.session_cookie("tok".into(), true);
        assert_eq!(cookie.name(), AUTH_COOKIE);
        assert_eq!(cookie.value(), "tok");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.max_age(), Some(Duration::days(7)));
    }
}
