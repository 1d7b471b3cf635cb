//! Session service for token issuance and cookie construction.

use actix_web::cookie::{time::Duration, Cookie, SameSite};
use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use log::debug;

use crate::config::CONFIG;
use crate::errors::ApiError;
use crate::models::Claims;
use crate::utils::log_sanitizer::mask_email;

/// Name of the HTTP-only session cookie.
pub const SESSION_COOKIE: &str = "token";

/// Sign the caller's identity into a session token.
pub fn issue_token(email: &str) -> Result<String, ApiError> {
    let now = Utc::now().timestamp() as usize;
    let exp = now + (CONFIG.jwt_expiry_days as usize * 86_400);

    let claims = Claims {
        email: email.to_string(),
        exp,
        iat: now,
    };

    debug!("Issuing session token for {}", mask_email(email));

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(CONFIG.jwt_secret.as_bytes()),
    )?;

    Ok(token)
}

/// Build the session cookie carrying the token.
///
/// Cross-site frontends need SameSite=None, which browsers only accept over
/// HTTPS, so both flags follow the environment comparison together.
pub fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token)
        .path("/")
        .http_only(true)
        .secure(CONFIG.is_production())
        .same_site(if CONFIG.is_production() {
            SameSite::None
        } else {
            SameSite::Strict
        })
        .max_age(Duration::days(CONFIG.jwt_expiry_days))
        .finish()
}

/// Build the cookie that clears an existing session.
pub fn expired_session_cookie() -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, "")
        .path("/")
        .http_only(true)
        .secure(CONFIG.is_production())
        .same_site(if CONFIG.is_production() {
            SameSite::None
        } else {
            SameSite::Strict
        })
        .max_age(Duration::ZERO)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{decode, DecodingKey, Validation};

    #[test]
    fn test_token_round_trip() {
        let token = issue_token("user@example.com").unwrap();

        let decoded = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(CONFIG.jwt_secret.as_bytes()),
            &Validation::default(),
        )
        .unwrap();

        assert_eq!(decoded.claims.email, "user@example.com");
        assert_eq!(
            decoded.claims.exp - decoded.claims.iat,
            CONFIG.jwt_expiry_days as usize * 86_400
        );
    }

    #[test]
    fn test_session_cookie_flags() {
        let cookie = session_cookie("tok".to_string());

        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), "tok");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(
            cookie.max_age(),
            Some(Duration::days(CONFIG.jwt_expiry_days))
        );
        // Default test environment is not production
        assert_eq!(cookie.secure(), Some(false));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
    }

    #[test]
    fn test_expired_cookie_clears_session() {
        let cookie = expired_session_cookie();

        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    }
}
