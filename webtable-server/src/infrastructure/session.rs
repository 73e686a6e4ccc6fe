use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub(crate) const SESSION_COOKIE: &str = "session";

#[derive(Debug, Error)]
pub(crate) enum SessionError {
    #[error("session token encode failed")]
    Encode(#[source] jsonwebtoken::errors::Error),
}

#[derive(Serialize, Deserialize, Debug, Clone)]
struct SessionClaims {
    username: String,
    exp: i64,
}

/// Decoded state of the request's session cookie. A missing, tampered or
/// expired cookie is `Anonymous`, never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Session {
    Anonymous,
    Authenticated { username: String },
}

impl Session {
    pub(crate) fn username(&self) -> Option<&str> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated { username } => Some(username),
        }
    }
}

pub(crate) struct SessionCodec {
    secret: String,
    ttl_seconds: i64,
}

impl SessionCodec {
    const DEFAULT_TTL_SECONDS: i64 = 3600;

    pub(crate) fn new(secret: &str, ttl_seconds: i64) -> Self {
        let ttl_seconds = if ttl_seconds > 0 {
            ttl_seconds
        } else {
            Self::DEFAULT_TTL_SECONDS
        };

        SessionCodec {
            secret: secret.into(),
            ttl_seconds,
        }
    }

    pub(crate) fn ttl_seconds(&self) -> i64 {
        self.ttl_seconds
    }

    pub(crate) fn issue(&self, username: &str) -> Result<String, SessionError> {
        let exp = (Utc::now() + Duration::seconds(self.ttl_seconds)).timestamp();

        let claims = SessionClaims {
            username: username.into(),
            exp,
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(SessionError::Encode)
    }

    /// Невалидная или просроченная кука неотличима от её отсутствия.
    pub(crate) fn authenticate(&self, token: &str) -> Session {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        match decode::<SessionClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        ) {
            Ok(data) => Session::Authenticated {
                username: data.claims.username,
            },
            Err(_) => Session::Anonymous,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Session, SessionCodec};

    fn codec() -> SessionCodec {
        SessionCodec::new("0123456789abcdef0123456789abcdef", 3600)
    }

    #[test]
    fn issued_token_round_trips() {
        let codec = codec();
        let token = codec.issue("alice").expect("token must be issued");

        assert_eq!(
            codec.authenticate(&token),
            Session::Authenticated {
                username: "alice".to_string()
            }
        );
    }

    #[test]
    fn tampered_token_is_anonymous() {
        let codec = codec();
        let token = codec.issue("alice").expect("token must be issued");

        let mut tampered = token.clone();
        tampered.pop();
        tampered.push('x');

        assert_eq!(codec.authenticate(&tampered), Session::Anonymous);
    }

    #[test]
    fn token_signed_with_other_secret_is_anonymous() {
        let codec = codec();
        let other = SessionCodec::new("ffffffffffffffffffffffffffffffff", 3600);
        let token = other.issue("alice").expect("token must be issued");

        assert_eq!(codec.authenticate(&token), Session::Anonymous);
    }

    #[test]
    fn expired_token_is_anonymous() {
        let codec = SessionCodec::new("0123456789abcdef0123456789abcdef", 3600);
        let expired = SessionCodec {
            secret: "0123456789abcdef0123456789abcdef".to_string(),
            ttl_seconds: -7200,
        };
        let token = expired.issue("alice").expect("token must be issued");

        assert_eq!(codec.authenticate(&token), Session::Anonymous);
    }

    #[test]
    fn garbage_is_anonymous() {
        let codec = codec();

        assert_eq!(codec.authenticate(""), Session::Anonymous);
        assert_eq!(codec.authenticate("not-a-token"), Session::Anonymous);
    }

    #[test]
    fn non_positive_ttl_falls_back_to_default() {
        let codec = SessionCodec::new("0123456789abcdef0123456789abcdef", 0);
        assert_eq!(codec.ttl_seconds(), 3600);
    }
}
