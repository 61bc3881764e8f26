//! HS256 bearer tokens carrying the mentor identity and role

use chrono::Utc;
use db::MentorRole;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

use crate::error::{AuthError, Result};

/// Tokens are valid for 7 days.
pub const TOKEN_VALIDITY: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub role: MentorRole,
    pub iat: i64,
    pub exp: i64,
}

/// Verification result containing the authenticated identity
#[derive(Debug, Clone, Copy)]
pub struct AuthInfo {
    pub mentor_id: Uuid,
    pub role: MentorRole,
}

/// Issues and verifies bearer tokens with a shared secret
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issue a token for the given mentor, valid for [`TOKEN_VALIDITY`]
    pub fn issue(&self, mentor_id: Uuid, role: MentorRole) -> Result<String> {
        self.issue_with_validity(mentor_id, role, TOKEN_VALIDITY)
    }

    pub fn issue_with_validity(
        &self,
        mentor_id: Uuid,
        role: MentorRole,
        validity: Duration,
    ) -> Result<String> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: mentor_id,
            role,
            iat: now,
            exp: now + validity.as_secs() as i64,
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }

    /// Verify a token and return the identity it carries
    pub fn verify(&self, token: &str) -> Result<AuthInfo> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default()).map_err(
            |e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken(e.to_string()),
            },
        )?;

        Ok(AuthInfo {
            mentor_id: data.claims.sub,
            role: data.claims.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip() {
        let service = TokenService::new("test-secret");
        let mentor_id = Uuid::new_v4();

        let token = service.issue(mentor_id, MentorRole::Mentor).unwrap();
        let info = service.verify(&token).unwrap();

        assert_eq!(info.mentor_id, mentor_id);
        assert_eq!(info.role, MentorRole::Mentor);
    }

    #[test]
    fn test_expired_token_rejected() {
        let service = TokenService::new("test-secret");

        // Expired an hour ago, well past the default validation leeway
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: Uuid::new_v4(),
            role: MentorRole::Admin,
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(&Header::default(), &claims, &service.encoding).unwrap();

        assert!(matches!(service.verify(&token), Err(AuthError::TokenExpired)));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let issuer = TokenService::new("secret-a");
        let verifier = TokenService::new("secret-b");

        let token = issuer.issue(Uuid::new_v4(), MentorRole::Mentor).unwrap();
        assert!(matches!(
            verifier.verify(&token),
            Err(AuthError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_garbage_token_rejected() {
        let service = TokenService::new("test-secret");
        assert!(service.verify("not.a.token").is_err());
    }
}
