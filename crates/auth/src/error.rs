//! Error types for authentication

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Unknown email or wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Caller's role does not match the requested one
    #[error("Role mismatch")]
    RoleMismatch,

    /// Token expired
    #[error("Token expired")]
    TokenExpired,

    /// Token missing, malformed or signed with the wrong key
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Password hashing failure
    #[error("Password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

pub type Result<T> = std::result::Result<T, AuthError>;
