//! Token issuing/verification and password hashing for Menteebook
//!
//! Mentors authenticate with email + password; successful logins receive
//! an HS256 bearer token valid for 7 days carrying {mentor id, role}.

pub mod error;
pub mod password;
pub mod token;

pub use error::AuthError;
pub use password::{hash_password, verify_password};
pub use token::{AuthInfo, Claims, TokenService, TOKEN_VALIDITY};
