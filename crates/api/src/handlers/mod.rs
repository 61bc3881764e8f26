//! Request handlers, grouped by route prefix

pub mod admin;
pub mod auth;
pub mod mentee;
pub mod mentor;
