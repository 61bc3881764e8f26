//! Database entities and connection management for Menteebook
//!
//! This crate provides:
//! - Sea-ORM entities for mentors, mentees and issues
//! - A pooled database connection wrapper with retry and health check
//!
//! Can be used against MySQL in production or SQLite in tests.

pub mod database;
pub mod entity;

pub use database::{mask_url, Database};
pub use entity::*;
