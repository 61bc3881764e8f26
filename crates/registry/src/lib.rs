//! The membership consistency model for Menteebook
//!
//! This crate keeps the mentor/mentee/issue reference graph correct across
//! every mutating operation. All multi-record mutations run inside a store
//! transaction; the caller's identity is passed explicitly into every call
//! and ownership is verified before anything is written or deleted.
//!
//! Write-side operations and read-side joins are separate surfaces so the
//! reference-integrity contract and the "populate" paths can be tested
//! independently.

pub mod error;
pub mod issues;
pub mod mentees;
pub mod mentors;
pub mod read;

pub use error::{RegistryError, Result};
pub use mentees::{BulkOutcome, MenteeRecord, NewMentee};
pub use mentors::NewMentor;
pub use read::{DashboardStats, MenteeWithIssues, MentorOverview, MentorWithMentees};

use sea_orm::DatabaseConnection;

/// Stateless request-response logic over the persistent store.
#[derive(Clone)]
pub struct MenteeRegistry {
    conn: DatabaseConnection,
}

impl MenteeRegistry {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub(crate) fn conn(&self) -> &DatabaseConnection {
        &self.conn
    }
}
