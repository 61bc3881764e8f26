//! Mentor account operations

use chrono::Utc;
use db::entity::{mentors, MentorRole};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use tracing::info;
use uuid::Uuid;

use crate::error::{conflict_on_unique, RegistryError, Result};
use crate::MenteeRegistry;

/// Input for mentor registration. The password is hashed by the caller;
/// the registry never sees plaintext credentials.
#[derive(Debug, Clone)]
pub struct NewMentor {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub department: String,
    pub role: MentorRole,
}

impl MenteeRegistry {
    /// Register a new mentor account. Fails with Conflict if the email is
    /// already taken.
    pub async fn register_mentor(&self, new: NewMentor) -> Result<mentors::Model> {
        let name = new.name.trim();
        let email = new.email.trim();
        if name.is_empty() || email.is_empty() || new.password_hash.is_empty() {
            return Err(RegistryError::Validation(
                "All fields are required".to_string(),
            ));
        }

        let existing = mentors::Entity::find()
            .filter(mentors::Column::Email.eq(email))
            .one(self.conn())
            .await?;
        if existing.is_some() {
            return Err(RegistryError::Conflict(
                "Email already registered".to_string(),
            ));
        }

        let now = Utc::now();
        let mentor = mentors::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_string()),
            email: Set(email.to_string()),
            password_hash: Set(new.password_hash),
            department: Set(new.department),
            role: Set(new.role),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(self.conn())
        .await
        .map_err(|e| conflict_on_unique(e, "Email already registered"))?;

        info!("Mentor registered: {}", mentor.email);
        Ok(mentor)
    }

    /// Look up a mentor by email (login path)
    pub async fn find_mentor_by_email(&self, email: &str) -> Result<Option<mentors::Model>> {
        Ok(mentors::Entity::find()
            .filter(mentors::Column::Email.eq(email.trim()))
            .one(self.conn())
            .await?)
    }

    /// Look up a mentor by id
    pub async fn find_mentor(&self, mentor_id: Uuid) -> Result<Option<mentors::Model>> {
        Ok(mentors::Entity::find_by_id(mentor_id)
            .one(self.conn())
            .await?)
    }
}
