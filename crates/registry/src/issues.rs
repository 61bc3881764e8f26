//! Issue lifecycle: create, status updates and deletion
//!
//! Issues are always created as pending. Status moves freely between
//! pending and solved; the type system makes any other value unrepresentable
//! on the update path.

use chrono::Utc;
use db::entity::{issues, mentees, IssueStatus};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set, TransactionTrait,
};
use tracing::debug;
use uuid::Uuid;

use crate::error::{RegistryError, Result};
use crate::MenteeRegistry;

impl MenteeRegistry {
    /// Record a new issue against one of the caller's mentees
    pub async fn add_issue(
        &self,
        mentor_id: Uuid,
        mentee_id: Uuid,
        description: &str,
    ) -> Result<issues::Model> {
        let description = description.trim();
        if description.is_empty() {
            return Err(RegistryError::Validation(
                "Issue description is required".to_string(),
            ));
        }

        self.owned_mentee(mentor_id, mentee_id).await?;

        let now = Utc::now();
        let issue = issues::ActiveModel {
            id: Set(Uuid::new_v4()),
            mentee_id: Set(mentee_id),
            description: Set(description.to_string()),
            status: Set(IssueStatus::Pending),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(self.conn())
        .await?;

        debug!("Issue {} added to mentee {}", issue.id, mentee_id);
        Ok(issue)
    }

    /// Set an issue's status (pending <-> solved) and refresh its
    /// updated-at timestamp. The record is untouched on any failure.
    pub async fn update_issue_status(
        &self,
        mentor_id: Uuid,
        issue_id: Uuid,
        status: IssueStatus,
    ) -> Result<issues::Model> {
        let issue = issues::Entity::find_by_id(issue_id)
            .one(self.conn())
            .await?
            .ok_or_else(|| RegistryError::NotFound("Issue not found".to_string()))?;

        self.owned_mentee(mentor_id, issue.mentee_id).await?;

        let mut active: issues::ActiveModel = issue.into();
        active.status = Set(status);
        active.updated_at = Set(Utc::now());
        let updated = active.update(self.conn()).await?;

        debug!("Issue {} status set to {:?}", issue_id, status);
        Ok(updated)
    }

    /// Delete one issue from one of the caller's mentees
    pub async fn delete_issue(
        &self,
        mentor_id: Uuid,
        mentee_id: Uuid,
        issue_id: Uuid,
    ) -> Result<()> {
        let txn = self.conn().begin().await?;

        let mentee = mentees::Entity::find_by_id(mentee_id)
            .filter(mentees::Column::MentorId.eq(mentor_id))
            .one(&txn)
            .await?
            .ok_or_else(|| RegistryError::NotFound("Mentee not found".to_string()))?;

        let deleted = issues::Entity::delete_many()
            .filter(issues::Column::Id.eq(issue_id))
            .filter(issues::Column::MenteeId.eq(mentee.id))
            .exec(&txn)
            .await?;
        if deleted.rows_affected == 0 {
            return Err(RegistryError::NotFound("Issue not found".to_string()));
        }

        txn.commit().await?;

        debug!("Issue {} deleted from mentee {}", issue_id, mentee_id);
        Ok(())
    }

    /// Resolve a mentee and verify the caller owns it
    pub(crate) async fn owned_mentee(
        &self,
        mentor_id: Uuid,
        mentee_id: Uuid,
    ) -> Result<mentees::Model> {
        mentees::Entity::find_by_id(mentee_id)
            .filter(mentees::Column::MentorId.eq(mentor_id))
            .one(self.conn())
            .await?
            .ok_or_else(|| RegistryError::NotFound("Mentee not found".to_string()))
    }
}
