//! Mentee lifecycle: create, delete, delete-all and bulk upload
//!
//! Deleting a mentee always deletes its issues, in the same transaction,
//! whether the delete is single or bulk. The mentor's mentee set is the
//! `mentees.mentor_id` relation, so create is a single insert and cannot
//! leave an orphan behind.

use chrono::Utc;
use db::entity::{issues, mentees};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{conflict_on_unique, RegistryError, Result};
use crate::MenteeRegistry;

/// Input for creating a single mentee
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMentee {
    pub name: String,
    pub roll_number: String,
    pub department: String,
    pub year: String,
}

/// One record of a bulk upload (parsed CSV row from the client)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenteeRecord {
    #[serde(default)]
    pub roll_number: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub year: String,
}

/// Result of a bulk upload. `skipped` covers invalid records, in-batch
/// duplicates and pre-existing roll numbers alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BulkOutcome {
    pub added: usize,
    pub skipped: usize,
}

/// Strip the whitespace/quote noise CSV exports tend to carry
fn scrub(value: &str) -> String {
    value
        .trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .trim()
        .to_string()
}

impl MenteeRegistry {
    /// Create a mentee under the given mentor.
    ///
    /// Conflict if the mentor already has a mentee with this roll number;
    /// the `(mentor_id, roll_number)` unique index decides races that slip
    /// past the in-transaction check.
    pub async fn create_mentee(&self, mentor_id: Uuid, new: NewMentee) -> Result<mentees::Model> {
        let name = scrub(&new.name);
        let roll_number = scrub(&new.roll_number);
        let department = scrub(&new.department);
        let year = scrub(&new.year);

        if name.is_empty() || roll_number.is_empty() || department.is_empty() || year.is_empty() {
            return Err(RegistryError::Validation(
                "All fields are required".to_string(),
            ));
        }

        if self.find_mentor(mentor_id).await?.is_none() {
            return Err(RegistryError::NotFound("Mentor not found".to_string()));
        }

        let txn = self.conn().begin().await?;

        let existing = mentees::Entity::find()
            .filter(mentees::Column::MentorId.eq(mentor_id))
            .filter(mentees::Column::RollNumber.eq(roll_number.as_str()))
            .one(&txn)
            .await?;
        if existing.is_some() {
            return Err(RegistryError::Conflict(
                "Mentee with this roll number already exists".to_string(),
            ));
        }

        let now = Utc::now();
        let mentee = mentees::ActiveModel {
            id: Set(Uuid::new_v4()),
            mentor_id: Set(mentor_id),
            name: Set(name),
            roll_number: Set(roll_number),
            department: Set(department),
            year: Set(year),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await
        .map_err(|e| conflict_on_unique(e, "Mentee with this roll number already exists"))?;

        txn.commit().await?;

        debug!("Mentee {} created for mentor {}", mentee.id, mentor_id);
        Ok(mentee)
    }

    /// Delete one mentee and every issue it owns.
    ///
    /// NotFound if the mentee does not exist or belongs to another mentor;
    /// a delete is never a silent no-op.
    pub async fn delete_mentee(&self, mentor_id: Uuid, mentee_id: Uuid) -> Result<()> {
        let txn = self.conn().begin().await?;

        let mentee = mentees::Entity::find_by_id(mentee_id)
            .filter(mentees::Column::MentorId.eq(mentor_id))
            .one(&txn)
            .await?
            .ok_or_else(|| RegistryError::NotFound("Mentee not found".to_string()))?;

        let issues_deleted = issues::Entity::delete_many()
            .filter(issues::Column::MenteeId.eq(mentee.id))
            .exec(&txn)
            .await?
            .rows_affected;

        mentees::Entity::delete_by_id(mentee.id).exec(&txn).await?;

        txn.commit().await?;

        debug!(
            "Mentee {} deleted ({} issues cascaded)",
            mentee_id, issues_deleted
        );
        Ok(())
    }

    /// Delete every mentee owned by this mentor, and every issue any of
    /// them owns. Returns the number of deleted mentees.
    ///
    /// NotFound when the mentor owns no mentees, so an empty bulk delete
    /// is a visible condition rather than a silent success.
    pub async fn delete_all_mentees(&self, mentor_id: Uuid) -> Result<usize> {
        let txn = self.conn().begin().await?;

        let owned = mentees::Entity::find()
            .filter(mentees::Column::MentorId.eq(mentor_id))
            .all(&txn)
            .await?;
        if owned.is_empty() {
            return Err(RegistryError::NotFound(
                "No mentees found to delete".to_string(),
            ));
        }

        let mentee_ids: Vec<Uuid> = owned.iter().map(|m| m.id).collect();

        issues::Entity::delete_many()
            .filter(issues::Column::MenteeId.is_in(mentee_ids.clone()))
            .exec(&txn)
            .await?;

        mentees::Entity::delete_many()
            .filter(mentees::Column::MentorId.eq(mentor_id))
            .exec(&txn)
            .await?;

        txn.commit().await?;

        info!(
            "All {} mentees of mentor {} deleted with their issues",
            mentee_ids.len(),
            mentor_id
        );
        Ok(mentee_ids.len())
    }

    /// Bulk-create mentees from uploaded records.
    ///
    /// Records are scrubbed, records missing any field are skipped, the
    /// batch is deduplicated by roll number (first occurrence wins), and
    /// roll numbers the mentor already has are skipped. Re-submitting the
    /// same batch therefore adds nothing the second time.
    pub async fn bulk_create_mentees(
        &self,
        mentor_id: Uuid,
        records: Vec<MenteeRecord>,
    ) -> Result<BulkOutcome> {
        if self.find_mentor(mentor_id).await?.is_none() {
            return Err(RegistryError::NotFound("Mentor not found".to_string()));
        }

        let total = records.len();
        let mut seen: HashSet<String> = HashSet::new();
        let mut candidates: Vec<NewMentee> = Vec::new();

        for record in records {
            let roll_number = scrub(&record.roll_number);
            let name = scrub(&record.name);
            let department = scrub(&record.department);
            let year = scrub(&record.year);

            if roll_number.is_empty() || name.is_empty() || department.is_empty() || year.is_empty()
            {
                continue;
            }
            if !seen.insert(roll_number.clone()) {
                continue;
            }
            candidates.push(NewMentee {
                name,
                roll_number,
                department,
                year,
            });
        }

        let txn = self.conn().begin().await?;

        let existing: HashSet<String> = if candidates.is_empty() {
            HashSet::new()
        } else {
            mentees::Entity::find()
                .filter(mentees::Column::MentorId.eq(mentor_id))
                .filter(
                    mentees::Column::RollNumber
                        .is_in(candidates.iter().map(|c| c.roll_number.clone())),
                )
                .all(&txn)
                .await?
                .into_iter()
                .map(|m| m.roll_number)
                .collect()
        };

        let now = Utc::now();
        let fresh: Vec<mentees::ActiveModel> = candidates
            .into_iter()
            .filter(|c| !existing.contains(&c.roll_number))
            .map(|c| mentees::ActiveModel {
                id: Set(Uuid::new_v4()),
                mentor_id: Set(mentor_id),
                name: Set(c.name),
                roll_number: Set(c.roll_number),
                department: Set(c.department),
                year: Set(c.year),
                created_at: Set(now),
                updated_at: Set(now),
            })
            .collect();

        let added = fresh.len();
        if added > 0 {
            mentees::Entity::insert_many(fresh)
                .exec(&txn)
                .await
                .map_err(|e| conflict_on_unique(e, "Duplicate roll number in batch"))?;
        }

        txn.commit().await?;

        info!(
            "Bulk upload for mentor {}: {} added, {} skipped",
            mentor_id,
            added,
            total - added
        );
        Ok(BulkOutcome {
            added,
            skipped: total - added,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::scrub;

    #[test]
    fn test_scrub_strips_quotes_and_whitespace() {
        assert_eq!(scrub("  \"21CS01\"  "), "21CS01");
        assert_eq!(scrub("'Ravi' "), "Ravi");
        assert_eq!(scrub("CSE"), "CSE");
        assert_eq!(scrub("  \" \" "), "");
    }
}
