//! Read-side joins ("populate" paths) and dashboard counts
//!
//! These resolve reference ids to embedded records for API responses and
//! reports. They are deliberately separate from the write-side contract.

use db::entity::{issues, mentees, mentors, IssueStatus};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
use serde::Serialize;
use uuid::Uuid;

use crate::error::{RegistryError, Result};
use crate::MenteeRegistry;

/// A mentee with its issues resolved
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenteeWithIssues {
    #[serde(flatten)]
    pub mentee: mentees::Model,
    pub issues: Vec<issues::Model>,
}

/// A mentor with all its mentees and their issues (report input)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorOverview {
    pub mentor: mentors::Model,
    pub mentees: Vec<MenteeWithIssues>,
}

/// Admin view: a mentor with its mentee records
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorWithMentees {
    #[serde(flatten)]
    pub mentor: mentors::Model,
    pub mentees: Vec<mentees::Model>,
}

/// Admin dashboard totals
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_mentors: u64,
    pub total_mentees: u64,
    pub pending_issues: u64,
    pub solved_issues: u64,
}

impl MenteeRegistry {
    /// All mentees owned by a mentor, each with its issues
    pub async fn list_mentees(&self, mentor_id: Uuid) -> Result<Vec<MenteeWithIssues>> {
        let rows = mentees::Entity::find()
            .filter(mentees::Column::MentorId.eq(mentor_id))
            .order_by_asc(mentees::Column::RollNumber)
            .find_with_related(issues::Entity)
            .all(self.conn())
            .await?;

        Ok(rows
            .into_iter()
            .map(|(mentee, issues)| MenteeWithIssues { mentee, issues })
            .collect())
    }

    /// One mentee with its issues
    pub async fn mentee_with_issues(&self, mentee_id: Uuid) -> Result<MenteeWithIssues> {
        let mut rows = mentees::Entity::find_by_id(mentee_id)
            .find_with_related(issues::Entity)
            .all(self.conn())
            .await?;

        match rows.pop() {
            Some((mentee, issues)) => Ok(MenteeWithIssues { mentee, issues }),
            None => Err(RegistryError::NotFound("Mentee not found".to_string())),
        }
    }

    /// A mentor with every owned mentee and their issues
    pub async fn mentor_overview(&self, mentor_id: Uuid) -> Result<MentorOverview> {
        let mentor = self
            .find_mentor(mentor_id)
            .await?
            .ok_or_else(|| RegistryError::NotFound("Mentor not found".to_string()))?;
        let mentees = self.list_mentees(mentor_id).await?;
        Ok(MentorOverview { mentor, mentees })
    }

    /// Admin: every mentor with its mentee records
    pub async fn list_all_mentors(&self) -> Result<Vec<MentorWithMentees>> {
        let rows = mentors::Entity::find()
            .order_by_asc(mentors::Column::Name)
            .find_with_related(mentees::Entity)
            .all(self.conn())
            .await?;

        Ok(rows
            .into_iter()
            .map(|(mentor, mentees)| MentorWithMentees { mentor, mentees })
            .collect())
    }

    /// Admin: every mentee with its issues
    pub async fn list_all_mentees(&self) -> Result<Vec<MenteeWithIssues>> {
        let rows = mentees::Entity::find()
            .order_by_asc(mentees::Column::RollNumber)
            .find_with_related(issues::Entity)
            .all(self.conn())
            .await?;

        Ok(rows
            .into_iter()
            .map(|(mentee, issues)| MenteeWithIssues { mentee, issues })
            .collect())
    }

    /// Admin dashboard totals
    pub async fn dashboard_stats(&self) -> Result<DashboardStats> {
        let total_mentors = mentors::Entity::find().count(self.conn()).await?;
        let total_mentees = mentees::Entity::find().count(self.conn()).await?;
        let pending_issues = issues::Entity::find()
            .filter(issues::Column::Status.eq(IssueStatus::Pending))
            .count(self.conn())
            .await?;
        let solved_issues = issues::Entity::find()
            .filter(issues::Column::Status.eq(IssueStatus::Solved))
            .count(self.conn())
            .await?;

        Ok(DashboardStats {
            total_mentors,
            total_mentees,
            pending_issues,
            solved_issues,
        })
    }
}
