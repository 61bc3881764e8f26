//! Reference-integrity tests across create/delete/cascade paths

mod common;

use common::{mentee, mentor, registry};
use db::entity::{IssueStatus, MentorRole};
use registry::{NewMentor, RegistryError};
use uuid::Uuid;

#[tokio::test]
async fn mentee_and_issue_lifecycle() {
    // Mentor registers, adds a mentee, logs an issue, resolves it,
    // then deletes the mentee.
    let reg = registry().await;
    let asha = mentor(&reg, "Asha").await;

    let ravi = reg
        .create_mentee(asha.id, mentee("Ravi", "21CS01"))
        .await
        .unwrap();
    assert_eq!(ravi.mentor_id, asha.id);

    let issue = reg
        .add_issue(asha.id, ravi.id, "missed midterm")
        .await
        .unwrap();
    assert_eq!(issue.status, IssueStatus::Pending);

    let solved = reg
        .update_issue_status(asha.id, issue.id, IssueStatus::Solved)
        .await
        .unwrap();
    assert_eq!(solved.status, IssueStatus::Solved);
    assert!(solved.updated_at >= solved.created_at);

    reg.delete_mentee(asha.id, ravi.id).await.unwrap();
    assert!(reg.list_mentees(asha.id).await.unwrap().is_empty());

    // The mentee's issues went with it
    let stats = reg.dashboard_stats().await.unwrap();
    assert_eq!(stats.total_mentees, 0);
    assert_eq!(stats.pending_issues + stats.solved_issues, 0);
}

#[tokio::test]
async fn duplicate_roll_number_conflicts_without_writing() {
    let reg = registry().await;
    let m = mentor(&reg, "Asha").await;

    reg.create_mentee(m.id, mentee("Ravi", "21CS02")).await.unwrap();
    let err = reg
        .create_mentee(m.id, mentee("Raj", "21CS02"))
        .await
        .unwrap_err();
    assert!(matches!(err, RegistryError::Conflict(_)));

    let mentees = reg.list_mentees(m.id).await.unwrap();
    assert_eq!(mentees.len(), 1);
    assert_eq!(mentees[0].mentee.name, "Ravi");
}

#[tokio::test]
async fn roll_numbers_are_scoped_per_mentor() {
    let reg = registry().await;
    let a = mentor(&reg, "Asha").await;
    let b = mentor(&reg, "Bala").await;

    reg.create_mentee(a.id, mentee("Ravi", "21CS03")).await.unwrap();
    // Same roll number under a different mentor is fine
    reg.create_mentee(b.id, mentee("Ravi", "21CS03")).await.unwrap();

    assert_eq!(reg.list_mentees(a.id).await.unwrap().len(), 1);
    assert_eq!(reg.list_mentees(b.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn delete_all_cascades_to_issues() {
    let reg = registry().await;
    let m = mentor(&reg, "Asha").await;
    let other = mentor(&reg, "Bala").await;

    let m1 = reg.create_mentee(m.id, mentee("Ravi", "21CS04")).await.unwrap();
    let m2 = reg.create_mentee(m.id, mentee("Raj", "21CS05")).await.unwrap();
    reg.add_issue(m.id, m1.id, "late submission").await.unwrap();
    reg.add_issue(m.id, m2.id, "attendance shortfall").await.unwrap();

    // An unrelated mentor's records must survive
    let keep = reg
        .create_mentee(other.id, mentee("Kavya", "21EC01"))
        .await
        .unwrap();
    reg.add_issue(other.id, keep.id, "fee pending").await.unwrap();

    let deleted = reg.delete_all_mentees(m.id).await.unwrap();
    assert_eq!(deleted, 2);
    assert!(reg.list_mentees(m.id).await.unwrap().is_empty());

    let stats = reg.dashboard_stats().await.unwrap();
    assert_eq!(stats.total_mentees, 1);
    assert_eq!(stats.pending_issues, 1);
}

#[tokio::test]
async fn delete_all_with_no_mentees_is_not_found() {
    let reg = registry().await;
    let m = mentor(&reg, "Asha").await;

    let err = reg.delete_all_mentees(m.id).await.unwrap_err();
    assert!(matches!(err, RegistryError::NotFound(_)));
}

#[tokio::test]
async fn single_delete_cascades_to_issues() {
    let reg = registry().await;
    let m = mentor(&reg, "Asha").await;

    let mentee_rec = reg.create_mentee(m.id, mentee("Ravi", "21CS06")).await.unwrap();
    reg.add_issue(m.id, mentee_rec.id, "missed lab").await.unwrap();
    reg.add_issue(m.id, mentee_rec.id, "missed viva").await.unwrap();

    reg.delete_mentee(m.id, mentee_rec.id).await.unwrap();

    let stats = reg.dashboard_stats().await.unwrap();
    assert_eq!(stats.pending_issues, 0);
    assert_eq!(stats.solved_issues, 0);
}

#[tokio::test]
async fn deleting_unknown_or_foreign_mentee_is_not_found() {
    let reg = registry().await;
    let a = mentor(&reg, "Asha").await;
    let b = mentor(&reg, "Bala").await;

    let err = reg.delete_mentee(a.id, Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, RegistryError::NotFound(_)));

    let theirs = reg.create_mentee(b.id, mentee("Ravi", "21CS07")).await.unwrap();
    let err = reg.delete_mentee(a.id, theirs.id).await.unwrap_err();
    assert!(matches!(err, RegistryError::NotFound(_)));

    // The foreign mentee is untouched
    assert_eq!(reg.list_mentees(b.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn issue_status_toggles_both_ways() {
    let reg = registry().await;
    let m = mentor(&reg, "Asha").await;
    let mentee_rec = reg.create_mentee(m.id, mentee("Ravi", "21CS08")).await.unwrap();
    let issue = reg.add_issue(m.id, mentee_rec.id, "missed midterm").await.unwrap();

    let solved = reg
        .update_issue_status(m.id, issue.id, IssueStatus::Solved)
        .await
        .unwrap();
    assert_eq!(solved.status, IssueStatus::Solved);

    let reopened = reg
        .update_issue_status(m.id, issue.id, IssueStatus::Pending)
        .await
        .unwrap();
    assert_eq!(reopened.status, IssueStatus::Pending);
}

#[tokio::test]
async fn issue_operations_check_ownership() {
    let reg = registry().await;
    let a = mentor(&reg, "Asha").await;
    let b = mentor(&reg, "Bala").await;
    let theirs = reg.create_mentee(b.id, mentee("Ravi", "21CS09")).await.unwrap();
    let issue = reg.add_issue(b.id, theirs.id, "missed midterm").await.unwrap();

    let err = reg
        .update_issue_status(a.id, issue.id, IssueStatus::Solved)
        .await
        .unwrap_err();
    assert!(matches!(err, RegistryError::NotFound(_)));

    let err = reg
        .delete_issue(a.id, theirs.id, issue.id)
        .await
        .unwrap_err();
    assert!(matches!(err, RegistryError::NotFound(_)));

    let err = reg.add_issue(a.id, theirs.id, "not mine").await.unwrap_err();
    assert!(matches!(err, RegistryError::NotFound(_)));
}

#[tokio::test]
async fn empty_fields_are_rejected() {
    let reg = registry().await;
    let m = mentor(&reg, "Asha").await;

    let err = reg
        .create_mentee(m.id, mentee("", "21CS10"))
        .await
        .unwrap_err();
    assert!(matches!(err, RegistryError::Validation(_)));

    let mentee_rec = reg.create_mentee(m.id, mentee("Ravi", "21CS10")).await.unwrap();
    let err = reg.add_issue(m.id, mentee_rec.id, "   ").await.unwrap_err();
    assert!(matches!(err, RegistryError::Validation(_)));
}

#[tokio::test]
async fn duplicate_email_conflicts() {
    let reg = registry().await;
    let new = |email: &str| NewMentor {
        name: "Asha".to_string(),
        email: email.to_string(),
        password_hash: "hash".to_string(),
        department: "CSE".to_string(),
        role: MentorRole::Mentor,
    };

    reg.register_mentor(new("asha@example.edu")).await.unwrap();
    let err = reg
        .register_mentor(new("asha@example.edu"))
        .await
        .unwrap_err();
    assert!(matches!(err, RegistryError::Conflict(_)));
}

#[tokio::test]
async fn references_stay_bidirectionally_consistent() {
    // After an arbitrary mix of creates and deletes, every mentee listed
    // under a mentor points back at that mentor, and every issue listed
    // under a mentee points back at that mentee.
    let reg = registry().await;
    let a = mentor(&reg, "Asha").await;
    let b = mentor(&reg, "Bala").await;

    for (owner, roll) in [(a.id, "21CS11"), (a.id, "21CS12"), (b.id, "21CS11")] {
        let rec = reg.create_mentee(owner, mentee("S", roll)).await.unwrap();
        reg.add_issue(owner, rec.id, "check in").await.unwrap();
    }
    let first = reg.list_mentees(a.id).await.unwrap()[0].mentee.id;
    reg.delete_mentee(a.id, first).await.unwrap();

    for owner in [a.id, b.id] {
        for entry in reg.list_mentees(owner).await.unwrap() {
            assert_eq!(entry.mentee.mentor_id, owner);
            for issue in &entry.issues {
                assert_eq!(issue.mentee_id, entry.mentee.id);
            }
        }
    }
}
