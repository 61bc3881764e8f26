//! Shared setup for registry integration tests

use db::entity::{mentors, MentorRole};
use migration::{Migrator, MigratorTrait};
use registry::{MenteeRegistry, NewMentor};
use sea_orm::ConnectOptions;
use uuid::Uuid;

/// Fresh registry over an in-memory SQLite store with the schema applied.
/// The pool is capped at one connection so every query sees the same
/// in-memory database.
pub async fn registry() -> MenteeRegistry {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).sqlx_logging(false);
    let conn = sea_orm::Database::connect(opt)
        .await
        .expect("sqlite connect");
    Migrator::up(&conn, None).await.expect("migrations");
    MenteeRegistry::new(conn)
}

pub async fn mentor(registry: &MenteeRegistry, name: &str) -> mentors::Model {
    registry
        .register_mentor(NewMentor {
            name: name.to_string(),
            email: format!("{}@example.edu", Uuid::new_v4()),
            password_hash: "not-a-real-hash".to_string(),
            department: "CSE".to_string(),
            role: MentorRole::Mentor,
        })
        .await
        .expect("register mentor")
}

pub fn mentee(name: &str, roll: &str) -> registry::NewMentee {
    registry::NewMentee {
        name: name.to_string(),
        roll_number: roll.to_string(),
        department: "CSE".to_string(),
        year: "2".to_string(),
    }
}
