//! Schema migrations for Menteebook
//!
//! The unique indexes created here are the authoritative guard for
//! duplicate emails and duplicate (mentor, roll number) pairs; the
//! application-level checks only exist to produce friendlier errors.

pub use sea_orm_migration::prelude::*;

mod m20250901_000001_create_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250901_000001_create_tables::Migration)]
    }
}
