//! Sea-ORM entities for the mentor/mentee/issue tables

pub mod issues;
pub mod mentees;
pub mod mentors;

// Re-export entities for convenience
pub use issues::Entity as Issues;
pub use mentees::Entity as Mentees;
pub use mentors::Entity as Mentors;

pub use issues::IssueStatus;
pub use mentors::MentorRole;
