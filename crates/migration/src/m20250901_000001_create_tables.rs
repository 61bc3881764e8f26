use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Mentors::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Mentors::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Mentors::Name).string().not_null())
                    .col(ColumnDef::new(Mentors::Email).string().not_null())
                    .col(ColumnDef::new(Mentors::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Mentors::Department).string().not_null())
                    .col(ColumnDef::new(Mentors::Role).string_len(16).not_null())
                    .col(
                        ColumnDef::new(Mentors::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Mentors::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-mentors-email")
                    .table(Mentors::Table)
                    .col(Mentors::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Mentees::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Mentees::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Mentees::MentorId).uuid().not_null())
                    .col(ColumnDef::new(Mentees::Name).string().not_null())
                    .col(ColumnDef::new(Mentees::RollNumber).string().not_null())
                    .col(ColumnDef::new(Mentees::Department).string().not_null())
                    .col(ColumnDef::new(Mentees::Year).string().not_null())
                    .col(
                        ColumnDef::new(Mentees::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Mentees::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-mentees-mentor-id")
                            .from(Mentees::Table, Mentees::MentorId)
                            .to(Mentors::Table, Mentors::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Roll numbers are unique per mentor, not globally.
        manager
            .create_index(
                Index::create()
                    .name("idx-mentees-mentor-roll")
                    .table(Mentees::Table)
                    .col(Mentees::MentorId)
                    .col(Mentees::RollNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Issues::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Issues::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Issues::MenteeId).uuid().not_null())
                    .col(ColumnDef::new(Issues::Description).text().not_null())
                    .col(ColumnDef::new(Issues::Status).string_len(16).not_null())
                    .col(
                        ColumnDef::new(Issues::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Issues::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-issues-mentee-id")
                            .from(Issues::Table, Issues::MenteeId)
                            .to(Mentees::Table, Mentees::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-issues-mentee-id")
                    .table(Issues::Table)
                    .col(Issues::MenteeId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Issues::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Mentees::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Mentors::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Mentors {
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    Department,
    Role,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Mentees {
    Table,
    Id,
    MentorId,
    Name,
    RollNumber,
    Department,
    Year,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Issues {
    Table,
    Id,
    MenteeId,
    Description,
    Status,
    CreatedAt,
    UpdatedAt,
}
