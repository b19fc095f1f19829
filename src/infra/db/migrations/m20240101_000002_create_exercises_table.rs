//! Migration: Create exercises table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Exercises::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Exercises::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Exercises::UserId).uuid().not_null())
                    .col(ColumnDef::new(Exercises::Description).string().not_null())
                    .col(ColumnDef::new(Exercises::Duration).big_integer().not_null())
                    .col(
                        ColumnDef::new(Exercises::Date)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Exercises::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Log queries filter by owner and range over date
        manager
            .create_index(
                Index::create()
                    .name("idx_exercises_user_id_date")
                    .table(Exercises::Table)
                    .col(Exercises::UserId)
                    .col(Exercises::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Exercises::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Exercises {
    Table,
    Id,
    UserId,
    Description,
    Duration,
    Date,
    CreatedAt,
}
