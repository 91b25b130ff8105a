//! Create `menus` table.
//!
//! Root of the catalog hierarchy; submenus and dishes reference it.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Menus::Table)
                    .if_not_exists()
                    .col(string_len(Menus::Id, 36).primary_key())
                    .col(string_len(Menus::Title, 255).not_null())
                    .col(text(Menus::Description).not_null())
                    .col(timestamp_with_time_zone(Menus::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Menus::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Menus::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Menus { Table, Id, Title, Description, CreatedAt, UpdatedAt }
