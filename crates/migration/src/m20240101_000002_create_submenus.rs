//! Create `submenus` table with FK to `menus`.
//!
//! Deleting a menu removes its submenus through `ON DELETE CASCADE`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Submenus::Table)
                    .if_not_exists()
                    .col(string_len(Submenus::Id, 36).primary_key())
                    .col(string_len(Submenus::MenuId, 36).not_null())
                    .col(string_len(Submenus::Title, 255).not_null())
                    .col(text(Submenus::Description).not_null())
                    .col(timestamp_with_time_zone(Submenus::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Submenus::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_submenus_menu")
                            .from(Submenus::Table, Submenus::MenuId)
                            .to(Menus::Table, Menus::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Submenus::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Submenus { Table, Id, MenuId, Title, Description, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Menus { Table, Id }
