//! Create `dishes` table with FKs to `submenus` and `menus`.
//!
//! `menu_id` mirrors the owning submenu's menu so dishes can be scoped by the
//! full path. Price is fixed-point `NUMERIC(10, 2)`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Dishes::Table)
                    .if_not_exists()
                    .col(string_len(Dishes::Id, 36).primary_key())
                    .col(string_len(Dishes::MenuId, 36).not_null())
                    .col(string_len(Dishes::SubmenuId, 36).not_null())
                    .col(string_len(Dishes::Title, 255).not_null())
                    .col(text(Dishes::Description).not_null())
                    .col(decimal_len(Dishes::Price, 10, 2).not_null())
                    .col(timestamp_with_time_zone(Dishes::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Dishes::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dishes_submenu")
                            .from(Dishes::Table, Dishes::SubmenuId)
                            .to(Submenus::Table, Submenus::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dishes_menu")
                            .from(Dishes::Table, Dishes::MenuId)
                            .to(Menus::Table, Menus::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Dishes::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Dishes { Table, Id, MenuId, SubmenuId, Title, Description, Price, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Submenus { Table, Id }

#[derive(DeriveIden)]
enum Menus { Table, Id }
