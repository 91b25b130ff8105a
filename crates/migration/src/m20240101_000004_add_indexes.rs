use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Menus: lookup by title
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_menus_title")
                    .table(Menus::Table)
                    .col(Menus::Title)
                    .to_owned(),
            )
            .await?;

        // Submenus: title unique within its menu
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uniq_submenus_menu_title")
                    .table(Submenus::Table)
                    .col(Submenus::MenuId)
                    .col(Submenus::Title)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Dishes: title unique within its submenu
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uniq_dishes_submenu_title")
                    .table(Dishes::Table)
                    .col(Dishes::SubmenuId)
                    .col(Dishes::Title)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Dishes: scoped lookups by menu
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_dishes_menu")
                    .table(Dishes::Table)
                    .col(Dishes::MenuId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_menus_title").table(Menus::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("uniq_submenus_menu_title").table(Submenus::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("uniq_dishes_submenu_title").table(Dishes::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_dishes_menu").table(Dishes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Menus { Table, Title }

#[derive(DeriveIden)]
enum Submenus { Table, MenuId, Title }

#[derive(DeriveIden)]
enum Dishes { Table, MenuId, SubmenuId, Title }
