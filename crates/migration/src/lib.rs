//! Migrator registering catalog migrations in dependency order:
//! menus, then submenus, then dishes. Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_menus;
mod m20240101_000002_create_submenus;
mod m20240101_000003_create_dishes;
mod m20240101_000004_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_menus::Migration),
            Box::new(m20240101_000002_create_submenus::Migration),
            Box::new(m20240101_000003_create_dishes::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000004_add_indexes::Migration),
        ]
    }
}
