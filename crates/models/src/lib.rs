//! SeaORM entities for the catalog hierarchy (`menu` → `submenu` → `dish`)
//! plus connection-pool construction and field validation shared by the
//! service layer.

pub mod errors;
pub mod db;
pub mod validate;
pub mod menu;
pub mod submenu;
pub mod dish;
