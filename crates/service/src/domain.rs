//! Request payloads and read models for the catalog.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use models::{dish, menu, submenu};

/// Body of POST for menus and submenus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuInput {
    pub title: String,
    pub description: String,
}

pub type SubmenuInput = MenuInput;

/// Body of POST for dishes. `price` accepts a JSON number or a numeric string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DishInput {
    pub title: String,
    pub description: String,
    pub price: Decimal,
}

/// Body of PUT/PATCH for menus and submenus; absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MenuChanges {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

pub type SubmenuChanges = MenuChanges;

/// Body of PUT/PATCH for dishes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DishChanges {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MenuView {
    #[serde(flatten)]
    pub menu: menu::Model,
    pub submenus_count: u64,
    pub dishes_count: u64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SubmenuView {
    #[serde(flatten)]
    pub submenu: submenu::Model,
    pub dishes_count: u64,
}

pub type DishView = dish::Model;

/// Outcome of a delete that removed a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deleted {
    pub entity: &'static str,
}
