//! Derived child counts.
//!
//! A submenu's `dishes_count` is one grouped `COUNT` over `dishes`. A menu's
//! `dishes_count` is the sum of its submenus' counts, folded in memory from
//! the same grouped query, so listing N menus costs three queries total.
//! Listings filter on the parent column or not at all, so the number of
//! bind parameters never grows with the number of rows.

use std::collections::HashMap;

use sea_orm::{
    sea_query::Expr, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QuerySelect,
};

use models::{dish, submenu};

use crate::errors::ServiceError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuTotals {
    pub submenus_count: u64,
    pub dishes_count: u64,
}

async fn grouped_dish_counts(
    db: &DatabaseConnection,
    cond: Condition,
) -> Result<HashMap<String, u64>, ServiceError> {
    let rows: Vec<(String, i64)> = dish::Entity::find()
        .select_only()
        .column(dish::Column::SubmenuId)
        .column_as(Expr::col(dish::Column::Id).count(), "dishes_count")
        .filter(cond)
        .group_by(dish::Column::SubmenuId)
        .into_tuple()
        .all(db)
        .await
        .map_err(ServiceError::from_db)?;
    Ok(rows.into_iter().map(|(id, n)| (id, n.max(0) as u64)).collect())
}

/// `(submenu_id, menu_id)` pairs matching `cond`.
async fn submenu_owners(
    db: &DatabaseConnection,
    cond: Condition,
) -> Result<Vec<(String, String)>, ServiceError> {
    submenu::Entity::find()
        .select_only()
        .column(submenu::Column::Id)
        .column(submenu::Column::MenuId)
        .filter(cond)
        .into_tuple()
        .all(db)
        .await
        .map_err(ServiceError::from_db)
}

/// Number of dishes for a handful of submenu ids. Submenus without dishes are absent.
pub async fn dishes_per_submenu(
    db: &DatabaseConnection,
    submenu_ids: &[String],
) -> Result<HashMap<String, u64>, ServiceError> {
    if submenu_ids.is_empty() {
        return Ok(HashMap::new());
    }
    let cond = Condition::all().add(dish::Column::SubmenuId.is_in(submenu_ids.iter().cloned()));
    grouped_dish_counts(db, cond).await
}

/// Number of dishes per submenu of one menu.
pub async fn dishes_in_menu(
    db: &DatabaseConnection,
    menu_id: &str,
) -> Result<HashMap<String, u64>, ServiceError> {
    grouped_dish_counts(db, Condition::all().add(dish::Column::MenuId.eq(menu_id))).await
}

/// Submenu and dish totals for a handful of menu ids. Every requested id gets an entry.
pub async fn menu_totals(
    db: &DatabaseConnection,
    menu_ids: &[String],
) -> Result<HashMap<String, MenuTotals>, ServiceError> {
    let mut totals: HashMap<String, MenuTotals> =
        menu_ids.iter().map(|id| (id.clone(), MenuTotals::default())).collect();
    if menu_ids.is_empty() {
        return Ok(totals);
    }
    let pairs = submenu_owners(
        db,
        Condition::all().add(submenu::Column::MenuId.is_in(menu_ids.iter().cloned())),
    )
    .await?;
    let dishes = grouped_dish_counts(
        db,
        Condition::all().add(dish::Column::MenuId.is_in(menu_ids.iter().cloned())),
    )
    .await?;
    fold_menu_totals(&mut totals, &pairs, &dishes);
    Ok(totals)
}

/// Totals for every menu that has at least one submenu, grouped over the whole tables.
pub async fn all_menu_totals(db: &DatabaseConnection) -> Result<HashMap<String, MenuTotals>, ServiceError> {
    let pairs = submenu_owners(db, Condition::all()).await?;
    let dishes = grouped_dish_counts(db, Condition::all()).await?;
    let mut totals = HashMap::new();
    fold_menu_totals(&mut totals, &pairs, &dishes);
    Ok(totals)
}

/// Sum `(submenu_id, menu_id)` pairs and per-submenu dish counts into `totals`.
fn fold_menu_totals(
    totals: &mut HashMap<String, MenuTotals>,
    pairs: &[(String, String)],
    dishes: &HashMap<String, u64>,
) {
    for (submenu_id, menu_id) in pairs {
        let entry = totals.entry(menu_id.clone()).or_default();
        entry.submenus_count += 1;
        entry.dishes_count += dishes.get(submenu_id).copied().unwrap_or(0);
    }
}
