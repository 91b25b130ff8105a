use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tracing::{info, instrument};

use models::{menu, validate};

use crate::counts::{all_menu_totals, menu_totals, MenuTotals};
use crate::domain::{Deleted, MenuChanges, MenuInput, MenuView};
use crate::errors::ServiceError;

fn view(menu: menu::Model, totals: MenuTotals) -> MenuView {
    MenuView { menu, submenus_count: totals.submenus_count, dishes_count: totals.dishes_count }
}

/// Create a menu; a fresh menu has no children.
#[instrument(skip(db, input))]
pub async fn create_menu(db: &DatabaseConnection, input: &MenuInput) -> Result<MenuView, ServiceError> {
    let created = menu::create(db, &input.title, &input.description).await?;
    info!(menu_id = %created.id, "menu created");
    Ok(view(created, MenuTotals::default()))
}

/// All menus, oldest first, with derived counts.
pub async fn list_menus(db: &DatabaseConnection) -> Result<Vec<MenuView>, ServiceError> {
    let rows = menu::Entity::find()
        .order_by_asc(menu::Column::CreatedAt)
        .order_by_asc(menu::Column::Id)
        .all(db)
        .await
        .map_err(ServiceError::from_db)?;
    let mut totals = all_menu_totals(db).await?;
    Ok(rows
        .into_iter()
        .map(|m| {
            let t = totals.remove(&m.id).unwrap_or_default();
            view(m, t)
        })
        .collect())
}

/// Get a menu by id with `submenus_count` and `dishes_count`.
pub async fn get_menu(db: &DatabaseConnection, id: &str) -> Result<Option<MenuView>, ServiceError> {
    let found = menu::Entity::find_by_id(id.to_string())
        .one(db)
        .await
        .map_err(ServiceError::from_db)?;
    let Some(found) = found else { return Ok(None) };
    let mut totals = menu_totals(db, std::slice::from_ref(&found.id)).await?;
    let t = totals.remove(&found.id).unwrap_or_default();
    Ok(Some(view(found, t)))
}

/// Apply the present fields of `changes`; `None` if the menu does not exist.
#[instrument(skip(db, changes))]
pub async fn update_menu(
    db: &DatabaseConnection,
    id: &str,
    changes: MenuChanges,
) -> Result<Option<MenuView>, ServiceError> {
    let current = menu::Entity::find_by_id(id.to_string())
        .one(db)
        .await
        .map_err(ServiceError::from_db)?;
    let Some(existing) = current else { return Ok(None) };
    let mut am: menu::ActiveModel = existing.into();
    if let Some(t) = changes.title { validate::validate_title(&t)?; am.title = Set(t); }
    if let Some(d) = changes.description { validate::validate_description(&d)?; am.description = Set(d); }
    am.updated_at = Set(Utc::now().into());
    let updated = am.update(db).await.map_err(ServiceError::from_db)?;
    let mut totals = menu_totals(db, std::slice::from_ref(&updated.id)).await?;
    let t = totals.remove(&updated.id).unwrap_or_default();
    Ok(Some(view(updated, t)))
}

/// Delete a menu; submenus and dishes go with it through FK cascade.
#[instrument(skip(db))]
pub async fn delete_menu(db: &DatabaseConnection, id: &str) -> Result<Option<Deleted>, ServiceError> {
    let res = menu::Entity::delete_many()
        .filter(menu::Column::Id.eq(id))
        .exec(db)
        .await
        .map_err(ServiceError::from_db)?;
    if res.rows_affected == 0 {
        return Ok(None);
    }
    info!(menu_id = %id, "menu deleted");
    Ok(Some(Deleted { entity: "menu" }))
}
