use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tracing::{info, instrument};

use models::{menu, submenu, validate};

use crate::counts::{dishes_in_menu, dishes_per_submenu};
use crate::domain::{Deleted, SubmenuChanges, SubmenuInput, SubmenuView};
use crate::errors::ServiceError;

/// Lookup scoped by the owning menu.
async fn find_scoped(
    db: &DatabaseConnection,
    menu_id: &str,
    submenu_id: &str,
) -> Result<Option<submenu::Model>, ServiceError> {
    submenu::Entity::find_by_id(submenu_id.to_string())
        .filter(submenu::Column::MenuId.eq(menu_id))
        .one(db)
        .await
        .map_err(ServiceError::from_db)
}

async fn with_count(db: &DatabaseConnection, s: submenu::Model) -> Result<SubmenuView, ServiceError> {
    let counts = dishes_per_submenu(db, std::slice::from_ref(&s.id)).await?;
    let dishes_count = counts.get(&s.id).copied().unwrap_or(0);
    Ok(SubmenuView { submenu: s, dishes_count })
}

/// Create a submenu under `menu_id`. Fails with `NotFound` when the menu is missing.
#[instrument(skip(db, input))]
pub async fn create_submenu(
    db: &DatabaseConnection,
    menu_id: &str,
    input: &SubmenuInput,
) -> Result<SubmenuView, ServiceError> {
    let owner = menu::Entity::find_by_id(menu_id.to_string())
        .one(db)
        .await
        .map_err(ServiceError::from_db)?;
    if owner.is_none() {
        return Err(ServiceError::not_found("menu"));
    }
    let created = submenu::create(db, menu_id, &input.title, &input.description).await?;
    info!(%menu_id, submenu_id = %created.id, "submenu created");
    Ok(SubmenuView { submenu: created, dishes_count: 0 })
}

/// Submenus of one menu, oldest first. An unknown menu yields an empty list.
pub async fn list_submenus(db: &DatabaseConnection, menu_id: &str) -> Result<Vec<SubmenuView>, ServiceError> {
    let rows = submenu::Entity::find()
        .filter(submenu::Column::MenuId.eq(menu_id))
        .order_by_asc(submenu::Column::CreatedAt)
        .order_by_asc(submenu::Column::Id)
        .all(db)
        .await
        .map_err(ServiceError::from_db)?;
    let counts = dishes_in_menu(db, menu_id).await?;
    Ok(rows
        .into_iter()
        .map(|s| {
            let dishes_count = counts.get(&s.id).copied().unwrap_or(0);
            SubmenuView { submenu: s, dishes_count }
        })
        .collect())
}

/// Get a submenu of `menu_id` with its `dishes_count`.
pub async fn get_submenu(
    db: &DatabaseConnection,
    menu_id: &str,
    submenu_id: &str,
) -> Result<Option<SubmenuView>, ServiceError> {
    match find_scoped(db, menu_id, submenu_id).await? {
        Some(s) => Ok(Some(with_count(db, s).await?)),
        None => Ok(None),
    }
}

#[instrument(skip(db, changes))]
pub async fn update_submenu(
    db: &DatabaseConnection,
    menu_id: &str,
    submenu_id: &str,
    changes: SubmenuChanges,
) -> Result<Option<SubmenuView>, ServiceError> {
    let Some(existing) = find_scoped(db, menu_id, submenu_id).await? else { return Ok(None) };
    let mut am: submenu::ActiveModel = existing.into();
    if let Some(t) = changes.title { validate::validate_title(&t)?; am.title = Set(t); }
    if let Some(d) = changes.description { validate::validate_description(&d)?; am.description = Set(d); }
    am.updated_at = Set(Utc::now().into());
    let updated = am.update(db).await.map_err(ServiceError::from_db)?;
    Ok(Some(with_count(db, updated).await?))
}

/// Delete a submenu of `menu_id`; its dishes go with it through FK cascade.
#[instrument(skip(db))]
pub async fn delete_submenu(
    db: &DatabaseConnection,
    menu_id: &str,
    submenu_id: &str,
) -> Result<Option<Deleted>, ServiceError> {
    let res = submenu::Entity::delete_many()
        .filter(submenu::Column::Id.eq(submenu_id))
        .filter(submenu::Column::MenuId.eq(menu_id))
        .exec(db)
        .await
        .map_err(ServiceError::from_db)?;
    if res.rows_affected == 0 {
        return Ok(None);
    }
    info!(%menu_id, %submenu_id, "submenu deleted");
    Ok(Some(Deleted { entity: "submenu" }))
}
