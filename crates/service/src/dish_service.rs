use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tracing::{info, instrument};

use models::{dish, submenu, validate};

use crate::domain::{Deleted, DishChanges, DishInput, DishView};
use crate::errors::ServiceError;

/// Lookup scoped by the full path: menu, then submenu, then dish.
async fn find_scoped(
    db: &DatabaseConnection,
    menu_id: &str,
    submenu_id: &str,
    dish_id: &str,
) -> Result<Option<dish::Model>, ServiceError> {
    dish::Entity::find_by_id(dish_id.to_string())
        .filter(dish::Column::MenuId.eq(menu_id))
        .filter(dish::Column::SubmenuId.eq(submenu_id))
        .one(db)
        .await
        .map_err(ServiceError::from_db)
}

/// Create a dish under `submenu_id`. The submenu must belong to `menu_id`,
/// otherwise `NotFound("submenu not found")`.
#[instrument(skip(db, input))]
pub async fn create_dish(
    db: &DatabaseConnection,
    menu_id: &str,
    submenu_id: &str,
    input: &DishInput,
) -> Result<DishView, ServiceError> {
    let owner = submenu::Entity::find_by_id(submenu_id.to_string())
        .filter(submenu::Column::MenuId.eq(menu_id))
        .one(db)
        .await
        .map_err(ServiceError::from_db)?;
    if owner.is_none() {
        return Err(ServiceError::not_found("submenu"));
    }
    let created = dish::create(db, menu_id, submenu_id, &input.title, &input.description, input.price).await?;
    info!(%menu_id, %submenu_id, dish_id = %created.id, "dish created");
    Ok(created)
}

/// Dishes of one submenu, oldest first.
pub async fn list_dishes(
    db: &DatabaseConnection,
    menu_id: &str,
    submenu_id: &str,
) -> Result<Vec<DishView>, ServiceError> {
    dish::Entity::find()
        .filter(dish::Column::MenuId.eq(menu_id))
        .filter(dish::Column::SubmenuId.eq(submenu_id))
        .order_by_asc(dish::Column::CreatedAt)
        .order_by_asc(dish::Column::Id)
        .all(db)
        .await
        .map_err(ServiceError::from_db)
}

pub async fn get_dish(
    db: &DatabaseConnection,
    menu_id: &str,
    submenu_id: &str,
    dish_id: &str,
) -> Result<Option<DishView>, ServiceError> {
    find_scoped(db, menu_id, submenu_id, dish_id).await
}

#[instrument(skip(db, changes))]
pub async fn update_dish(
    db: &DatabaseConnection,
    menu_id: &str,
    submenu_id: &str,
    dish_id: &str,
    changes: DishChanges,
) -> Result<Option<DishView>, ServiceError> {
    let Some(existing) = find_scoped(db, menu_id, submenu_id, dish_id).await? else { return Ok(None) };
    let mut am: dish::ActiveModel = existing.into();
    if let Some(t) = changes.title { validate::validate_title(&t)?; am.title = Set(t); }
    if let Some(d) = changes.description { validate::validate_description(&d)?; am.description = Set(d); }
    if let Some(p) = changes.price { am.price = Set(dish::normalize_price(p)?); }
    am.updated_at = Set(Utc::now().into());
    let updated = am.update(db).await.map_err(ServiceError::from_db)?;
    Ok(Some(updated))
}

#[instrument(skip(db))]
pub async fn delete_dish(
    db: &DatabaseConnection,
    menu_id: &str,
    submenu_id: &str,
    dish_id: &str,
) -> Result<Option<Deleted>, ServiceError> {
    let res = dish::Entity::delete_many()
        .filter(dish::Column::Id.eq(dish_id))
        .filter(dish::Column::MenuId.eq(menu_id))
        .filter(dish::Column::SubmenuId.eq(submenu_id))
        .exec(db)
        .await
        .map_err(ServiceError::from_db)?;
    if res.rows_affected == 0 {
        return Ok(None);
    }
    info!(%menu_id, %submenu_id, %dish_id, "dish deleted");
    Ok(Some(Deleted { entity: "dish" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MenuInput;
    use crate::menu_service::{create_menu, delete_menu, get_menu};
    use crate::submenu_service::{create_submenu, delete_submenu, get_submenu};
    use crate::test_support::get_db;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn input(title: &str, description: &str) -> MenuInput {
        MenuInput { title: title.into(), description: description.into() }
    }

    fn dish_input(title: &str, description: &str, price: &str) -> DishInput {
        DishInput { title: title.into(), description: description.into(), price: Decimal::from_str(price).unwrap() }
    }

    #[tokio::test]
    async fn lunch_scenario_counts_and_cascade() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()) };

        let m = create_menu(&db, &input("Lunch", "Midday")).await?;
        let menu_id = m.menu.id.clone();
        let s = create_submenu(&db, &menu_id, &input("Mains", "Main courses")).await?;
        let submenu_id = s.submenu.id.clone();
        let d1 = create_dish(&db, &menu_id, &submenu_id, &dish_input("Burger", "Beef", "9.50")).await?;
        let d2 = create_dish(&db, &menu_id, &submenu_id, &dish_input("Fries", "Side", "3.00")).await?;
        assert_ne!(d1.id, d2.id);
        assert_eq!(models::dish::format_price(&d1.price), "9.50");

        let got = get_menu(&db, &menu_id).await?.unwrap();
        assert_eq!((got.submenus_count, got.dishes_count), (1, 2));
        let got_s = get_submenu(&db, &menu_id, &submenu_id).await?.unwrap();
        assert_eq!(got_s.dishes_count, 2);

        delete_submenu(&db, &menu_id, &submenu_id).await?;
        let got = get_menu(&db, &menu_id).await?.unwrap();
        assert_eq!((got.submenus_count, got.dishes_count), (0, 0));
        assert!(get_submenu(&db, &menu_id, &submenu_id).await?.is_none());
        assert!(get_dish(&db, &menu_id, &submenu_id, &d1.id).await?.is_none());

        delete_menu(&db, &menu_id).await?;
        Ok(())
    }

    #[tokio::test]
    async fn dishes_count_sums_over_submenus() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let m = create_menu(&db, &input("Dinner", "Evening")).await?;
        let menu_id = m.menu.id.clone();

        let per_submenu = [3usize, 0, 2];
        for (i, n) in per_submenu.iter().enumerate() {
            let s = create_submenu(&db, &menu_id, &input(&format!("Section {i}"), "x")).await?;
            for j in 0..*n {
                create_dish(&db, &menu_id, &s.submenu.id, &dish_input(&format!("Dish {j}"), "y", "1")).await?;
            }
        }

        let got = get_menu(&db, &menu_id).await?.unwrap();
        assert_eq!(got.submenus_count, 3);
        assert_eq!(got.dishes_count, 5);

        delete_menu(&db, &menu_id).await?;
        Ok(())
    }

    #[tokio::test]
    async fn dish_listing_scoped_to_submenu() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let m = create_menu(&db, &input("Scoped", "x")).await?;
        let menu_id = m.menu.id.clone();
        let s1 = create_submenu(&db, &menu_id, &input("S1", "x")).await?;
        let s2 = create_submenu(&db, &menu_id, &input("S2", "x")).await?;
        let a = create_dish(&db, &menu_id, &s1.submenu.id, &dish_input("A", "x", "1.00")).await?;
        let b = create_dish(&db, &menu_id, &s2.submenu.id, &dish_input("B", "x", "2.00")).await?;

        let in_s1 = list_dishes(&db, &menu_id, &s1.submenu.id).await?;
        assert_eq!(in_s1.iter().map(|d| d.id.clone()).collect::<Vec<_>>(), vec![a.id.clone()]);

        // A dish is only reachable through its own submenu.
        assert!(get_dish(&db, &menu_id, &s1.submenu.id, &b.id).await?.is_none());
        assert!(get_dish(&db, &menu_id, &s2.submenu.id, &b.id).await?.is_some());

        delete_menu(&db, &menu_id).await?;
        Ok(())
    }

    #[tokio::test]
    async fn dish_partial_update_and_delete() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let m = create_menu(&db, &input("Patch", "x")).await?;
        let menu_id = m.menu.id.clone();
        let s = create_submenu(&db, &menu_id, &input("Drinks", "Cold")).await?;
        let d = create_dish(&db, &menu_id, &s.submenu.id, &dish_input("Lemonade", "Fresh", "2.5")).await?;

        let changes = DishChanges { price: Some(Decimal::from_str("2.999").unwrap()), ..DishChanges::default() };
        let updated = update_dish(&db, &menu_id, &s.submenu.id, &d.id, changes).await?.unwrap();
        assert_eq!(updated.title, "Lemonade");
        assert_eq!(updated.description, "Fresh");
        assert_eq!(models::dish::format_price(&updated.price), "3.00");

        assert!(delete_dish(&db, &menu_id, &s.submenu.id, &d.id).await?.is_some());
        assert!(delete_dish(&db, &menu_id, &s.submenu.id, &d.id).await?.is_none());

        delete_menu(&db, &menu_id).await?;
        Ok(())
    }

    #[tokio::test]
    async fn create_under_foreign_submenu_is_not_found() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let m1 = create_menu(&db, &input("One", "x")).await?;
        let m2 = create_menu(&db, &input("Two", "x")).await?;
        let s = create_submenu(&db, &m1.menu.id, &input("Only in one", "x")).await?;

        let err = create_dish(&db, &m2.menu.id, &s.submenu.id, &dish_input("Stray", "x", "1"))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(ref m) if m == "submenu not found"));

        delete_menu(&db, &m1.menu.id).await?;
        delete_menu(&db, &m2.menu.id).await?;
        Ok(())
    }
}
