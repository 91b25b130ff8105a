use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{dish, errors, menu, validate};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "submenus")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub menu_id: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Menu,
    Dishes,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Menu => Entity::belongs_to(menu::Entity)
                .from(Column::MenuId)
                .to(menu::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
            Relation::Dishes => Entity::has_many(dish::Entity).into(),
        }
    }
}

impl Related<menu::Entity> for Entity {
    fn to() -> RelationDef { Relation::Menu.def() }
}

impl Related<dish::Entity> for Entity {
    fn to() -> RelationDef { Relation::Dishes.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Insert a submenu under `menu_id`. The caller is responsible for checking
/// that the menu exists; a dangling id surfaces as a constraint violation.
pub async fn create(
    db: &DatabaseConnection,
    menu_id: &str,
    title: &str,
    description: &str,
) -> Result<Model, errors::ModelError> {
    validate::validate_title(title)?;
    validate::validate_description(description)?;
    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        menu_id: Set(menu_id.to_string()),
        title: Set(title.to_string()),
        description: Set(description.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    };
    Ok(am.insert(db).await?)
}
