use chrono::Utc;
use rust_decimal::{Decimal, RoundingStrategy};
use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize, Serializer};
use uuid::Uuid;

use crate::{errors, menu, submenu, validate};

/// Largest value a `NUMERIC(10, 2)` column holds.
pub const PRICE_MAX: Decimal = Decimal::from_parts(1_410_065_407, 2, 0, false, 2); // 99999999.99

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "dishes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub menu_id: String,
    pub submenu_id: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    #[serde(serialize_with = "serialize_price")]
    pub price: Decimal,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Submenu,
    Menu,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Submenu => Entity::belongs_to(submenu::Entity)
                .from(Column::SubmenuId)
                .to(submenu::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
            Relation::Menu => Entity::belongs_to(menu::Entity)
                .from(Column::MenuId)
                .to(menu::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
        }
    }
}

impl Related<submenu::Entity> for Entity {
    fn to() -> RelationDef { Relation::Submenu.def() }
}

impl Related<menu::Entity> for Entity {
    fn to() -> RelationDef { Relation::Menu.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Round to cents and reject values the column cannot hold.
pub fn normalize_price(price: Decimal) -> Result<Decimal, errors::ModelError> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(errors::ModelError::Validation("price must not be negative".into()));
    }
    let rounded = price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if rounded > PRICE_MAX {
        return Err(errors::ModelError::Validation(format!("price must not exceed {PRICE_MAX}")));
    }
    Ok(rounded)
}

/// Display form used on the wire: always two fractional digits.
pub fn format_price(price: &Decimal) -> String {
    let mut p = price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    p.rescale(2);
    p.to_string()
}

fn serialize_price<S: Serializer>(price: &Decimal, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&format_price(price))
}

/// Insert a dish under `submenu_id`; `menu_id` must be the submenu's owner.
pub async fn create(
    db: &DatabaseConnection,
    menu_id: &str,
    submenu_id: &str,
    title: &str,
    description: &str,
    price: Decimal,
) -> Result<Model, errors::ModelError> {
    validate::validate_title(title)?;
    validate::validate_description(description)?;
    let price = normalize_price(price)?;
    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        menu_id: Set(menu_id.to_string()),
        submenu_id: Set(submenu_id.to_string()),
        title: Set(title.to_string()),
        description: Set(description.to_string()),
        price: Set(price),
        created_at: Set(now),
        updated_at: Set(now),
    };
    Ok(am.insert(db).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal { Decimal::from_str(s).unwrap() }

    #[test]
    fn format_pads_to_two_places() {
        assert_eq!(format_price(&dec("3")), "3.00");
        assert_eq!(format_price(&dec("9.5")), "9.50");
        assert_eq!(format_price(&dec("10.99")), "10.99");
    }

    #[test]
    fn normalize_rounds_half_away_from_zero() {
        assert_eq!(normalize_price(dec("10.995")).unwrap(), dec("11.00"));
        assert_eq!(normalize_price(dec("10.994")).unwrap(), dec("10.99"));
        assert_eq!(normalize_price(dec("0")).unwrap(), dec("0"));
    }

    #[test]
    fn normalize_rejects_negative_and_overflow() {
        assert!(normalize_price(dec("-0.01")).is_err());
        assert!(normalize_price(dec("99999999.99")).is_ok());
        assert!(normalize_price(dec("100000000")).is_err());
    }

    #[test]
    fn price_accepts_number_or_string_and_serializes_as_string() {
        let from_num: Decimal = serde_json::from_str("10.99").unwrap();
        let from_str: Decimal = serde_json::from_str("\"10.99\"").unwrap();
        assert_eq!(from_num, from_str);

        let now = Utc::now().into();
        let m = Model {
            id: "d".into(),
            menu_id: "m".into(),
            submenu_id: "s".into(),
            title: "Fries".into(),
            description: "Side".into(),
            price: dec("3"),
            created_at: now,
            updated_at: now,
        };
        let v = serde_json::to_value(&m).unwrap();
        assert_eq!(v["price"], "3.00");
    }
}
