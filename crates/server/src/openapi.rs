//! OpenAPI document. The `*Doc` types mirror the wire shapes of the service
//! payloads, which do not derive schemas themselves.

use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct MenuInputDoc { pub title: String, pub description: String }

#[derive(ToSchema)]
pub struct MenuChangesDoc { pub title: Option<String>, pub description: Option<String> }

#[derive(ToSchema)]
pub struct MenuDoc {
    pub id: String,
    pub title: String,
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
    pub submenus_count: u64,
    pub dishes_count: u64,
}

#[derive(ToSchema)]
pub struct SubmenuDoc {
    pub id: String,
    pub menu_id: String,
    pub title: String,
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
    pub dishes_count: u64,
}

#[derive(ToSchema)]
pub struct DishInputDoc {
    pub title: String,
    pub description: String,
    /// Number or numeric string, rounded to two decimals.
    #[schema(example = "10.99")]
    pub price: String,
}

#[derive(ToSchema)]
pub struct DishChangesDoc {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
}

#[derive(ToSchema)]
pub struct DishDoc {
    pub id: String,
    pub menu_id: String,
    pub submenu_id: String,
    pub title: String,
    pub description: String,
    #[schema(example = "10.99")]
    pub price: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(ToSchema)]
pub struct DeleteStatusDoc {
    #[schema(example = "true")]
    pub status: String,
    #[schema(example = "The menu has been deleted")]
    pub message: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::menus::list,
        crate::routes::menus::create,
        crate::routes::menus::get,
        crate::routes::menus::update,
        crate::routes::menus::delete,
        crate::routes::submenus::list,
        crate::routes::submenus::create,
        crate::routes::submenus::get,
        crate::routes::submenus::update,
        crate::routes::submenus::delete,
        crate::routes::dishes::list,
        crate::routes::dishes::create,
        crate::routes::dishes::get,
        crate::routes::dishes::update,
        crate::routes::dishes::delete,
    ),
    components(
        schemas(
            HealthResponse,
            MenuInputDoc,
            MenuChangesDoc,
            MenuDoc,
            SubmenuDoc,
            DishInputDoc,
            DishChangesDoc,
            DishDoc,
            DeleteStatusDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "menus"),
        (name = "submenus"),
        (name = "dishes")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_catalog_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        assert!(paths.iter().any(|p| p.as_str() == "/api/v1/menus"));
        assert!(paths
            .iter()
            .any(|p| p.as_str() == "/api/v1/menus/{menu_id}/submenus/{submenu_id}/dishes/{dish_id}"));
    }
}
