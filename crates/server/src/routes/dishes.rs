use axum::{extract::{Path, State}, http::StatusCode, Json};
use axum_extra::extract::WithRejection;
use common::types::DeleteStatus;
use service::dish_service;
use service::domain::{DishChanges, DishInput, DishView};
use tracing::info;

use crate::errors::JsonApiError;
use crate::observability;
use crate::state::ServerState;

#[utoipa::path(
    get, path = "/api/v1/menus/{menu_id}/submenus/{submenu_id}/dishes", tag = "dishes",
    params(
        ("menu_id" = String, Path, description = "Menu id"),
        ("submenu_id" = String, Path, description = "Submenu id")
    ),
    responses((status = 200, description = "Dishes of the submenu", body = [crate::openapi::DishDoc]))
)]
pub async fn list(
    State(state): State<ServerState>,
    Path((menu_id, submenu_id)): Path<(String, String)>,
) -> Result<Json<Vec<DishView>>, JsonApiError> {
    let dishes = dish_service::list_dishes(&state.db, &menu_id, &submenu_id).await?;
    info!(%menu_id, %submenu_id, count = dishes.len(), "list dishes");
    Ok(Json(dishes))
}

#[utoipa::path(
    post, path = "/api/v1/menus/{menu_id}/submenus/{submenu_id}/dishes", tag = "dishes",
    params(
        ("menu_id" = String, Path, description = "Menu id"),
        ("submenu_id" = String, Path, description = "Submenu id")
    ),
    request_body = crate::openapi::DishInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::DishDoc),
        (status = 404, description = "submenu not found"),
        (status = 409, description = "Constraint violation"),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Path((menu_id, submenu_id)): Path<(String, String)>,
    WithRejection(Json(input), _): WithRejection<Json<DishInput>, JsonApiError>,
) -> Result<(StatusCode, Json<DishView>), JsonApiError> {
    let created = dish_service::create_dish(&state.db, &menu_id, &submenu_id, &input).await?;
    observability::record_created("dish");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/api/v1/menus/{menu_id}/submenus/{submenu_id}/dishes/{dish_id}", tag = "dishes",
    params(
        ("menu_id" = String, Path, description = "Menu id"),
        ("submenu_id" = String, Path, description = "Submenu id"),
        ("dish_id" = String, Path, description = "Dish id")
    ),
    responses(
        (status = 200, description = "Dish", body = crate::openapi::DishDoc),
        (status = 404, description = "dish not found")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    Path((menu_id, submenu_id, dish_id)): Path<(String, String, String)>,
) -> Result<Json<DishView>, JsonApiError> {
    dish_service::get_dish(&state.db, &menu_id, &submenu_id, &dish_id)
        .await?
        .map(Json)
        .ok_or_else(|| JsonApiError::not_found("dish"))
}

#[utoipa::path(
    patch, path = "/api/v1/menus/{menu_id}/submenus/{submenu_id}/dishes/{dish_id}", tag = "dishes",
    params(
        ("menu_id" = String, Path, description = "Menu id"),
        ("submenu_id" = String, Path, description = "Submenu id"),
        ("dish_id" = String, Path, description = "Dish id")
    ),
    request_body = crate::openapi::DishChangesDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::DishDoc),
        (status = 404, description = "dish not found"),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path((menu_id, submenu_id, dish_id)): Path<(String, String, String)>,
    WithRejection(Json(changes), _): WithRejection<Json<DishChanges>, JsonApiError>,
) -> Result<Json<DishView>, JsonApiError> {
    dish_service::update_dish(&state.db, &menu_id, &submenu_id, &dish_id, changes)
        .await?
        .map(Json)
        .ok_or_else(|| JsonApiError::not_found("dish"))
}

#[utoipa::path(
    delete, path = "/api/v1/menus/{menu_id}/submenus/{submenu_id}/dishes/{dish_id}", tag = "dishes",
    params(
        ("menu_id" = String, Path, description = "Menu id"),
        ("submenu_id" = String, Path, description = "Submenu id"),
        ("dish_id" = String, Path, description = "Dish id")
    ),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::DeleteStatusDoc),
        (status = 404, description = "dish not found")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path((menu_id, submenu_id, dish_id)): Path<(String, String, String)>,
) -> Result<Json<DeleteStatus>, JsonApiError> {
    let deleted = dish_service::delete_dish(&state.db, &menu_id, &submenu_id, &dish_id)
        .await?
        .ok_or_else(|| JsonApiError::not_found("dish"))?;
    observability::record_deleted(deleted.entity);
    Ok(Json(DeleteStatus::deleted(deleted.entity)))
}
