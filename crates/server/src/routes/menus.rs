use axum::{extract::{Path, State}, http::StatusCode, Json};
use axum_extra::extract::WithRejection;
use common::types::DeleteStatus;
use service::domain::{MenuChanges, MenuInput, MenuView};
use service::menu_service;
use tracing::info;

use crate::errors::JsonApiError;
use crate::observability;
use crate::state::ServerState;

#[utoipa::path(
    get, path = "/api/v1/menus", tag = "menus",
    responses((status = 200, description = "All menus with counts", body = [crate::openapi::MenuDoc]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<MenuView>>, JsonApiError> {
    let menus = menu_service::list_menus(&state.db).await?;
    info!(count = menus.len(), "list menus");
    Ok(Json(menus))
}

#[utoipa::path(
    post, path = "/api/v1/menus", tag = "menus",
    request_body = crate::openapi::MenuInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::MenuDoc),
        (status = 409, description = "Constraint violation"),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    WithRejection(Json(input), _): WithRejection<Json<MenuInput>, JsonApiError>,
) -> Result<(StatusCode, Json<MenuView>), JsonApiError> {
    let created = menu_service::create_menu(&state.db, &input).await?;
    observability::record_created("menu");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/api/v1/menus/{menu_id}", tag = "menus",
    params(("menu_id" = String, Path, description = "Menu id")),
    responses(
        (status = 200, description = "Menu with counts", body = crate::openapi::MenuDoc),
        (status = 404, description = "menu not found")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    Path(menu_id): Path<String>,
) -> Result<Json<MenuView>, JsonApiError> {
    menu_service::get_menu(&state.db, &menu_id)
        .await?
        .map(Json)
        .ok_or_else(|| JsonApiError::not_found("menu"))
}

/// Serves both PUT and PATCH; absent fields are left unchanged.
#[utoipa::path(
    patch, path = "/api/v1/menus/{menu_id}", tag = "menus",
    params(("menu_id" = String, Path, description = "Menu id")),
    request_body = crate::openapi::MenuChangesDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::MenuDoc),
        (status = 404, description = "menu not found"),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(menu_id): Path<String>,
    WithRejection(Json(changes), _): WithRejection<Json<MenuChanges>, JsonApiError>,
) -> Result<Json<MenuView>, JsonApiError> {
    menu_service::update_menu(&state.db, &menu_id, changes)
        .await?
        .map(Json)
        .ok_or_else(|| JsonApiError::not_found("menu"))
}

#[utoipa::path(
    delete, path = "/api/v1/menus/{menu_id}", tag = "menus",
    params(("menu_id" = String, Path, description = "Menu id")),
    responses(
        (status = 200, description = "Deleted with its submenus and dishes", body = crate::openapi::DeleteStatusDoc),
        (status = 404, description = "menu not found")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path(menu_id): Path<String>,
) -> Result<Json<DeleteStatus>, JsonApiError> {
    let deleted = menu_service::delete_menu(&state.db, &menu_id)
        .await?
        .ok_or_else(|| JsonApiError::not_found("menu"))?;
    observability::record_deleted(deleted.entity);
    Ok(Json(DeleteStatus::deleted(deleted.entity)))
}
