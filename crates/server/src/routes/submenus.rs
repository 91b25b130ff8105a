use axum::{extract::{Path, State}, http::StatusCode, Json};
use axum_extra::extract::WithRejection;
use common::types::DeleteStatus;
use service::domain::{SubmenuChanges, SubmenuInput, SubmenuView};
use service::submenu_service;
use tracing::info;

use crate::errors::JsonApiError;
use crate::observability;
use crate::state::ServerState;

#[utoipa::path(
    get, path = "/api/v1/menus/{menu_id}/submenus", tag = "submenus",
    params(("menu_id" = String, Path, description = "Menu id")),
    responses((status = 200, description = "Submenus of the menu", body = [crate::openapi::SubmenuDoc]))
)]
pub async fn list(
    State(state): State<ServerState>,
    Path(menu_id): Path<String>,
) -> Result<Json<Vec<SubmenuView>>, JsonApiError> {
    let submenus = submenu_service::list_submenus(&state.db, &menu_id).await?;
    info!(%menu_id, count = submenus.len(), "list submenus");
    Ok(Json(submenus))
}

#[utoipa::path(
    post, path = "/api/v1/menus/{menu_id}/submenus", tag = "submenus",
    params(("menu_id" = String, Path, description = "Menu id")),
    request_body = crate::openapi::MenuInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::SubmenuDoc),
        (status = 404, description = "menu not found"),
        (status = 409, description = "Constraint violation"),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Path(menu_id): Path<String>,
    WithRejection(Json(input), _): WithRejection<Json<SubmenuInput>, JsonApiError>,
) -> Result<(StatusCode, Json<SubmenuView>), JsonApiError> {
    let created = submenu_service::create_submenu(&state.db, &menu_id, &input).await?;
    observability::record_created("submenu");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/api/v1/menus/{menu_id}/submenus/{submenu_id}", tag = "submenus",
    params(
        ("menu_id" = String, Path, description = "Menu id"),
        ("submenu_id" = String, Path, description = "Submenu id")
    ),
    responses(
        (status = 200, description = "Submenu with dishes_count", body = crate::openapi::SubmenuDoc),
        (status = 404, description = "submenu not found")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    Path((menu_id, submenu_id)): Path<(String, String)>,
) -> Result<Json<SubmenuView>, JsonApiError> {
    submenu_service::get_submenu(&state.db, &menu_id, &submenu_id)
        .await?
        .map(Json)
        .ok_or_else(|| JsonApiError::not_found("submenu"))
}

#[utoipa::path(
    patch, path = "/api/v1/menus/{menu_id}/submenus/{submenu_id}", tag = "submenus",
    params(
        ("menu_id" = String, Path, description = "Menu id"),
        ("submenu_id" = String, Path, description = "Submenu id")
    ),
    request_body = crate::openapi::MenuChangesDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::SubmenuDoc),
        (status = 404, description = "submenu not found"),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path((menu_id, submenu_id)): Path<(String, String)>,
    WithRejection(Json(changes), _): WithRejection<Json<SubmenuChanges>, JsonApiError>,
) -> Result<Json<SubmenuView>, JsonApiError> {
    submenu_service::update_submenu(&state.db, &menu_id, &submenu_id, changes)
        .await?
        .map(Json)
        .ok_or_else(|| JsonApiError::not_found("submenu"))
}

#[utoipa::path(
    delete, path = "/api/v1/menus/{menu_id}/submenus/{submenu_id}", tag = "submenus",
    params(
        ("menu_id" = String, Path, description = "Menu id"),
        ("submenu_id" = String, Path, description = "Submenu id")
    ),
    responses(
        (status = 200, description = "Deleted with its dishes", body = crate::openapi::DeleteStatusDoc),
        (status = 404, description = "submenu not found")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path((menu_id, submenu_id)): Path<(String, String)>,
) -> Result<Json<DeleteStatus>, JsonApiError> {
    let deleted = submenu_service::delete_submenu(&state.db, &menu_id, &submenu_id)
        .await?
        .ok_or_else(|| JsonApiError::not_found("submenu"))?;
    observability::record_deleted(deleted.entity);
    Ok(Json(DeleteStatus::deleted(deleted.entity)))
}
