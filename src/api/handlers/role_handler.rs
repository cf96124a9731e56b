//! Role management handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use uuid::Uuid;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{CreateRoleRequest, RoleResponse, UpdateRoleRequest};
use crate::errors::AppResult;
use crate::types::{Created, MessageResponse};

/// Create role management routes
pub fn role_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_role).get(list_roles))
        .route("/:id", get(get_role).put(update_role).delete(delete_role))
}

/// Create a new role
#[utoipa::path(
    post,
    path = "/api/roles",
    tag = "Roles",
    request_body = CreateRoleRequest,
    responses(
        (status = 201, description = "Role created successfully", body = RoleResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Role name already exists")
    )
)]
pub async fn create_role(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateRoleRequest>,
) -> AppResult<Created<RoleResponse>> {
    let role = state.role_service.create_role(payload).await?;
    Ok(Created(RoleResponse::from(role)))
}

/// List all roles
#[utoipa::path(
    get,
    path = "/api/roles",
    tag = "Roles",
    responses(
        (status = 200, description = "List of roles", body = Vec<RoleResponse>)
    )
)]
pub async fn list_roles(State(state): State<AppState>) -> AppResult<Json<Vec<RoleResponse>>> {
    let roles = state.role_service.list_roles().await?;
    Ok(Json(roles.into_iter().map(RoleResponse::from).collect()))
}

/// Get a role by ID
#[utoipa::path(
    get,
    path = "/api/roles/{id}",
    tag = "Roles",
    params(
        ("id" = Uuid, Path, description = "Role ID")
    ),
    responses(
        (status = 200, description = "Role details", body = RoleResponse),
        (status = 404, description = "Role not found")
    )
)]
pub async fn get_role(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<RoleResponse>> {
    let role = state.role_service.get_role(id).await?;
    Ok(Json(RoleResponse::from(role)))
}

/// Replace a role's name and permissions
#[utoipa::path(
    put,
    path = "/api/roles/{id}",
    tag = "Roles",
    params(
        ("id" = Uuid, Path, description = "Role ID")
    ),
    request_body = UpdateRoleRequest,
    responses(
        (status = 200, description = "Role updated successfully", body = RoleResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Role not found"),
        (status = 409, description = "Another role already has this name")
    )
)]
pub async fn update_role(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateRoleRequest>,
) -> AppResult<Json<RoleResponse>> {
    let role = state.role_service.update_role(id, payload).await?;
    Ok(Json(RoleResponse::from(role)))
}

/// Delete a role
#[utoipa::path(
    delete,
    path = "/api/roles/{id}",
    tag = "Roles",
    params(
        ("id" = Uuid, Path, description = "Role ID")
    ),
    responses(
        (status = 200, description = "Role deleted successfully"),
        (status = 404, description = "Role not found")
    )
)]
pub async fn delete_role(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    state.role_service.delete_role(id).await?;
    Ok((
        StatusCode::OK,
        Json(MessageResponse::new("Role deleted successfully")),
    ))
}
