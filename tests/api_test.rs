//! Integration tests for API endpoints.
//!
//! These tests use mock services to exercise API wiring without requiring
//! an actual database connection.

use async_trait::async_trait;
use axum::http::StatusCode;
use chrono::Utc;
use uuid::Uuid;

use user_admin_api::domain::{
    CreateRoleRequest, CreateUserRequest, ReplaceUserRequest, Role, RoleResponse, UpdateRoleRequest,
    User, UserResponse,
};
use user_admin_api::errors::{AppError, AppResult};
use user_admin_api::services::{
    AuthService, AuthenticatedUser, RoleService, UserService,
};

// =============================================================================
// Mock Services for Testing
// =============================================================================

fn sample_role(id: Uuid, name: &str) -> Role {
    Role {
        id,
        name: name.to_string(),
        permissions: vec!["READ".to_string(), "WRITE".to_string()],
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn sample_user(id: Uuid) -> User {
    User {
        id,
        username: "alice".to_string(),
        password: "pw1".to_string(),
        full_name: "Alice Anderson".to_string(),
        role: sample_role(Uuid::new_v4(), "ADMIN"),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// Mock role service that returns predefined responses
struct MockRoleService;

#[async_trait]
impl RoleService for MockRoleService {
    async fn create_role(&self, req: CreateRoleRequest) -> AppResult<Role> {
        let mut role = sample_role(Uuid::new_v4(), &Role::normalize_name(&req.name));
        role.permissions = req.permissions;
        Ok(role)
    }

    async fn list_roles(&self) -> AppResult<Vec<Role>> {
        Ok(vec![
            sample_role(Uuid::new_v4(), "ADMIN"),
            sample_role(Uuid::new_v4(), "VIEWER"),
        ])
    }

    async fn get_role(&self, id: Uuid) -> AppResult<Role> {
        Ok(sample_role(id, "ADMIN"))
    }

    async fn update_role(&self, id: Uuid, req: UpdateRoleRequest) -> AppResult<Role> {
        let mut role = sample_role(id, &Role::normalize_name(&req.name));
        role.permissions = req.permissions;
        Ok(role)
    }

    async fn delete_role(&self, _id: Uuid) -> AppResult<()> {
        Ok(())
    }
}

/// Mock user service that returns predefined responses
struct MockUserService;

#[async_trait]
impl UserService for MockUserService {
    async fn create_user(&self, req: CreateUserRequest) -> AppResult<User> {
        let mut user = sample_user(Uuid::new_v4());
        user.username = req.username;
        user.full_name = req.full_name;
        Ok(user)
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        Ok(vec![sample_user(Uuid::new_v4()), sample_user(Uuid::new_v4())])
    }

    async fn get_user(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(Some(sample_user(id)))
    }

    async fn replace_user(&self, id: Uuid, req: ReplaceUserRequest) -> AppResult<Option<User>> {
        let mut user = sample_user(id);
        user.username = req.username;
        Ok(Some(user))
    }

    async fn delete_user(&self, _id: Uuid) -> AppResult<bool> {
        Ok(true)
    }
}

/// Mock auth service that accepts a single fixed credential pair
struct MockAuthService;

#[async_trait]
impl AuthService for MockAuthService {
    async fn authenticate(&self, username: &str, password: &str) -> AppResult<AuthenticatedUser> {
        if username == "alice" && password == "pw1" {
            Ok(AuthenticatedUser {
                username: username.to_string(),
                role: "ADMIN".to_string(),
            })
        } else {
            Err(AppError::InvalidCredentials)
        }
    }
}

// =============================================================================
// Service Wiring Tests
// =============================================================================

#[tokio::test]
async fn test_mock_role_service_round_trip() {
    let service = MockRoleService;
    let role = service
        .create_role(CreateRoleRequest {
            name: "admin".to_string(),
            permissions: vec!["READ".to_string()],
        })
        .await
        .unwrap();

    assert_eq!(role.name, "ADMIN");
    assert_eq!(role.permissions, vec!["READ"]);
}

#[tokio::test]
async fn test_mock_auth_service_rejects_bad_credentials() {
    let service = MockAuthService;
    assert!(service.authenticate("alice", "pw1").await.is_ok());
    assert!(matches!(
        service.authenticate("alice", "nope").await,
        Err(AppError::InvalidCredentials)
    ));
}

#[tokio::test]
async fn test_service_container_hands_out_services() {
    use std::sync::Arc;
    use user_admin_api::services::{MockServiceContainer, ServiceContainer};

    let mut container = MockServiceContainer::new();
    container
        .expect_roles()
        .returning(|| Arc::new(MockRoleService) as Arc<dyn RoleService>);

    let roles = container.roles();
    assert_eq!(roles.list_roles().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_mock_user_service_delete_reports_outcome() {
    let service = MockUserService;
    assert!(service.delete_user(Uuid::new_v4()).await.unwrap());
}

// =============================================================================
// Response Type Tests
// =============================================================================

#[tokio::test]
async fn test_api_response_structure() {
    use user_admin_api::types::ApiResponse;

    let response: ApiResponse<String> = ApiResponse::success("test data".to_string());
    assert!(response.success);
    assert_eq!(response.data.unwrap(), "test data");
    assert!(response.message.is_none());
}

#[tokio::test]
async fn test_api_response_with_message() {
    use user_admin_api::types::ApiResponse;

    let response: ApiResponse<i32> = ApiResponse::with_message(42, "Operation completed");
    assert!(response.success);
    assert_eq!(response.data.unwrap(), 42);
    assert_eq!(response.message.unwrap(), "Operation completed");
}

#[tokio::test]
async fn test_created_response_status() {
    use axum::response::IntoResponse;
    use user_admin_api::types::Created;

    let response = Created("payload").into_response();
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_no_content_response_status() {
    use axum::response::IntoResponse;
    use user_admin_api::types::NoContent;

    let response = NoContent.into_response();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

// =============================================================================
// Domain Model Tests
// =============================================================================

#[tokio::test]
async fn test_role_name_normalization() {
    assert_eq!(Role::normalize_name("admin"), "ADMIN");
    assert_eq!(Role::normalize_name("Viewer"), "VIEWER");
    assert_eq!(Role::normalize_name("ADMIN"), "ADMIN");
}

#[tokio::test]
async fn test_user_serialization_skips_password() {
    let user = sample_user(Uuid::new_v4());
    let value = serde_json::to_value(&user).unwrap();

    assert!(value.get("password").is_none());
    assert_eq!(value["username"], "alice");
}

#[tokio::test]
async fn test_user_response_embeds_role() {
    let user = sample_user(Uuid::new_v4());
    let response = UserResponse::from(user.clone());

    assert_eq!(response.id, user.id);
    assert_eq!(response.role.name, "ADMIN");

    let value = serde_json::to_value(&response).unwrap();
    assert!(value.get("password").is_none());
}

#[tokio::test]
async fn test_role_response_fields() {
    let role = sample_role(Uuid::new_v4(), "ADMIN");
    let response = RoleResponse::from(role.clone());

    assert_eq!(response.id, role.id);
    assert_eq!(response.name, "ADMIN");
    assert_eq!(response.permissions, role.permissions);
}

// =============================================================================
// Error Type Tests
// =============================================================================

#[tokio::test]
async fn test_app_error_variants() {
    let not_found = AppError::NotFound;
    let conflict = AppError::conflict("Role");
    let validation = AppError::validation("invalid field");
    let internal = AppError::internal("server error");

    assert!(matches!(not_found, AppError::NotFound));
    assert!(matches!(conflict, AppError::Conflict(_)));
    assert!(matches!(validation, AppError::Validation(_)));
    assert!(matches!(internal, AppError::Internal(_)));
}

#[tokio::test]
async fn test_app_error_status_codes() {
    use axum::response::IntoResponse;

    let cases = [
        (AppError::validation("bad input"), StatusCode::BAD_REQUEST),
        (AppError::conflict("Role"), StatusCode::CONFLICT),
        (AppError::NotFound, StatusCode::NOT_FOUND),
        (AppError::InvalidCredentials, StatusCode::UNAUTHORIZED),
        (
            AppError::internal("boom"),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
    ];

    for (error, expected) in cases {
        let response = error.into_response();
        assert_eq!(response.status(), expected);
    }
}

#[tokio::test]
async fn test_conflict_error_message() {
    let error = AppError::conflict("Username");
    assert_eq!(error.to_string(), "Username already exists");
}
