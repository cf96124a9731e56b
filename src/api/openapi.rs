//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{auth_handler, role_handler, user_handler};
use crate::domain::{
    CreateRoleRequest, CreateUserRequest, ReplaceUserRequest, RoleResponse, UpdateRoleRequest,
    UserResponse,
};

/// OpenAPI documentation for the User Administration API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Administration API",
        version = "0.1.0",
        description = "User and role administration with Axum, SeaORM, and clean architecture",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT"),
        contact(name = "API Support", email = "support@example.com")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Authentication endpoints
        auth_handler::login,
        // Role endpoints
        role_handler::create_role,
        role_handler::list_roles,
        role_handler::get_role,
        role_handler::update_role,
        role_handler::delete_role,
        // User endpoints
        user_handler::create_user,
        user_handler::list_users,
        user_handler::get_user,
        user_handler::replace_user,
        user_handler::delete_user,
    ),
    components(
        schemas(
            // Domain types
            RoleResponse,
            CreateRoleRequest,
            UpdateRoleRequest,
            UserResponse,
            CreateUserRequest,
            ReplaceUserRequest,
            // Auth types
            auth_handler::LoginRequest,
            auth_handler::LoginResponse,
        )
    ),
    tags(
        (name = "Authentication", description = "Username and password login"),
        (name = "Roles", description = "Role management operations"),
        (name = "Users", description = "User management operations")
    )
)]
pub struct ApiDoc;
