//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::role::{Role, RoleResponse};

/// User domain entity
///
/// An account with credentials and exactly one role. The role is a copy of
/// the reference resolved at creation time; deleting or renaming the role
/// later does not touch existing users.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    /// Stored and compared verbatim; hashing is out of scope for this service
    #[serde(skip_serializing)]
    pub password: String,
    pub full_name: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User creation request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    /// Username (unique)
    #[validate(length(min = 1, message = "Username is required"))]
    #[schema(example = "alice")]
    pub username: String,
    /// Password (stored verbatim)
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "pw1")]
    pub password: String,
    /// Full display name (unique)
    #[validate(length(min = 1, message = "Full name is required"))]
    #[schema(example = "Alice A")]
    pub full_name: String,
    /// Identifier of an existing role
    pub role_id: Uuid,
}

/// User replacement request (PUT semantics: all fields overwritten)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ReplaceUserRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    #[validate(length(min = 1, message = "Full name is required"))]
    pub full_name: String,
    /// Identifier of an existing role
    pub role_id: Uuid,
}

/// User response (safe to return to client, never includes the password)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    /// Unique user identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    /// Username
    #[schema(example = "alice")]
    pub username: String,
    /// Full display name
    #[schema(example = "Alice A")]
    pub full_name: String,
    /// Role assigned to this user
    pub role: RoleResponse,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            full_name: user.full_name,
            role: RoleResponse::from(user.role),
            created_at: user.created_at,
        }
    }
}
