//! Role domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Role domain entity
///
/// A named bundle of permission strings assigned to users. The name is
/// upper-cased before storage and comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: Uuid,
    pub name: String,
    pub permissions: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Role {
    /// Normalize a role name for storage and comparison.
    pub fn normalize_name(name: &str) -> String {
        name.to_uppercase()
    }
}

/// Role creation request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateRoleRequest {
    /// Role name (stored upper-cased, unique)
    #[validate(length(min = 1, message = "Role name is required"))]
    #[schema(example = "admin")]
    pub name: String,
    /// Permission strings, at least one required
    #[schema(example = json!(["READ", "WRITE"]))]
    pub permissions: Vec<String>,
}

/// Role update request (wholesale replacement of name and permissions)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateRoleRequest {
    /// New role name (stored upper-cased, unique)
    #[validate(length(min = 1, message = "Role name is required"))]
    #[schema(example = "auditor")]
    pub name: String,
    /// Replacement permission strings, at least one required
    #[schema(example = json!(["READ"]))]
    pub permissions: Vec<String>,
}

/// Role response (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RoleResponse {
    /// Unique role identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    /// Normalized role name
    #[schema(example = "ADMIN")]
    pub name: String,
    /// Permission strings
    pub permissions: Vec<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<Role> for RoleResponse {
    fn from(role: Role) -> Self {
        Self {
            id: role.id,
            name: role.name,
            permissions: role.permissions,
            created_at: role.created_at,
        }
    }
}
