//! Role service - Enforces role invariants and owns the role lifecycle.
//!
//! Invariants: unique upper-cased name, at least one permission at creation
//! and at every update.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{CreateRoleRequest, Role, UpdateRoleRequest};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::RoleRepository;

/// Role service trait for dependency injection.
#[async_trait]
pub trait RoleService: Send + Sync {
    /// Create a role with a normalized, unique name
    async fn create_role(&self, req: CreateRoleRequest) -> AppResult<Role>;

    /// List all roles (never fails, possibly empty)
    async fn list_roles(&self) -> AppResult<Vec<Role>>;

    /// Get role by ID, failing loudly when absent
    async fn get_role(&self, id: Uuid) -> AppResult<Role>;

    /// Replace name and permissions wholesale
    async fn update_role(&self, id: Uuid, req: UpdateRoleRequest) -> AppResult<Role>;

    /// Delete a role; referencing users are left untouched
    async fn delete_role(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of RoleService.
///
/// Takes its storage collaborator as an explicit constructor argument;
/// there is no ambient registry.
pub struct RoleManager {
    roles: Arc<dyn RoleRepository>,
}

impl RoleManager {
    pub fn new(roles: Arc<dyn RoleRepository>) -> Self {
        Self { roles }
    }
}

#[async_trait]
impl RoleService for RoleManager {
    async fn create_role(&self, req: CreateRoleRequest) -> AppResult<Role> {
        if req.name.trim().is_empty() {
            return Err(AppError::validation("Role name is required"));
        }

        let name = Role::normalize_name(&req.name);
        if self.roles.find_by_name(&name).await?.is_some() {
            return Err(AppError::conflict("Role"));
        }

        if req.permissions.is_empty() {
            return Err(AppError::validation(
                "Role must have at least one permission",
            ));
        }

        self.roles.insert(name, req.permissions).await
    }

    async fn list_roles(&self) -> AppResult<Vec<Role>> {
        self.roles.list().await
    }

    async fn get_role(&self, id: Uuid) -> AppResult<Role> {
        self.roles.find_by_id(id).await?.ok_or_not_found()
    }

    async fn update_role(&self, id: Uuid, req: UpdateRoleRequest) -> AppResult<Role> {
        let existing = self.roles.find_by_id(id).await?.ok_or_not_found()?;

        if req.name.trim().is_empty() {
            return Err(AppError::validation("Role name is required"));
        }

        // Another role (different id) holding the target name is a conflict;
        // renaming a role to its own name is not.
        let name = Role::normalize_name(&req.name);
        if let Some(other) = self.roles.find_by_name(&name).await? {
            if other.id != id {
                return Err(AppError::conflict("Role"));
            }
        }

        if req.permissions.is_empty() {
            return Err(AppError::validation(
                "Role must have at least one permission",
            ));
        }

        let updated = Role {
            id,
            name,
            permissions: req.permissions,
            created_at: existing.created_at,
            updated_at: existing.updated_at,
        };

        self.roles.update(updated).await
    }

    async fn delete_role(&self, id: Uuid) -> AppResult<()> {
        let role = self.roles.find_by_id(id).await?.ok_or_not_found()?;
        self.roles.delete(role.id).await
    }
}
