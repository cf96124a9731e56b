//! User service - Enforces user invariants and owns the user lifecycle.
//!
//! Invariants: unique username, unique non-blank full name, role reference
//! resolved through the role service at creation time.
//!
//! Unlike role lookup, user lookup treats absence as a normal outcome:
//! `get_user`, `replace_user` and `delete_user` signal it instead of
//! failing loudly.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{CreateUserRequest, ReplaceUserRequest, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

use super::RoleService;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create a user with a resolved role and verbatim-stored password
    async fn create_user(&self, req: CreateUserRequest) -> AppResult<User>;

    /// List all users (never fails, possibly empty)
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Get user by ID; `None` when absent
    async fn get_user(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Overwrite the record at `id` wholesale; `None` when absent (no upsert)
    async fn replace_user(&self, id: Uuid, req: ReplaceUserRequest) -> AppResult<Option<User>>;

    /// Delete user by ID; `false` when absent
    async fn delete_user(&self, id: Uuid) -> AppResult<bool>;
}

/// Concrete implementation of UserService.
///
/// Takes the user storage collaborator and the role service as explicit
/// constructor arguments.
pub struct UserManager {
    users: Arc<dyn UserRepository>,
    roles: Arc<dyn RoleService>,
}

impl UserManager {
    pub fn new(users: Arc<dyn UserRepository>, roles: Arc<dyn RoleService>) -> Self {
        Self { users, roles }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, req: CreateUserRequest) -> AppResult<User> {
        // Checked before any role resolution
        if self.users.find_by_username(&req.username).await?.is_some() {
            return Err(AppError::conflict("Username"));
        }

        if req.full_name.trim().is_empty() {
            return Err(AppError::validation("Full name is required"));
        }

        if self.users.exists_by_full_name(&req.full_name).await? {
            return Err(AppError::conflict("Full name"));
        }

        // NotFound propagates when the role id does not resolve
        let role = self.roles.get_role(req.role_id).await?;

        self.users
            .insert(req.username, req.password, req.full_name, role)
            .await
            .map_err(|e| match e {
                // Storage-level unique constraint is the authoritative
                // backstop for racing pre-checks
                AppError::Conflict(_) => e,
                AppError::Database(err) => {
                    AppError::internal(format!("failed to persist user: {}", err))
                }
                other => other,
            })
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.users.list().await
    }

    async fn get_user(&self, id: Uuid) -> AppResult<Option<User>> {
        self.users.find_by_id(id).await
    }

    async fn replace_user(&self, id: Uuid, req: ReplaceUserRequest) -> AppResult<Option<User>> {
        let Some(existing) = self.users.find_by_id(id).await? else {
            return Ok(None);
        };

        let role = self.roles.get_role(req.role_id).await?;

        // The path id wins over anything embedded in the input
        let replacement = User {
            id: existing.id,
            username: req.username,
            password: req.password,
            full_name: req.full_name,
            role,
            created_at: existing.created_at,
            updated_at: existing.updated_at,
        };

        let saved = self.users.update(replacement).await?;
        Ok(Some(saved))
    }

    async fn delete_user(&self, id: Uuid) -> AppResult<bool> {
        if self.users.find_by_id(id).await?.is_none() {
            return Ok(false);
        }

        match self.users.delete(id).await {
            Ok(()) => Ok(true),
            Err(AppError::NotFound) => Ok(false),
            Err(e) => Err(e),
        }
    }
}
