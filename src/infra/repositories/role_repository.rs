//! Role repository - persistence contract and SeaORM implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set, SqlErr,
};
use uuid::Uuid;

use crate::domain::Role;
use crate::errors::{AppError, AppResult};

use super::entities::role::{self, Entity as RoleEntity};

/// Role persistence contract.
///
/// Identifiers are assigned here on insert; the domain services never
/// invent them. Name lookups expect an already-normalized name.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Find role by primary key
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Role>>;

    /// Find role by exact (normalized) name
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Role>>;

    /// List all roles in storage order
    async fn list(&self) -> AppResult<Vec<Role>>;

    /// Insert a new role, assigning its identifier
    async fn insert(&self, name: String, permissions: Vec<String>) -> AppResult<Role>;

    /// Overwrite an existing role record
    async fn update(&self, role: Role) -> AppResult<Role>;

    /// Delete role by primary key
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete SeaORM-backed role repository.
pub struct RoleStore {
    db: DatabaseConnection,
}

impl RoleStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Map a write failure, turning the unique-constraint backstop into the
/// same Conflict outcome as the in-service pre-check.
fn map_write_err(e: sea_orm::DbErr) -> AppError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::conflict("Role"),
        _ => AppError::from(e),
    }
}

#[async_trait]
impl RoleRepository for RoleStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Role>> {
        let model = RoleEntity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Role::from))
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Role>> {
        let model = RoleEntity::find()
            .filter(role::Column::Name.eq(name))
            .one(&self.db)
            .await?;
        Ok(model.map(Role::from))
    }

    async fn list(&self) -> AppResult<Vec<Role>> {
        let models = RoleEntity::find().all(&self.db).await?;
        Ok(models.into_iter().map(Role::from).collect())
    }

    async fn insert(&self, name: String, permissions: Vec<String>) -> AppResult<Role> {
        let now = Utc::now();
        let active = role::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name),
            permissions: Set(serde_json::json!(permissions)),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active.insert(&self.db).await.map_err(map_write_err)?;
        Ok(model.into())
    }

    async fn update(&self, role: Role) -> AppResult<Role> {
        let active = role::ActiveModel {
            id: Set(role.id),
            name: Set(role.name),
            permissions: Set(serde_json::json!(role.permissions)),
            created_at: Set(role.created_at),
            updated_at: Set(Utc::now()),
        };

        let model = active.update(&self.db).await.map_err(map_write_err)?;
        Ok(model.into())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = RoleEntity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
