//! User repository - persistence contract and SeaORM implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set, SqlErr,
};
use uuid::Uuid;

use crate::domain::{Role, User};
use crate::errors::{AppError, AppResult};

use super::entities::role::Entity as RoleEntity;
use super::entities::user::{self, Entity as UserEntity};

/// User persistence contract.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by primary key
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find user by exact username
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Combined lookup on exact equality of username and password
    async fn find_by_credentials(&self, username: &str, password: &str)
        -> AppResult<Option<User>>;

    /// Whether any user holds the given full name
    async fn exists_by_full_name(&self, full_name: &str) -> AppResult<bool>;

    /// List all users in storage order
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Insert a new user, assigning its identifier
    async fn insert(
        &self,
        username: String,
        password: String,
        full_name: String,
        role: Role,
    ) -> AppResult<User>;

    /// Overwrite an existing user record
    async fn update(&self, user: User) -> AppResult<User>;

    /// Delete user by primary key
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete SeaORM-backed user repository.
///
/// Users embed a copy of their role; reads join the roles table to rebuild
/// it. A user whose role row has been deleted is a documented inconsistency:
/// single lookups surface it as an internal error, list reads skip the row
/// with a warning.
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn assemble(row: (user::Model, Option<super::entities::role::Model>)) -> AppResult<User> {
        match row {
            (model, Some(role)) => Ok(User::from((model, role))),
            (model, None) => Err(AppError::internal(format!(
                "user {} references missing role {}",
                model.id, model.role_id
            ))),
        }
    }
}

fn map_write_err(e: sea_orm::DbErr) -> AppError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::conflict("User"),
        _ => AppError::from(e),
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let row = UserEntity::find_by_id(id)
            .find_also_related(RoleEntity)
            .one(&self.db)
            .await?;

        row.map(Self::assemble).transpose()
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let row = UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .find_also_related(RoleEntity)
            .one(&self.db)
            .await?;

        row.map(Self::assemble).transpose()
    }

    async fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> AppResult<Option<User>> {
        let row = UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .filter(user::Column::Password.eq(password))
            .find_also_related(RoleEntity)
            .one(&self.db)
            .await?;

        row.map(Self::assemble).transpose()
    }

    async fn exists_by_full_name(&self, full_name: &str) -> AppResult<bool> {
        let count = UserEntity::find()
            .filter(user::Column::FullName.eq(full_name))
            .count(&self.db)
            .await?;
        Ok(count > 0)
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let rows = UserEntity::find()
            .find_also_related(RoleEntity)
            .all(&self.db)
            .await?;

        let users = rows
            .into_iter()
            .filter_map(|(model, role)| match role {
                Some(role) => Some(User::from((model, role))),
                None => {
                    tracing::warn!(
                        user_id = %model.id,
                        role_id = %model.role_id,
                        "user references a missing role, skipping"
                    );
                    None
                }
            })
            .collect();

        Ok(users)
    }

    async fn insert(
        &self,
        username: String,
        password: String,
        full_name: String,
        role: Role,
    ) -> AppResult<User> {
        let now = Utc::now();
        let active = user::ActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(username),
            password: Set(password),
            full_name: Set(full_name),
            role_id: Set(role.id),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active.insert(&self.db).await.map_err(map_write_err)?;

        Ok(User {
            id: model.id,
            username: model.username,
            password: model.password,
            full_name: model.full_name,
            role,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }

    async fn update(&self, user: User) -> AppResult<User> {
        let role = user.role;
        let active = user::ActiveModel {
            id: Set(user.id),
            username: Set(user.username),
            password: Set(user.password),
            full_name: Set(user.full_name),
            role_id: Set(role.id),
            created_at: Set(user.created_at),
            updated_at: Set(Utc::now()),
        };

        let model = active.update(&self.db).await.map_err(map_write_err)?;

        Ok(User {
            id: model.id,
            username: model.username,
            password: model.password,
            full_name: model.full_name,
            role,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = UserEntity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
