//! Authentication service - Verifies username/password pairs.
//!
//! A single combined lookup on exact equality of both fields. Failures are
//! reported uniformly: callers cannot tell an unknown username from a wrong
//! password. Pure read, no side effects, no lockout or retry limiting.

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// Minimal identity returned after successful authentication
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuthenticatedUser {
    /// Authenticated username
    #[schema(example = "alice")]
    pub username: String,
    /// Name of the user's role
    #[schema(example = "ADMIN")]
    pub role: String,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Verify credentials; on any miss return the uniform failure,
    /// never partial information
    async fn authenticate(&self, username: &str, password: &str) -> AppResult<AuthenticatedUser>;
}

/// Concrete implementation of AuthService.
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
}

impl Authenticator {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn authenticate(&self, username: &str, password: &str) -> AppResult<AuthenticatedUser> {
        let user = self.users.find_by_credentials(username, password).await?;

        match user {
            Some(user) => Ok(AuthenticatedUser {
                username: user.username,
                role: user.role.name,
            }),
            None => Err(AppError::InvalidCredentials),
        }
    }
}
