//! Service container - Centralized service wiring.
//!
//! Wires the domain services to their storage collaborators through
//! explicit constructor arguments; there is no framework-managed registry.

use std::sync::Arc;

use super::{AuthService, Authenticator, RoleManager, RoleService, UserManager, UserService};
use crate::infra::{RoleStore, UserStore};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
///
/// Provides centralized access to all application services.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get role service
    fn roles(&self) -> Arc<dyn RoleService>;

    /// Get user service
    fn users(&self) -> Arc<dyn UserService>;

    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    role_service: Arc<dyn RoleService>,
    user_service: Arc<dyn UserService>,
    auth_service: Arc<dyn AuthService>,
}

impl Services {
    /// Create a new service container with manually injected services
    pub fn new(
        role_service: Arc<dyn RoleService>,
        user_service: Arc<dyn UserService>,
        auth_service: Arc<dyn AuthService>,
    ) -> Self {
        Self {
            role_service,
            user_service,
            auth_service,
        }
    }

    /// Create service container from a database connection
    pub fn from_connection(db: sea_orm::DatabaseConnection) -> Self {
        let role_repo = Arc::new(RoleStore::new(db.clone()));
        let user_repo = Arc::new(UserStore::new(db));

        let role_service: Arc<dyn RoleService> = Arc::new(RoleManager::new(role_repo));
        let user_service = Arc::new(UserManager::new(user_repo.clone(), role_service.clone()));
        let auth_service = Arc::new(Authenticator::new(user_repo));

        Self {
            role_service,
            user_service,
            auth_service,
        }
    }
}

impl ServiceContainer for Services {
    fn roles(&self) -> Arc<dyn RoleService> {
        self.role_service.clone()
    }

    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }
}
