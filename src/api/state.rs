//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::{AuthService, RoleService, ServiceContainer, Services, UserService};

/// Application state containing all services (DI container).
///
/// Use `from_database()` for recommended initialization with full
/// ServiceContainer support.
#[derive(Clone)]
pub struct AppState {
    /// Role service
    pub role_service: Arc<dyn RoleService>,
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from a database connection.
    ///
    /// This is the recommended way to create AppState as it uses
    /// the ServiceContainer for centralized service wiring.
    pub fn from_database(database: Arc<Database>) -> Self {
        let container = Services::from_connection(database.get_connection());

        Self {
            role_service: container.roles(),
            user_service: container.users(),
            auth_service: container.auth(),
            database,
        }
    }

    /// Create new application state with manually injected services.
    pub fn new(
        role_service: Arc<dyn RoleService>,
        user_service: Arc<dyn UserService>,
        auth_service: Arc<dyn AuthService>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            role_service,
            user_service,
            auth_service,
            database,
        }
    }
}
