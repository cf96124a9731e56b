//! Services layer - Application use cases and business logic
//!
//! Each domain service enforces the invariants of its entity and takes its
//! collaborators as explicit constructor arguments.

mod auth_service;
mod container;
mod role_service;
mod user_service;

pub use auth_service::{AuthService, AuthenticatedUser, Authenticator};
pub use container::{ServiceContainer, Services};
pub use role_service::{RoleManager, RoleService};
pub use user_service::{UserManager, UserService};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
