//! Infrastructure layer - External systems integration
//!
//! This module handles the external system concerns:
//! - Database connection and migrations
//! - Repositories over the two record kinds (users, roles)

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{RoleRepository, RoleStore, UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockRoleRepository, MockUserRepository};
