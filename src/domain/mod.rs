//! Domain layer - Core business entities
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod role;
pub mod user;

pub use role::{CreateRoleRequest, Role, RoleResponse, UpdateRoleRequest};
pub use user::{CreateUserRequest, ReplaceUserRequest, User, UserResponse};
