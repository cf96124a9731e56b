//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod role;
pub mod user;

// Re-exports for public API convenience
#[allow(unused_imports)]
pub use role::{ActiveModel as RoleActiveModel, Entity as RoleEntity, Model as RoleModel};
#[allow(unused_imports)]
pub use user::{ActiveModel as UserActiveModel, Entity as UserEntity, Model as UserModel};
