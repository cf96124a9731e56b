//! Shared types for consistent API responses.

mod response;

pub use response::{ApiResponse, Created, MessageResponse, NoContent};
