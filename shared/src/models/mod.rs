//! Data models
//!
//! Shared between the core and the embedding application. Field names
//! serialize in camelCase to match the store's JSON records.

pub mod app_config;
pub mod cost;
pub mod inventory;
pub mod order;
pub mod permissions;
pub mod role;
pub mod user;

// Re-exports
pub use app_config::*;
pub use cost::*;
pub use inventory::*;
pub use order::*;
pub use permissions::*;
pub use role::*;
pub use user::*;
