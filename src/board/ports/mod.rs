//! Port contracts the board depends on.
//!
//! Ports keep the remote task collection and the authentication provider
//! behind infrastructure-agnostic interfaces; the board services never
//! see anything more concrete.

pub mod auth;
pub mod store;

pub use auth::{AuthGateway, AuthState, AuthSubscription, UserIdentity};
pub use store::{TaskPatch, TaskStore, TaskStoreError, TaskStoreResult};
