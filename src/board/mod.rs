//! Task board core.
//!
//! This module implements the client side of a three-column task board:
//! reloading the task list from a remote collection after every mutation,
//! projecting it into status columns, and converting drag-and-drop
//! gestures into status patches. Persistence and authentication stay
//! behind port traits. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
