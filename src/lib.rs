//! Taskboard: client-side task board core.
//!
//! This crate owns the in-memory task list behind a three-column board
//! (pending, in-progress, completed): reloading it from a remote task
//! collection, projecting it into columns, and converting drag-and-drop
//! gestures into status mutations. Persistence and authentication are
//! external collaborators reached through narrow port traits; rendering
//! belongs to a view layer that diffs the board's revisioned task list
//! by stable task identifiers.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task model, validation, and the column projection
//! - **Ports**: Abstract trait interfaces for the task store and the
//!   authentication provider
//! - **Adapters**: In-memory reference implementations of the ports
//!
//! # Modules
//!
//! - [`board`]: The task board domain, ports, adapters, and services

pub mod board;
