//! Step definitions for board flow BDD scenarios.

mod given;
mod then;
mod when;
pub mod world;
