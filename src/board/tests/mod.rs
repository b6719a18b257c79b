//! Unit tests for the board module.

mod helpers;
