//! Database connectivity for the workspace.
//!
//! MongoDB is the only backend: connection management, env-sourced
//! configuration, health checks, and startup retry with backoff.

pub mod common;
pub mod mongodb;
