//! Postgres-backed user repository with a thin HTTP surface.

pub mod app;
pub mod config;
pub mod state;
pub mod users;
