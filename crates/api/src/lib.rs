//! dreampic API server library.
//!
//! Exposes config, error handling, handlers and routes so integration tests
//! and the binary entrypoint build the same router.

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod routes;
