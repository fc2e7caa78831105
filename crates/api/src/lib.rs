//! Scene editor HTTP server library.
//!
//! Exposes the building blocks (config, state, session, error handling,
//! routes, HTML view) so integration tests and the binary entrypoint can
//! both access them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod loader;
pub mod response;
pub mod router;
pub mod routes;
pub mod session;
pub mod state;
pub mod view;
