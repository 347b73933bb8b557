//! # activity-api
//!
//! Public read-only REST API built with Axum.
//!
//! The crate does not own any storage: callers build a `ServiceContext` from
//! their own store implementations and hand it to `run` or `create_app`.
//! API-key checks and rate limiting are left to layers the embedding
//! application adds around the returned router.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, run, run_server};
pub use state::AppState;
