//! HTTP API
//!
//! JSON endpoints over the [`FilmGraph`](crate::service::FilmGraph) facade.
//! Errors are returned as `{"detail": "..."}` with a matching status code.

pub mod auth;
pub mod handler;
pub mod server;

pub use handler::ApiError;
pub use server::{router, AppState, HttpServer};
