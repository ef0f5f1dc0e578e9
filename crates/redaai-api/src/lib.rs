//! Typed HTTP clients for the RedaAI backend.
//!
//! The [`client::ApiClient`] wrapper owns the transport concerns
//! (default headers, bearer token injection, timeout, failure
//! classification); the per-feature clients in [`auth`] and [`essay`]
//! are pure request/response shapers on top of it.

pub mod auth;
pub mod client;
pub mod config;
pub mod essay;
pub mod problem;

pub use auth::{AuthApi, HttpAuthApi};
pub use client::ApiClient;
pub use config::ApiConfig;
pub use essay::{EssayApi, HttpEssayApi};
pub use problem::{ApiProblem, ApiResult};
