//! REST API layer for HTTP request/response handling.
//!
//! # Modules
//!
//! - [`dto`] - Form and JSON bodies
//! - [`extract`] - Shared request extractors
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Rate limiting and tracing
//! - [`routes`] - `/api` route configuration

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
