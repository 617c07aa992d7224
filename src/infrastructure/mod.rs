//! Infrastructure layer for external integrations.
//!
//! Concrete implementations of the repository traits and collaborator ports
//! defined by the domain layer.
//!
//! # Modules
//!
//! - [`cache`] - QR image stores (Redis and in-memory)
//! - [`http`] - Reachability probe and internal shorten client (reqwest)
//! - [`persistence`] - PostgreSQL and in-memory repositories
//! - [`qr`] - SVG QR renderer

pub mod cache;
pub mod http;
pub mod persistence;
pub mod qr;
