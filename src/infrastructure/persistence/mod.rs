//! Repository implementations.
//!
//! PostgreSQL repositories use SQLx runtime queries against the schema in
//! `migrations/`. The in-memory variants back the service when no database
//! is configured, and the integration tests.
//!
//! # Repositories
//!
//! - [`PgShortUrlRepository`] / [`InMemoryShortUrlRepository`] - Short URL records
//! - [`PgClickRepository`] / [`InMemoryClickRepository`] - Redirect click log

pub mod memory_click_repository;
pub mod memory_short_url_repository;
pub mod pg_click_repository;
pub mod pg_short_url_repository;

pub use memory_click_repository::InMemoryClickRepository;
pub use memory_short_url_repository::InMemoryShortUrlRepository;
pub use pg_click_repository::PgClickRepository;
pub use pg_short_url_repository::PgShortUrlRepository;
