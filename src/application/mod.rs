//! Application layer services.
//!
//! Services consume the repository traits and collaborator ports from
//! [`crate::domain`] and expose the operations used by HTTP handlers, the
//! bulk pipeline and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::short_url_service::ShortUrlService`] - Creation engine, redirect lookup, status and delete
//! - [`services::shorten_service::ShortenService`] - Creation followed by post-processing enqueue
//! - [`services::bulk_service::BulkService`] - CSV bulk conversion, sequential and concurrent
//! - [`services::qr_service::QrService`] - Rendered QR image reads
//! - [`services::click_service::ClickService`] - Click logging and summaries

pub mod services;
