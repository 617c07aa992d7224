//! HTTP request handlers.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod bulk;
pub mod health;
pub mod link;
pub mod qr;
pub mod redirect;

pub use bulk::{bulk_handler, fast_bulk_handler};
pub use health::health_handler;
pub use link::{create_link_handler, link_info_handler, link_status_handler};
pub use qr::qr_handler;
pub use redirect::redirect_handler;
