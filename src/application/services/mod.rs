//! Business logic services for the application layer.

pub mod bulk_service;
pub mod click_service;
pub mod qr_service;
pub mod short_url_service;
pub mod shorten_service;

pub use bulk_service::{BulkOutcome, BulkService, InProcessShortenClient, ShortenClient};
pub use click_service::{ClickService, ClickSummary};
pub use qr_service::QrService;
pub use short_url_service::ShortUrlService;
pub use shorten_service::{ShortenOutcome, ShortenService};
