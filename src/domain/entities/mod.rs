//! Core domain entities.
//!
//! - [`ShortUrl`] - A stored short URL mapping
//! - [`ShortUrlProperties`] - Options carried by a creation request
//! - [`Click`] - A recorded redirect
//!
//! Creation inputs use separate structs (`NewClick`) the same way the
//! repositories expect them.

pub mod click;
pub mod short_url;

pub use click::{Click, NewClick};
pub use short_url::{ShortUrl, ShortUrlProperties};
