//! Concrete collaborators and request helpers.
//!
//! - [`key_hasher`] - SHA-256 derived short keys
//! - [`url_validator`] - Target URL syntax checks
//! - [`user_agent`] - Browser and platform classification

pub mod key_hasher;
pub mod url_validator;
pub mod user_agent;

pub use key_hasher::Sha256KeyHasher;
pub use url_validator::HttpUrlValidator;
pub use user_agent::{ClientInfo, parse_user_agent};
