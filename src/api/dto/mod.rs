//! Data Transfer Objects for API requests and responses.
//!
//! Request bodies are HTML-form encoded and checked with `validator`;
//! responses are JSON.

pub mod bulk;
pub mod health;
pub mod link;
