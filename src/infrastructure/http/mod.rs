//! Outbound HTTP collaborators built on `reqwest`.

mod reachability_probe;
mod shorten_client;

pub use reachability_probe::HttpReachabilityProbe;
pub use shorten_client::HttpShortenClient;
