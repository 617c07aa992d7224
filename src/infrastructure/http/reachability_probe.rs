//! HTTP reachability probe.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::domain::ports::ReachabilityProbe;

/// Status reported when the target does not answer within the timeout.
pub const STATUS_TIMEOUT: u16 = 504;
/// Status reported when no connection to the target can be opened.
pub const STATUS_UNREACHABLE: u16 = 503;
/// Status reported when the target cannot be turned into a request.
pub const STATUS_MALFORMED: u16 = 400;
/// Status reported for any other transport failure.
pub const STATUS_TRANSPORT_ERROR: u16 = 500;

/// Issues a GET against the target and reports the response status.
///
/// Redirects are followed with reqwest's default policy. The probe never
/// fails; transport errors are mapped to synthetic statuses.
pub struct HttpReachabilityProbe {
    client: Client,
}

impl HttpReachabilityProbe {
    /// Builds a probe whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("qr-shortener/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl ReachabilityProbe for HttpReachabilityProbe {
    async fn check(&self, url: &str) -> u16 {
        match self.client.get(url).send().await {
            Ok(response) => response.status().as_u16(),
            Err(e) => {
                debug!("Reachability probe for {} failed: {}", url, e);
                classify_error(&e)
            }
        }
    }
}

fn classify_error(e: &reqwest::Error) -> u16 {
    if e.is_timeout() {
        STATUS_TIMEOUT
    } else if e.is_connect() {
        STATUS_UNREACHABLE
    } else if e.is_builder() {
        STATUS_MALFORMED
    } else {
        STATUS_TRANSPORT_ERROR
    }
}
