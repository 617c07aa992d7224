//! DTOs for the link endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::ShortUrlProperties;

/// Form body of `POST /api/link`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkForm {
    #[validate(length(min = 1, max = 2048, message = "URL must be 1-2048 characters"))]
    pub url: String,

    #[validate(length(max = 255))]
    pub sponsor: Option<String>,

    #[validate(length(max = 100))]
    pub alias: Option<String>,

    /// `"true"` or `"on"` requests a QR code.
    #[serde(rename = "qrBool")]
    pub qr_bool: Option<String>,
}

impl CreateLinkForm {
    pub fn qr_requested(&self) -> bool {
        self.qr_bool
            .as_deref()
            .map(str::trim)
            .is_some_and(|v| v.eq_ignore_ascii_case("true") || v.eq_ignore_ascii_case("on"))
    }

    /// Creation options for this form, attributed to `ip`.
    pub fn properties(&self, ip: Option<String>) -> ShortUrlProperties {
        ShortUrlProperties {
            alias: self.alias.clone(),
            ip,
            sponsor: self.sponsor.clone().filter(|s| !s.is_empty()),
            safe: false,
            qr_enabled: self.qr_requested(),
        }
    }
}

/// Body of a successful `POST /api/link`.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedLinkResponse {
    pub url: String,
    pub properties: CreatedLinkProperties,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CreatedLinkProperties {
    /// URL of the QR image, present when QR generation was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qr: Option<String>,
}

/// Body of `GET /api/link/{key}/status`.
#[derive(Debug, Serialize, Deserialize)]
pub struct LinkStatusResponse {
    pub key: String,
    /// `null` until the first reachability probe completes.
    pub reachability_status: Option<u16>,
}
