//! Short URL entity and the options a creation request carries.

/// A stored short URL mapping.
///
/// `key` is unique across the store. It is either the derived hash of
/// `target_url`, a caller-supplied alias, or the QR-upgrade key.
/// `reachability_status` stays `None` until the first probe completes and is
/// the only field mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortUrl {
    pub key: String,
    pub target_url: String,
    pub ip: Option<String>,
    pub sponsor: Option<String>,
    pub safe: bool,
    pub qr_enabled: bool,
    pub reachability_status: Option<u16>,
}

impl ShortUrl {
    /// Creates a record that has not been probed yet.
    pub fn new(key: String, target_url: String, properties: &ShortUrlProperties) -> Self {
        Self {
            key,
            target_url,
            ip: properties.ip.clone(),
            sponsor: properties.sponsor.clone(),
            safe: properties.safe,
            qr_enabled: properties.qr_enabled,
            reachability_status: None,
        }
    }

    /// Returns true once a probe has reported a 2xx or 3xx status.
    pub fn is_reachable(&self) -> bool {
        self.reachability_status
            .is_some_and(|status| (200..400).contains(&status))
    }
}

/// Options supplied alongside the target URL when creating a short URL.
///
/// An empty `alias` is treated the same as no alias.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortUrlProperties {
    pub alias: Option<String>,
    pub ip: Option<String>,
    pub sponsor: Option<String>,
    pub safe: bool,
    pub qr_enabled: bool,
}

impl ShortUrlProperties {
    /// Returns the alias when it is present and non-empty.
    pub fn effective_alias(&self) -> Option<&str> {
        self.alias.as_deref().filter(|alias| !alias.is_empty())
    }
}
