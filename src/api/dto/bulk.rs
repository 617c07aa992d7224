//! DTOs for the bulk conversion endpoints.

use serde::{Deserialize, Serialize};

/// Form body of `POST /api/bulk` and `POST /api/fast-bulk`.
#[derive(Debug, Deserialize)]
pub struct BulkForm {
    #[serde(default)]
    pub csv: String,
}

/// Converted CSV, or the shape error for a rejected payload.
#[derive(Debug, Serialize, Deserialize)]
pub struct BulkResponse {
    pub csv: String,
}
