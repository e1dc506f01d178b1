use serde::{Deserialize, Serialize};

/// Placeholder value for metadata the page did not yield.
pub const UNKNOWN: &str = "Unknown";

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistBatchRequest {
    /// Missing and `null` both land as `None`; the handler folds them into
    /// the same 400 as an empty list.
    #[serde(default)]
    pub urls: Option<Vec<String>>,
}

/// Per-URL outcome. One record per input URL, same order as the request.
///
/// Serialized untagged: the wire shape is `{url, artist_name,
/// monthly_listeners}` for the first two variants and `{url, error}` for the
/// last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ArtistRecord {
    /// 200 response and both heuristics ran to completion.
    Success {
        url: String,
        artist_name: String,
        monthly_listeners: String,
    },
    /// Final HTTP status was anything other than 200. Placeholders only.
    FetchFailure {
        url: String,
        artist_name: String,
        monthly_listeners: String,
    },
    /// URL parsing, transport, or extraction failed.
    ExtractionError { url: String, error: String },
}

impl ArtistRecord {
    pub fn success(
        url: impl Into<String>,
        artist_name: impl Into<String>,
        monthly_listeners: impl Into<String>,
    ) -> Self {
        ArtistRecord::Success {
            url: url.into(),
            artist_name: artist_name.into(),
            monthly_listeners: monthly_listeners.into(),
        }
    }

    pub fn fetch_failure(url: impl Into<String>) -> Self {
        ArtistRecord::FetchFailure {
            url: url.into(),
            artist_name: UNKNOWN.to_string(),
            monthly_listeners: UNKNOWN.to_string(),
        }
    }

    pub fn extraction_error(url: impl Into<String>, error: impl Into<String>) -> Self {
        ArtistRecord::ExtractionError {
            url: url.into(),
            error: error.into(),
        }
    }
}
