use reqwest::StatusCode;
use thiserror::Error;

/// Failures of the location-update flow.
///
/// Each variant renders as the single message shown to the user; nothing
/// below this boundary ever reaches the terminal. Either the whole bundle
/// is replaced or the previously stored one remains authoritative.
#[derive(Debug, Error)]
pub enum UpdateError {
    /// Rejected before any network call.
    #[error("Please enter a valid 5-digit ZIP code")]
    InvalidZip,

    #[error("Unable to connect to location service. Please check your internet connection.")]
    GeocodingConnection(#[source] reqwest::Error),

    #[error("ZIP code not found. Please enter a valid US ZIP code.")]
    ZipNotFound,

    #[error("Location service error: {}", .0.as_u16())]
    GeocodingStatus(StatusCode),

    /// 2xx geocoding response missing places or carrying non-numeric
    /// coordinates.
    #[error("Invalid response from location service")]
    MalformedPlaces,

    #[error("Unable to connect to prayer times service. Please try again later.")]
    TimingsConnection(#[source] reqwest::Error),

    #[error("Prayer times service error: {}", .0.as_u16())]
    TimingsStatus(StatusCode),

    /// 2xx timings response missing the data/timings fields.
    #[error("Invalid response from prayer times service")]
    MalformedTimings,
}

/// Failures of the on-disk schedule store.
///
/// Only the write path surfaces these: a failed or corrupt read is treated
/// as an absent bundle.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access schedule store: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode schedule store: {0}")]
    Encode(#[from] serde_json::Error),
}
