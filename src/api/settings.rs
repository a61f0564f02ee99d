use std::time::Duration;

/// Fixed parameters of the two upstream services.
///
/// The calculation method and juristic school are pinned, not user
/// configurable: method 2 (Islamic Society of North America), school 1
/// (Hanafi).
#[derive(Debug, Clone)]
pub struct Settings {
    /// Geocoding endpoint, ZIP appended ("{base}/{zip}").
    pub geocoding_url: String,
    /// Timings endpoint, date appended ("{base}/{DD-MM-YYYY}").
    pub timings_url: String,
    /// Aladhan calculation method.
    pub method: u8,
    /// Aladhan juristic school for Asr.
    pub school: u8,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            geocoding_url: "https://api.zippopotam.us/us".to_string(),
            timings_url: "https://api.aladhan.com/v1/timings".to_string(),
            method: 2,
            school: 1,
            timeout: Duration::from_secs(30),
        }
    }
}
