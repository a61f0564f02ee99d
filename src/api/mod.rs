use chrono::NaiveDate;
use log::info;

pub mod aladhan;
pub mod geocoding;
pub mod settings;

pub use settings::Settings;

use crate::{
    errors::UpdateError,
    store::{Bundle, Location},
};

/// Gate before any network call: exactly five ASCII digits.
pub fn validate_zip(zip: &str) -> Result<(), UpdateError> {
    if zip.len() == 5 && zip.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(UpdateError::InvalidZip)
    }
}

/// The full update flow: validate the ZIP, geocode it, fetch the day's
/// timings for the resolved coordinates, and assemble the bundle.
///
/// The two calls are strictly sequential (the second consumes the first's
/// coordinates) and there is no retry: any failure surfaces as one
/// user-visible message and leaves the previously stored bundle untouched.
pub async fn resolve_bundle(
    client: &reqwest::Client,
    settings: &Settings,
    zip: &str,
    today: NaiveDate,
) -> Result<Bundle, UpdateError> {
    validate_zip(zip)?;

    info!("updating location for ZIP {}", zip);

    let place = geocoding::resolve(client, settings, zip).await?;

    let schedule = aladhan::fetch(client, settings, today, &place)
        .await?
        .into_schedule(today)?;

    let location = Location {
        zipcode: zip.to_string(),
        city: format!("{}, {}", place.city, place.state),
        country: place.country,
    };

    Ok(Bundle { location, schedule })
}

/// Builds the HTTP client shared by both calls, with the per-request
/// timeout applied.
pub fn client(settings: &Settings) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder().timeout(settings.timeout).build()
}

#[cfg(test)]
mod test {
    use super::validate_zip;
    use crate::errors::UpdateError;

    #[test]
    fn test_accepts_five_digits() {
        assert!(validate_zip("10001").is_ok());
        assert!(validate_zip("00000").is_ok());
        assert!(validate_zip("90210").is_ok());
    }

    #[test]
    fn test_rejects_everything_else() {
        for zip in ["", "1234", "123456", "1000a", "10 01", "١٢٣٤٥", "-1000"] {
            assert!(
                matches!(validate_zip(zip), Err(UpdateError::InvalidZip)),
                "{:?} should be rejected",
                zip
            );
        }
    }
}
