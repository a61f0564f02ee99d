use log::{debug, info};
use reqwest::StatusCode;
use serde::Deserialize;

use crate::{api::Settings, errors::UpdateError};

/// zippopotam.us response body. Field names carry spaces on the wire.
#[derive(Debug, Deserialize)]
pub struct GeoResponse {
    #[serde(rename = "country abbreviation")]
    pub country_abbreviation: String,
    #[serde(default)]
    pub places: Vec<GeoPlace>,
}

#[derive(Debug, Deserialize)]
pub struct GeoPlace {
    #[serde(rename = "place name")]
    pub place_name: String,
    #[serde(rename = "state abbreviation")]
    pub state_abbreviation: String,
    /// Coordinates arrive as strings.
    pub latitude: String,
    pub longitude: String,
}

/// A usable place: first entry of the response, coordinates parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub state: String,
    pub country: String,
}

impl GeoResponse {
    /// Extracts the first place. Missing places or non-numeric coordinates
    /// count as a malformed body.
    pub fn into_place(self) -> Result<Place, UpdateError> {
        let place = self
            .places
            .into_iter()
            .next()
            .ok_or(UpdateError::MalformedPlaces)?;

        let latitude = place
            .latitude
            .parse::<f64>()
            .map_err(|_| UpdateError::MalformedPlaces)?;

        let longitude = place
            .longitude
            .parse::<f64>()
            .map_err(|_| UpdateError::MalformedPlaces)?;

        Ok(Place {
            latitude,
            longitude,
            city: place.place_name,
            state: place.state_abbreviation,
            country: self.country_abbreviation,
        })
    }
}

/// Resolves a validated ZIP code to coordinates and a display place.
pub async fn resolve(
    client: &reqwest::Client,
    settings: &Settings,
    zip: &str,
) -> Result<Place, UpdateError> {
    let url = format!("{}/{}", settings.geocoding_url, zip);
    debug!("geocoding request: {}", url);

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(UpdateError::GeocodingConnection)?;

    let status = response.status();

    if status == StatusCode::NOT_FOUND {
        return Err(UpdateError::ZipNotFound);
    }

    if !status.is_success() {
        return Err(UpdateError::GeocodingStatus(status));
    }

    let body = response
        .json::<GeoResponse>()
        .await
        .map_err(|_| UpdateError::MalformedPlaces)?;

    let place = body.into_place()?;

    info!(
        "{} resolved to {}, {} (lat={:.4} long={:.4})",
        zip, place.city, place.state, place.latitude, place.longitude
    );

    Ok(place)
}
