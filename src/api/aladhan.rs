use chrono::NaiveDate;
use log::{debug, info, warn};
use serde::Deserialize;

use crate::{
    api::{geocoding::Place, Settings},
    errors::UpdateError,
    schedule::{clock, PrayerSchedule, ScheduleDate},
};

/// aladhan.com timings response envelope.
#[derive(Debug, Deserialize)]
pub struct TimingsResponse {
    pub data: Option<TimingsData>,
}

#[derive(Debug, Deserialize)]
pub struct TimingsData {
    pub timings: Option<Timings>,
    pub date: Option<ApiDate>,
}

/// The six timings used, 24-hour strings, possibly suffixed with timezone
/// text. The service sends more keys (Imsak, Midnight, ...); they are
/// ignored.
#[derive(Debug, Deserialize)]
pub struct Timings {
    #[serde(rename = "Fajr")]
    pub fajr: String,
    #[serde(rename = "Sunrise")]
    pub sunrise: String,
    #[serde(rename = "Dhuhr")]
    pub dhuhr: String,
    #[serde(rename = "Asr")]
    pub asr: String,
    #[serde(rename = "Maghrib")]
    pub maghrib: String,
    #[serde(rename = "Isha")]
    pub isha: String,
}

/// Date block of the response; every part may be absent.
#[derive(Debug, Default, Deserialize)]
pub struct ApiDate {
    #[serde(default)]
    pub readable: Option<String>,
    #[serde(default)]
    pub hijri: Option<Hijri>,
}

#[derive(Debug, Deserialize)]
pub struct Hijri {
    #[serde(default)]
    pub weekday: Option<Localized>,
    #[serde(default)]
    pub month: Option<Localized>,
    #[serde(default)]
    pub day: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Localized {
    #[serde(default)]
    pub en: Option<String>,
}

impl TimingsResponse {
    /// Builds the display schedule. A missing data/timings block is a
    /// malformed body; absent date parts degrade to fallbacks instead.
    pub fn into_schedule(self, today: NaiveDate) -> Result<PrayerSchedule, UpdateError> {
        let data = self.data.ok_or(UpdateError::MalformedTimings)?;
        let timings = data.timings.ok_or(UpdateError::MalformedTimings)?;

        let date = data.date.unwrap_or_default();

        let readable = date
            .readable
            .unwrap_or_else(|| today.format("%a %b %d %Y").to_string());

        let hijri = match date.hijri {
            Some(hijri) => hijri.display(),
            None => "Islamic Date".to_string(),
        };

        Ok(PrayerSchedule {
            fajr: display("Fajr", timings.fajr),
            sunrise: display("Sunrise", timings.sunrise),
            dhuhr: display("Dhuhr", timings.dhuhr),
            asr: display("Asr", timings.asr),
            maghrib: display("Maghrib", timings.maghrib),
            isha: display("Isha", timings.isha),
            date: ScheduleDate { readable, hijri },
        })
    }
}

impl Hijri {
    /// "{weekday}, {month} {day}, {year}", absent parts left empty.
    fn display(self) -> String {
        let weekday = self.weekday.and_then(|w| w.en).unwrap_or_default();
        let month = self.month.and_then(|m| m.en).unwrap_or_default();
        let day = self.day.unwrap_or_default();
        let year = self.year.unwrap_or_default();

        format!("{}, {} {}, {}", weekday, month, day, year)
    }
}

fn display(name: &str, raw: String) -> String {
    let converted = clock::to_12h(&raw);

    if converted.is_fallback() {
        warn!("{} timing kept verbatim, not a 24-hour time: {:?}", name, raw);
    }

    converted.into_display()
}

/// Fetches the timings for one day at the given coordinates.
pub async fn fetch(
    client: &reqwest::Client,
    settings: &Settings,
    date: NaiveDate,
    place: &Place,
) -> Result<TimingsResponse, UpdateError> {
    let day = date.format("%d-%m-%Y").to_string();
    let url = format!("{}/{}", settings.timings_url, day);

    info!("fetching prayer times for {}", day);
    debug!("timings request: {}", url);

    let response = client
        .get(&url)
        .query(&[
            ("latitude", place.latitude.to_string()),
            ("longitude", place.longitude.to_string()),
            ("method", settings.method.to_string()),
            ("school", settings.school.to_string()),
        ])
        .send()
        .await
        .map_err(UpdateError::TimingsConnection)?;

    let status = response.status();

    if !status.is_success() {
        return Err(UpdateError::TimingsStatus(status));
    }

    response
        .json::<TimingsResponse>()
        .await
        .map_err(|_| UpdateError::MalformedTimings)
}
