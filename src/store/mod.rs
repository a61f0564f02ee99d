use std::{fs, path::PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use chrono::NaiveDate;

use crate::{errors::StoreError, schedule::PrayerSchedule};

/// The resolved place behind a ZIP code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// 5-digit US ZIP code as entered.
    pub zipcode: String,
    /// Display name, state abbreviation embedded ("New York, NY").
    pub city: String,
    /// Country abbreviation ("US").
    pub country: String,
}

/// The durable unit: a location and its matching schedule, always written
/// and read together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    pub location: Location,
    pub schedule: PrayerSchedule,
}

impl Bundle {
    /// Canonical offline bundle. Records the entered ZIP verbatim when one
    /// was given, else 10001 (New York, NY).
    pub fn sample(zipcode: Option<&str>, today: NaiveDate) -> Self {
        Self {
            location: Location {
                zipcode: zipcode.unwrap_or("10001").to_string(),
                city: "New York, NY".to_string(),
                country: "US".to_string(),
            },
            schedule: PrayerSchedule::sample(today),
        }
    }
}

/// On-disk home of the bundle: one JSON record in one file.
///
/// Read once at startup, overwritten wholesale on every successful update.
/// Writes go through a sibling temp file and a rename so a crash can never
/// leave a half-written record behind.
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the stored bundle. Absent, unreadable, or corrupt files all
    /// read as "no bundle yet": a damaged store must never block startup.
    pub fn load(&self) -> Option<Bundle> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("no stored bundle at {}", self.path.display());
                return None;
            },
            Err(e) => {
                warn!("could not read {}: {}", self.path.display(), e);
                return None;
            },
        };

        match serde_json::from_str::<Bundle>(&contents) {
            Ok(bundle) => {
                debug!(
                    "loaded stored bundle for {} ({})",
                    bundle.location.city, bundle.location.zipcode
                );
                Some(bundle)
            },
            Err(e) => {
                warn!("discarding corrupt bundle at {}: {}", self.path.display(), e);
                None
            },
        }
    }

    /// Replaces the stored bundle. All-or-nothing: serialize first, write a
    /// temp file next to the target, then rename into place.
    pub fn save(&self, bundle: &Bundle) -> Result<(), StoreError> {
        let encoded = serde_json::to_string_pretty(bundle)?;

        let mut tmp = self.path.clone();
        tmp.set_extension("json.tmp");

        fs::write(&tmp, encoded)?;
        fs::rename(&tmp, &self.path)?;

        debug!(
            "stored bundle for {} at {}",
            bundle.location.zipcode,
            self.path.display()
        );
        Ok(())
    }
}
