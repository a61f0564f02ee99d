use chrono::NaiveDateTime;

use crate::schedule::{clock, Prayer, PrayerSchedule};

/// The upcoming prayer boundary and the formatted time remaining.
///
/// Derived on every tick, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextPrayer {
    pub name: Prayer,
    pub time_left: String,
}

impl std::fmt::Display for NextPrayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} is in {}", self.name, self.time_left)
    }
}

/// Scans the five daily prayers in canonical order and returns the first
/// whose time lies strictly after `now`, with its countdown.
///
/// When all five have passed the answer is Fajr with the literal
/// "tomorrow"; no next-day timestamp is computed. Entries whose display
/// time does not parse are skipped.
pub fn next_prayer(schedule: &PrayerSchedule, now: NaiveDateTime) -> NextPrayer {
    for prayer in Prayer::DAILY {
        let Some(time) = clock::parse_display(schedule.time_of(prayer)) else {
            continue;
        };

        let at = now.date().and_time(time);

        if at > now {
            return NextPrayer {
                name: prayer,
                time_left: clock::countdown(at, now),
            };
        }
    }

    NextPrayer {
        name: Prayer::Fajr,
        time_left: "tomorrow".to_string(),
    }
}

/// The row the deck highlights: the first of the six boundaries (sunrise
/// included) that has not passed, falling back to Fajr once all have.
pub fn current_highlight(schedule: &PrayerSchedule, now: NaiveDateTime) -> Prayer {
    Prayer::ALL
        .into_iter()
        .find(|prayer| !clock::has_passed(schedule.time_of(*prayer), now))
        .unwrap_or(Prayer::Fajr)
}
