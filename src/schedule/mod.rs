use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub mod clock;
pub mod next;

/// The six boundaries shown on the deck, in calendar order.
///
/// Sunrise is informational: it is rendered and counts toward the
/// current-prayer highlight, but never as the next prayer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Prayer {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl Prayer {
    /// Deck order, sunrise included.
    pub const ALL: [Prayer; 6] = [
        Prayer::Fajr,
        Prayer::Sunrise,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    /// Selection order for the next-prayer scan: the five daily prayers.
    pub const DAILY: [Prayer; 5] = [
        Prayer::Fajr,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Prayer::Fajr => "Fajr",
            Prayer::Sunrise => "Sunrise",
            Prayer::Dhuhr => "Dhuhr",
            Prayer::Asr => "Asr",
            Prayer::Maghrib => "Maghrib",
            Prayer::Isha => "Isha",
        }
    }
}

impl std::fmt::Display for Prayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One day of display times, exactly as rendered ("H:MM AM/PM", or the
/// verbatim upstream string when conversion fell back).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrayerSchedule {
    pub fajr: String,
    pub sunrise: String,
    pub dhuhr: String,
    pub asr: String,
    pub maghrib: String,
    pub isha: String,
    pub date: ScheduleDate,
}

/// Gregorian and Hijri renderings of the schedule day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleDate {
    pub readable: String,
    pub hijri: String,
}

impl PrayerSchedule {
    pub fn time_of(&self, prayer: Prayer) -> &str {
        match prayer {
            Prayer::Fajr => &self.fajr,
            Prayer::Sunrise => &self.sunrise,
            Prayer::Dhuhr => &self.dhuhr,
            Prayer::Asr => &self.asr,
            Prayer::Maghrib => &self.maghrib,
            Prayer::Isha => &self.isha,
        }
    }

    /// The canonical offline schedule, dated `today`.
    pub fn sample(today: NaiveDate) -> Self {
        Self {
            fajr: "5:32 AM".to_string(),
            sunrise: "7:03 AM".to_string(),
            dhuhr: "12:48 PM".to_string(),
            asr: "3:50 PM".to_string(),
            maghrib: "6:25 PM".to_string(),
            isha: "7:42 PM".to_string(),
            date: ScheduleDate {
                readable: today.format("%a %b %d %Y").to_string(),
                hijri: "Thursday, Safar 2, 1440".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Prayer, PrayerSchedule};

    use chrono::NaiveDate;

    #[test]
    fn test_selection_order_excludes_sunrise() {
        assert_eq!(Prayer::DAILY.len(), 5);
        assert!(!Prayer::DAILY.contains(&Prayer::Sunrise));
        assert_eq!(Prayer::DAILY[0], Prayer::Fajr);
        assert_eq!(Prayer::DAILY[4], Prayer::Isha);
    }

    #[test]
    fn test_sample_schedule_is_canonical() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();
        let schedule = PrayerSchedule::sample(today);

        assert_eq!(schedule.fajr, "5:32 AM");
        assert_eq!(schedule.sunrise, "7:03 AM");
        assert_eq!(schedule.dhuhr, "12:48 PM");
        assert_eq!(schedule.asr, "3:50 PM");
        assert_eq!(schedule.maghrib, "6:25 PM");
        assert_eq!(schedule.isha, "7:42 PM");
        assert_eq!(schedule.date.readable, "Sun Aug 23 2026");
        assert_eq!(schedule.date.hijri, "Thursday, Safar 2, 1440");
    }

    #[test]
    fn test_time_of_maps_every_row() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();
        let schedule = PrayerSchedule::sample(today);

        assert_eq!(schedule.time_of(Prayer::Fajr), "5:32 AM");
        assert_eq!(schedule.time_of(Prayer::Sunrise), "7:03 AM");
        assert_eq!(schedule.time_of(Prayer::Isha), "7:42 PM");
    }
}
