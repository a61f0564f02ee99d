use chrono::{NaiveDateTime, NaiveTime};

/// Outcome of a 24-hour to 12-hour conversion attempt.
///
/// Timings arrive as "HH:MM", possibly with trailing timezone text. When the
/// input does not parse, the original string is carried through unchanged so
/// the deck still shows whatever the service sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Converted {
    /// Reformatted to "H:MM AM/PM".
    Twelve(String),
    /// Input kept verbatim.
    Untouched(String),
}

impl Converted {
    pub fn into_display(self) -> String {
        match self {
            Self::Twelve(s) => s,
            Self::Untouched(s) => s,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Untouched(_))
    }
}

/// Converts a 24-hour "HH:MM" timing to its 12-hour display form.
///
/// Anything after the first space is dropped before parsing ("05:32 (EST)"
/// reads as "05:32"). Hour 0 maps to 12 AM, hour 12 to 12 PM, the rest to
/// hour mod 12; the minute field is carried over verbatim. The hour is not
/// range-checked, only required to be numeric.
pub fn to_12h(raw: &str) -> Converted {
    let clean = raw.split(' ').next().unwrap_or(raw);

    let Some((hh, mm)) = clean.split_once(':') else {
        return Converted::Untouched(raw.to_string());
    };

    let hour = match hh.parse::<u32>() {
        Ok(hour) => hour,
        Err(_) => return Converted::Untouched(raw.to_string()),
    };

    if mm.is_empty() || !mm.bytes().all(|b| b.is_ascii_digit()) {
        return Converted::Untouched(raw.to_string());
    }

    let half = if hour >= 12 { "PM" } else { "AM" };

    let hour12 = match hour % 12 {
        0 => 12,
        hour => hour,
    };

    Converted::Twelve(format!("{}:{} {}", hour12, mm, half))
}

/// Parses an "H:MM AM/PM" display time back to a time of day.
///
/// Returns None for anything else, including the verbatim strings kept by
/// the [to_12h] fallback.
pub fn parse_display(display: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(display.trim(), "%I:%M %p").ok()
}

/// True when the display time, placed on the same calendar day as `now`,
/// lies strictly before `now`.
///
/// The comparison is day-relative: after midnight every stored time reads
/// as today's, so a stale schedule shows all-passed until re-fetched.
/// Unparseable display times never count as passed.
pub fn has_passed(display: &str, now: NaiveDateTime) -> bool {
    match parse_display(display) {
        Some(t) => now.date().and_time(t) < now,
        None => false,
    }
}

/// Formats the time remaining until `target` (known to lie after `now`).
///
/// Whole hours and whole minutes only, no seconds: "1 hr, 25 min", or
/// "25 min" without an hour prefix when under one hour.
pub fn countdown(target: NaiveDateTime, now: NaiveDateTime) -> String {
    let millis = (target - now).num_milliseconds();

    let hours = millis / 3_600_000;
    let minutes = (millis % 3_600_000) / 60_000;

    if hours > 0 {
        format!("{} hr, {} min", hours, minutes)
    } else {
        format!("{} min", minutes)
    }
}

#[cfg(test)]
mod test {
    use super::{countdown, has_passed, parse_display, to_12h, Converted};

    use chrono::{NaiveDate, NaiveDateTime, Timelike};

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 23).unwrap()
    }

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        day().and_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_to_12h_halves() {
        assert_eq!(to_12h("00:05"), Converted::Twelve("12:05 AM".to_string()));
        assert_eq!(to_12h("12:00"), Converted::Twelve("12:00 PM".to_string()));
        assert_eq!(to_12h("05:32"), Converted::Twelve("5:32 AM".to_string()));
        assert_eq!(to_12h("13:07"), Converted::Twelve("1:07 PM".to_string()));
        assert_eq!(to_12h("23:59"), Converted::Twelve("11:59 PM".to_string()));
    }

    #[test]
    fn test_to_12h_strips_timezone_suffix() {
        assert_eq!(
            to_12h("05:32 (EST)"),
            Converted::Twelve("5:32 AM".to_string())
        );
        assert_eq!(to_12h("18:25 +05"), Converted::Twelve("6:25 PM".to_string()));
    }

    #[test]
    fn test_to_12h_fallback_keeps_input() {
        for raw in ["", "late", "5h32", "ab:10", "10:ab", "10:", "10:3x"] {
            let converted = to_12h(raw);
            assert!(converted.is_fallback(), "{:?} should fall back", raw);
            assert_eq!(converted.into_display(), raw);
        }
    }

    #[test]
    fn test_to_12h_out_of_range_hour_converts() {
        // Numeric input is never rejected, matching the modulo arithmetic
        // of the upstream behavior.
        assert_eq!(to_12h("25:00"), Converted::Twelve("1:00 PM".to_string()));
    }

    #[test]
    fn test_round_trip_all_day() {
        for hour in 0..24u32 {
            for minute in 0..60u32 {
                let raw = format!("{:02}:{:02}", hour, minute);

                let display = match to_12h(&raw) {
                    Converted::Twelve(s) => s,
                    Converted::Untouched(s) => panic!("{} did not convert", s),
                };

                let half = if hour >= 12 { "PM" } else { "AM" };
                assert!(display.ends_with(half), "{} -> {}", raw, display);

                let parsed = parse_display(&display)
                    .unwrap_or_else(|| panic!("{} did not parse back", display));

                assert_eq!(parsed.hour(), hour);
                assert_eq!(parsed.minute(), minute);
            }
        }
    }

    #[test]
    fn test_parse_display_rejects_fallback_strings() {
        assert!(parse_display("5:32 AM").is_some());
        assert!(parse_display("12:48 PM").is_some());
        assert!(parse_display("05:32").is_none());
        assert!(parse_display("1:61 PM").is_none());
        assert!(parse_display("late").is_none());
    }

    #[test]
    fn test_has_passed_is_strict() {
        let now = at(14, 0);

        assert!(has_passed("5:32 AM", now));
        assert!(has_passed("12:48 PM", now));
        assert!(!has_passed("3:50 PM", now));

        // Exactly "now" has not passed yet.
        assert!(!has_passed("2:00 PM", now));
    }

    #[test]
    fn test_has_passed_unparseable_never_passes() {
        assert!(!has_passed("garbage", at(23, 59)));
    }

    #[test]
    fn test_countdown_formats() {
        let now = at(14, 0);

        assert_eq!(countdown(at(15, 30), now), "1 hr, 30 min");
        assert_eq!(countdown(at(14, 45), now), "45 min");
        assert_eq!(countdown(at(16, 0), now), "2 hr, 0 min");
        assert_eq!(countdown(at(14, 1), now), "1 min");
    }

    #[test]
    fn test_countdown_floors_partial_minutes() {
        let now = day().and_hms_opt(14, 0, 30).unwrap();

        // 89.5 minutes away: whole hours first, whole minutes on the rest.
        assert_eq!(countdown(at(15, 30), now), "1 hr, 29 min");
    }
}
