use std::io::Write;

use chrono::{Local, NaiveDateTime};

use log::{debug, info};

use tokio::{sync::watch::Receiver as WatchRx, time::interval};

pub mod runtime;
pub mod settings;

use runtime::Runtime;
use settings::Settings;

use crate::{
    schedule::{clock, next, next::NextPrayer, Prayer, PrayerSchedule},
    store::Bundle,
};

/// Everything the deck shows for one instant, derived fresh on every tick.
#[derive(Debug, Clone, PartialEq)]
pub struct DeckState {
    /// Row the deck highlights ("Time for ..."), sunrise included.
    pub highlight: Prayer,
    /// Upcoming prayer and its countdown.
    pub next: NextPrayer,
    pub rows: Vec<DeckRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeckRow {
    pub prayer: Prayer,
    pub time: String,
    pub passed: bool,
}

impl DeckState {
    pub fn derive(schedule: &PrayerSchedule, now: NaiveDateTime) -> Self {
        let rows = Prayer::ALL
            .into_iter()
            .map(|prayer| {
                let time = schedule.time_of(prayer);
                DeckRow {
                    prayer,
                    time: time.to_string(),
                    passed: clock::has_passed(time, now),
                }
            })
            .collect();

        Self {
            highlight: next::current_highlight(schedule, now),
            next: next::next_prayer(schedule, now),
            rows,
        }
    }

    pub fn status_line(&self) -> String {
        self.next.to_string()
    }

    /// The full deck needs re-rendering when the highlight moves or any
    /// passed marker flips (countdown-only changes just rewrite the status
    /// line).
    fn deck_changed(&self, prev: &DeckState) -> bool {
        self.highlight != prev.highlight || self.rows != prev.rows
    }
}

/// Drives the Display screen: renders the deck, then re-derives
/// passage/next-prayer/countdown every second until shutdown.
pub struct Watcher {
    rtm: Runtime,
    settings: Settings,
    bundle: Bundle,
    shutdown: WatchRx<bool>,
}

impl Watcher {
    /// Builds new [Watcher] over the active bundle.
    pub fn new(settings: Settings, bundle: Bundle, shutdown: WatchRx<bool>) -> Self {
        Self {
            rtm: Runtime::new(),
            settings,
            bundle,
            shutdown,
        }
    }

    pub async fn run(&mut self) {
        debug!("{} - salat deck deployed", self.rtm.deploy_time);

        let mut state = DeckState::derive(&self.bundle.schedule, Local::now().naive_local());
        self.render_deck(&state);

        if self.settings.once {
            return;
        }

        print_status(&state);

        let mut ticker = interval(tokio::time::Duration::from_secs(1));
        let mut shutdown = self.shutdown.clone();

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let now = Local::now().naive_local();
                    let tick = DeckState::derive(&self.bundle.schedule, now);

                    if tick.deck_changed(&state) {
                        println!();
                        debug!("deck rolled over, highlighting {}", tick.highlight);
                        self.render_deck(&tick);
                        print_status(&tick);
                    } else if tick.status_line() != state.status_line() {
                        print_status(&tick);
                    }

                    state = tick;
                },
                _ = shutdown.changed() => {
                    println!();
                    info!("salat watch dismantled");
                    break;
                },
            }
        }
    }

    fn render_deck(&self, state: &DeckState) {
        let location = &self.bundle.location;
        let date = &self.bundle.schedule.date;

        println!();
        println!("  {}", location.city);
        println!("  Time for {}", state.highlight);
        println!("  {}", state.next);
        println!();
        println!("  {:-^42}", format!(" {} ", date.hijri));
        println!();

        for row in &state.rows {
            let marker = if row.prayer == state.highlight { ">" } else { " " };
            let passed = if row.passed { "  (passed)" } else { "" };

            println!(
                "  {} {:<8} {:>9}{}",
                marker,
                row.prayer.name(),
                row.time,
                passed
            );
        }

        println!();
        println!("  {} - ISNA method, Hanafi asr", date.readable);
        println!("  prayer times by aladhan.com");
        println!();
    }
}

fn print_status(state: &DeckState) {
    print!("\r  {}        ", state.next);
    let _ = std::io::stdout().flush();
}

#[cfg(test)]
mod test {
    use super::DeckState;
    use crate::schedule::{Prayer, PrayerSchedule};

    use chrono::{NaiveDate, NaiveDateTime};

    fn sample() -> PrayerSchedule {
        PrayerSchedule::sample(NaiveDate::from_ymd_opt(2026, 8, 23).unwrap())
    }

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn test_afternoon_deck_state() {
        let state = DeckState::derive(&sample(), at(23, 14, 0));

        assert_eq!(state.highlight, Prayer::Asr);
        assert_eq!(state.status_line(), "Asr is in 1 hr, 50 min");

        let passed: Vec<bool> = state.rows.iter().map(|r| r.passed).collect();
        assert_eq!(passed, vec![true, true, true, false, false, false]);
    }

    #[test]
    fn test_countdown_change_does_not_redraw_deck() {
        let earlier = DeckState::derive(&sample(), at(23, 14, 0));
        let later = DeckState::derive(&sample(), at(23, 14, 1));

        assert!(!later.deck_changed(&earlier));
        assert_ne!(later.status_line(), earlier.status_line());
    }

    #[test]
    fn test_prayer_passing_redraws_deck() {
        let before = DeckState::derive(&sample(), at(23, 15, 49));
        let after = DeckState::derive(&sample(), at(23, 15, 51));

        assert!(after.deck_changed(&before));
        assert_eq!(after.highlight, Prayer::Maghrib);
        assert_eq!(after.next.name, Prayer::Maghrib);
    }

    #[test]
    fn test_midnight_rollover_redraws_deck() {
        // Late evening: everything passed, highlight fell back to Fajr.
        let evening = DeckState::derive(&sample(), at(23, 23, 59));
        assert_eq!(evening.highlight, Prayer::Fajr);
        assert_eq!(evening.status_line(), "Fajr is in tomorrow");
        assert!(evening.rows.iter().all(|r| r.passed));

        // Past midnight the same times read as today's again.
        let past_midnight = DeckState::derive(&sample(), at(24, 0, 1));
        assert!(past_midnight.rows.iter().all(|r| !r.passed));
        assert!(past_midnight.deck_changed(&evening));
        assert_eq!(past_midnight.status_line(), "Fajr is in 5 hr, 31 min");
    }
}
