use clap::{Arg, ArgMatches, ColorChoice, Command};

mod location;
use location::*;

mod watch;
use watch::*;

use crate::{api::settings::Settings as ApiSettings, watcher::settings::Settings as WatchSettings};

use std::path::PathBuf;

pub struct Cli {
    /// Arguments passed by user
    matches: ArgMatches,
}

impl Cli {
    /// Build new command line interface
    pub fn new() -> Self {
        let cmd = Command::new("zip2salat")
            .version(env!("CARGO_PKG_VERSION"))
            .about("US ZIP code to daily salat times watch")
            .color(ColorChoice::Always)
            .next_help_heading("Location update")
            .args(LOCATION_ARGS.iter())
            .next_help_heading("Display")
            .args(WATCH_ARGS.iter())
            .next_help_heading("Storage")
            .arg(
                Arg::new("store")
                    .long("store")
                    .required(false)
                    .value_name("FILE")
                    .help(
                        "Custom path to the saved schedule.
Default is \"zip2salat.json\" in the working directory.",
                    ),
            );

        Self {
            matches: cmd.get_matches(),
        }
    }

    /// Returns User ZIP code specification
    pub fn zipcode(&self) -> Option<&str> {
        let zip = self.matches.get_one::<String>("zip")?;
        Some(zip.as_str())
    }

    /// True when the built-in sample schedule was requested
    pub fn sample(&self) -> bool {
        self.matches.get_flag("sample")
    }

    pub fn store_path(&self) -> PathBuf {
        if let Some(path) = self.matches.get_one::<String>("store") {
            PathBuf::from(path)
        } else {
            PathBuf::from("zip2salat.json")
        }
    }

    pub fn api_settings(&self) -> ApiSettings {
        ApiSettings::default()
    }

    pub fn watch_settings(&self) -> WatchSettings {
        WatchSettings {
            once: self.matches.get_flag("once"),
        }
    }
}
