#![doc = include_str!("../README.md")]

/*
 * ZIP2SALAT is a daily prayer times watch for US locations.
 * ZIP codes are resolved with the zippopotam.us open API,
 * prayer timings are computed by the aladhan.com API.
 * This tool is shipped under Mozilla Public V2 license.
 */

use std::process::exit;

use env_logger::{Builder, Target};

use log::{error, info, warn};

use chrono::Local;

use tokio::{signal, sync::watch};

mod api;
mod cli;
mod errors;
mod schedule;
mod store;
mod watcher;

use crate::{
    cli::Cli,
    store::{Bundle, Store},
    watcher::Watcher,
};

#[tokio::main]
pub async fn main() {
    let mut builder = Builder::from_default_env();

    builder
        .target(Target::Stdout)
        .format_timestamp_secs()
        .format_module_path(false)
        .init();

    // cli
    let cli = Cli::new();

    // Settings
    let api_settings = cli.api_settings();
    let watch_settings = cli.watch_settings();

    let store = Store::new(cli.store_path());
    let today = Local::now().date_naive();

    // Location update: the stored bundle is only ever replaced on success,
    // a failed update leaves the previous schedule untouched.
    let bundle = if cli.sample() {
        let bundle = Bundle::sample(cli.zipcode(), today);

        info!("using sample schedule for {}", bundle.location.city);

        if let Err(e) = store.save(&bundle) {
            warn!("failed to save schedule: {}", e);
        }

        Some(bundle)
    } else if let Some(zip) = cli.zipcode() {
        let client = api::client(&api_settings)
            .unwrap_or_else(|e| panic!("Failed to deploy HTTP client: {}", e));

        match api::resolve_bundle(&client, &api_settings, zip, today).await {
            Ok(bundle) => {
                if let Err(e) = store.save(&bundle) {
                    warn!("failed to save schedule: {}", e);
                }

                Some(bundle)
            },
            Err(e) => {
                error!("{}", e);
                exit(1);
            },
        }
    } else {
        store.load()
    };

    let Some(bundle) = bundle else {
        error!("no saved schedule yet: run with --zip <ZIP> (or --sample) first");
        exit(1);
    };

    // Tokio
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    tokio::spawn(async move {
        signal::ctrl_c()
            .await
            .unwrap_or_else(|e| panic!("Tokio signal handling error: {}", e));

        shutdown_tx
            .send(true)
            .unwrap_or_else(|e| panic!("Tokio: signaling error: {}", e));
    });

    let mut watcher = Watcher::new(watch_settings, bundle, shutdown_rx);

    watcher.run().await;
}
