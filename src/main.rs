mod api;
mod cli;
mod core;
mod journal;
mod prelude;
mod snapshot;

use clap::{Parser, crate_version};

use crate::{
    api::solax,
    cli::Args,
    core::{
        limits::{CallBudget, pacing_interval},
        monitor::Monitor,
    },
    journal::FileJournal,
    prelude::*,
    snapshot::FileSnapshot,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    let args = Args::parse();
    info!(version = crate_version!(), "starting…");

    let api = solax::Api::new(args.api.url, &args.api.token_id, &args.api.serial_number)?;
    Monitor::builder()
        .poller(api)
        .snapshot(FileSnapshot::new(args.output_path))
        .journal(FileJournal::new(args.log_path))
        .budget(CallBudget::new(args.limits.max_calls_per_day))
        .pacing(pacing_interval(args.limits.max_calls_per_minute))
        .build()
        .run()
        .await
}
