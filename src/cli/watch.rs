use clap::{Arg, ArgAction};
use lazy_static::lazy_static;

lazy_static! {
    pub static ref WATCH_ARGS: Vec<Arg> = vec![
        Arg::new("once")
            .long("once")
            .action(ArgAction::SetTrue)
            .help("Render the schedule once and exit, without the live countdown."),
    ];
}
