use clap::{Arg, ArgAction};
use lazy_static::lazy_static;

lazy_static! {
    pub static ref LOCATION_ARGS: Vec<Arg> = vec![
        Arg::new("zip")
            .short('z')
            .long("zip")
            .value_name("ZIP")
            .required(false)
            .help(
                "Update location: resolve this 5-digit US ZIP code, fetch today's
prayer times, save them, then display them."
            ),
        Arg::new("sample")
            .long("sample")
            .action(ArgAction::SetTrue)
            .help(
                "Save the built-in sample schedule (New York, NY) without calling
either service. Combine with --zip to record that ZIP code as-is."
            ),
    ];
}
