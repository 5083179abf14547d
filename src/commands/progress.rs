use anyhow::{Context, Result};
use clap::{Arg, ArgMatches};
use std::thread;
use std::time::Duration;

use crate::core::decorators::runtime;
use crate::core::progress::{self, ProgressOptions};
use crate::core::Config;

/// Arguments shared by every command that draws a progress bar
pub fn progress_args() -> Vec<Arg> {
    vec![
        Arg::new("width")
            .short('w')
            .long("width")
            .help("Number of cells in the bar")
            .allow_negative_numbers(true)
            .value_parser(clap::value_parser!(i64)),
        Arg::new("step")
            .short('s')
            .long("step")
            .help("Minimum progress change between redraws (0.01 to 1)")
            .value_parser(clap::value_parser!(f64)),
        Arg::new("title")
            .short('t')
            .long("title")
            .value_name("TEXT")
            .help("Line printed once above the bar"),
        Arg::new("filled")
            .long("filled")
            .value_name("CHAR")
            .help("Glyph for completed cells"),
        Arg::new("empty")
            .long("empty")
            .value_name("CHAR")
            .help("Glyph for remaining cells"),
    ]
}

/// Options given on the command line; unset fields stay `None`
pub fn options_from_matches(matches: &ArgMatches) -> ProgressOptions {
    ProgressOptions {
        width: matches.get_one::<i64>("width").copied(),
        step: matches.get_one::<f64>("step").copied(),
        title: matches.get_one::<String>("title").cloned(),
        filled_char: matches.get_one::<String>("filled").cloned(),
        empty_char: matches.get_one::<String>("empty").cloned(),
    }
}

/// Count to `--items`, reporting progress every 1%
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let config = Config::load()?;
    let options = options_from_matches(matches).or(&config.progress_options()?);

    let items = *matches
        .get_one::<u64>("items")
        .context("Items argument is required")?;
    let delay = Duration::from_millis(*matches.get_one::<u64>("delay").unwrap_or(&0));

    let counted = runtime(|| {
        progress::run(
            move || {
                let one_percent = (items / 100).max(1);
                let reports = (0..items)
                    .filter(move |i| i % one_percent == 0)
                    .map(move |i| {
                        if !delay.is_zero() {
                            thread::sleep(delay);
                        }
                        i as f64 / items as f64
                    });
                progress::from_iter(reports, move || items)
            },
            &options,
        )
    })?;

    println!("Counted {} items", counted);
    Ok(())
}
