use anyhow::{Context, Result};
use clap::ArgMatches;
use std::time::Duration;

use crate::core::Config;
use crate::ui::scroll::{parse_pause_chars, scroll_text};

pub fn execute(matches: &ArgMatches) -> Result<()> {
    let text = matches
        .get_one::<String>("text")
        .context("Text argument is required")?;

    let mut options = Config::load()?.scroll_options();
    if let Some(ms) = matches.get_one::<u64>("speed") {
        options.speed = Duration::from_millis(*ms);
    }
    if let Some(ms) = matches.get_one::<u64>("pause") {
        options.pause_duration = Duration::from_millis(*ms);
    }
    if let Some(chars) = matches.get_many::<String>("pause-chars") {
        let chars: Vec<&String> = chars.collect();
        options.pause_chars = parse_pause_chars(&chars)?;
    }

    scroll_text(text, &options)?;
    println!();
    Ok(())
}
