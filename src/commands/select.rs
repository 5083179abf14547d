use anyhow::{Context, Result};
use clap::ArgMatches;

use crate::ui::prompts::{select_options, success, SelectMode};

pub fn execute(matches: &ArgMatches) -> Result<()> {
    let options: Vec<&String> = matches
        .get_many::<String>("options")
        .context("At least one option is required")?
        .collect();
    let message = matches
        .get_one::<String>("message")
        .context("Message argument is required")?;
    let mode: SelectMode = matches
        .get_one::<String>("mode")
        .map(|m| m.parse::<SelectMode>())
        .transpose()?
        .unwrap_or_default();
    let case_sensitive = matches.get_flag("case-sensitive");

    let choice = select_options(message, &options, mode, case_sensitive)?;
    success(&format!("Selected: {}", choice));
    Ok(())
}
