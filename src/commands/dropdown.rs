use anyhow::{Context, Result};
use clap::ArgMatches;

use crate::ui::dropdown::dropdown_menu;
use crate::ui::prompts::{info, success};

pub fn execute(matches: &ArgMatches) -> Result<()> {
    let options: Vec<String> = matches
        .get_many::<String>("options")
        .context("At least one option is required")?
        .cloned()
        .collect();
    let title = matches
        .get_one::<String>("title")
        .context("Title argument is required")?;

    match dropdown_menu(title, &options)? {
        Some(index) => success(&format!("Selected: {}", options[index])),
        None => info("Selection cancelled"),
    }
    Ok(())
}
