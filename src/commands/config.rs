use anyhow::Result;
use clap::ArgMatches;
use colored::Colorize;

use crate::commands::progress::options_from_matches;
use crate::core::Config;
use crate::ui::prompts::success;

pub fn execute(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("show", _)) => show(),
        Some(("path", _)) => {
            println!("{}", Config::get_config_path()?.display());
            Ok(())
        }
        Some(("progress", sub_matches)) => set_progress(sub_matches),
        _ => {
            println!("Use 'consolekit config --help' for more information.");
            Ok(())
        }
    }
}

fn show() -> Result<()> {
    let config = Config::load()?;
    println!("{}", "Current configuration:".white().bold());
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

/// Store new progress bar defaults after checking they are valid
fn set_progress(matches: &ArgMatches) -> Result<()> {
    let mut config = Config::load()?;
    let options = options_from_matches(matches).or(&config.progress_options()?);
    options.validate()?;

    config.set_progress_options(&options);
    config.save()?;

    success("Progress defaults saved");
    Ok(())
}
