use anyhow::{Context, Result};
use clap::ArgMatches;

use crate::ui::prompts::{success, validated_input};

/// Ask for a whole number, optionally within `--min`/`--max`
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let message = matches
        .get_one::<String>("message")
        .context("Message argument is required")?;
    let min = matches.get_one::<i64>("min").copied();
    let max = matches.get_one::<i64>("max").copied();

    let err_msg = match (min, max) {
        (Some(min), Some(max)) => Some(format!("Value must be between {} and {}", min, max)),
        (Some(min), None) => Some(format!("Value must be at least {}", min)),
        (None, Some(max)) => Some(format!("Value must be at most {}", max)),
        (None, None) => None,
    };

    let value: i64 = validated_input(
        &format!("{} ", message),
        |value: &i64| min.map_or(true, |m| *value >= m) && max.map_or(true, |m| *value <= m),
        err_msg.as_deref(),
    )?;

    success(&format!("You entered {}", value));
    Ok(())
}
