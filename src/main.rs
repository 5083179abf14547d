use anyhow::Result;
use clap::{Arg, ArgAction, Command};

use consolekit::commands;
use consolekit::commands::progress::progress_args;

fn build_cli() -> Command {
    Command::new("consolekit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Console helpers for interactive command-line programs")
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .short('v')
                .short_alias('V')
                .long("version")
                .help("Print version information")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("progress")
                .about("Count through a range of items with a progress bar")
                .arg(
                    Arg::new("items")
                        .short('n')
                        .long("items")
                        .help("Number of items to count")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("1000000"),
                )
                .arg(
                    Arg::new("delay")
                        .long("delay")
                        .value_name("MS")
                        .help("Pause after each reported percent, in milliseconds")
                        .value_parser(clap::value_parser!(u64)),
                )
                .args(progress_args()),
        )
        .subcommand(
            Command::new("ask")
                .about("Ask for a whole number until a valid one is entered")
                .arg(
                    Arg::new("message")
                        .short('m')
                        .long("message")
                        .help("Question to ask")
                        .default_value("Enter a number:"),
                )
                .arg(
                    Arg::new("min")
                        .long("min")
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(i64))
                        .help("Smallest accepted value"),
                )
                .arg(
                    Arg::new("max")
                        .long("max")
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(i64))
                        .help("Largest accepted value"),
                ),
        )
        .subcommand(
            Command::new("select")
                .about("Pick one option from a numbered or bulleted list")
                .arg(
                    Arg::new("options")
                        .help("Options to choose from")
                        .required(true)
                        .num_args(1..),
                )
                .arg(
                    Arg::new("message")
                        .short('m')
                        .long("message")
                        .default_value("Choose an option:")
                        .help("Text shown above the list"),
                )
                .arg(
                    Arg::new("mode")
                        .long("mode")
                        .value_parser(["numeric", "bullet"])
                        .help("Answer with the option number or its name"),
                )
                .arg(
                    Arg::new("case-sensitive")
                        .long("case-sensitive")
                        .help("Match option names case-sensitively in bullet mode")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("dropdown")
                .about("Pick one option with the arrow keys")
                .arg(
                    Arg::new("options")
                        .help("Options to choose from")
                        .required(true)
                        .num_args(1..),
                )
                .arg(
                    Arg::new("title")
                        .short('t')
                        .long("title")
                        .default_value("Select an Option")
                        .help("Text shown above the menu"),
                ),
        )
        .subcommand(
            Command::new("scroll")
                .about("Print text one character at a time")
                .arg(Arg::new("text").help("Text to print").required(true).index(1))
                .arg(
                    Arg::new("speed")
                        .long("speed")
                        .value_name("MS")
                        .value_parser(clap::value_parser!(u64))
                        .help("Delay between characters, in milliseconds"),
                )
                .arg(
                    Arg::new("pause-chars")
                        .short('p')
                        .long("pause-char")
                        .value_name("CHAR")
                        .action(ArgAction::Append)
                        .help("Character followed by a longer pause (repeatable)"),
                )
                .arg(
                    Arg::new("pause")
                        .long("pause")
                        .value_name("MS")
                        .value_parser(clap::value_parser!(u64))
                        .help("Delay after a pause character, in milliseconds"),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Show or change stored defaults (use 'consolekit config --help' for subcommands)")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(Command::new("show").about("Print the current configuration"))
                .subcommand(Command::new("path").about("Print the configuration file path"))
                .subcommand(
                    Command::new("progress")
                        .about("Save default progress bar options")
                        .args(progress_args()),
                ),
        )
        .subcommand(Command::new("version").about("Shows version information"))
}

fn main() -> Result<()> {
    consolekit::init_logging();

    let matches = build_cli().get_matches();

    if matches.get_flag("version") {
        return commands::version::execute();
    }

    match matches.subcommand() {
        Some(("progress", sub_matches)) => commands::progress::execute(sub_matches)?,
        Some(("ask", sub_matches)) => commands::ask::execute(sub_matches)?,
        Some(("select", sub_matches)) => commands::select::execute(sub_matches)?,
        Some(("dropdown", sub_matches)) => commands::dropdown::execute(sub_matches)?,
        Some(("scroll", sub_matches)) => commands::scroll::execute(sub_matches)?,
        Some(("config", sub_matches)) => commands::config::execute(sub_matches)?,
        Some(("version", _)) => commands::version::execute()?,
        _ => {
            println!("Use 'consolekit --help' for more information.");
        }
    }

    Ok(())
}
