// UI prompts and user interaction module

use colored::Colorize;
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::error::{ConsoleError, Result};

/// How [`select_options`] lists its choices and what the user types back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectMode {
    /// Numbered list; the user enters the 1-based index
    #[default]
    Numeric,
    /// Bulleted list; the user enters the option text
    Bullet,
}

impl FromStr for SelectMode {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "numeric" => Ok(SelectMode::Numeric),
            "bullet" => Ok(SelectMode::Bullet),
            other => Err(ConsoleError::invalid_argument(format!(
                "mode must either be numeric or bullet, not {}",
                other
            ))),
        }
    }
}

/// Read one line, failing on end of input
fn read_line<R: BufRead>(reader: &mut R) -> Result<String> {
    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed").into());
    }
    Ok(input.trim().to_string())
}

/// Short name of `T` for messages, e.g. `u32` or `String`
fn type_label<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

/// Ask on stdin until the answer parses as `T` and satisfies `condition`
pub fn validated_input<T, C>(msg: &str, condition: C, err_msg: Option<&str>) -> Result<T>
where
    T: FromStr,
    C: FnMut(&T) -> bool,
{
    let stdin = io::stdin();
    validated_input_from(&mut stdin.lock(), &mut io::stdout(), msg, condition, err_msg)
}

/// [`validated_input`] over arbitrary streams
pub fn validated_input_from<R, W, T, C>(
    reader: &mut R,
    writer: &mut W,
    msg: &str,
    mut condition: C,
    err_msg: Option<&str>,
) -> Result<T>
where
    R: BufRead,
    W: Write,
    T: FromStr,
    C: FnMut(&T) -> bool,
{
    write!(writer, "{}", msg)?;
    writer.flush()?;

    loop {
        let input = read_line(reader)?;
        match input.parse::<T>() {
            Ok(value) if condition(&value) => return Ok(value),
            Ok(_) => {
                if let Some(err) = err_msg {
                    writeln!(writer, "Invalid Input! {}", err)?;
                }
                write!(writer, "Please try again: ")?;
            }
            Err(_) => {
                write!(
                    writer,
                    "Input must be of type: {}. Please try again: ",
                    type_label::<T>()
                )?;
            }
        }
        writer.flush()?;
    }
}

/// List `options` under `msg` on stdout and return the one the user picks
pub fn select_options<S: Display>(
    msg: &str,
    options: &[S],
    mode: SelectMode,
    case_sensitive: bool,
) -> Result<String> {
    let stdin = io::stdin();
    select_options_from(
        &mut stdin.lock(),
        &mut io::stdout(),
        msg,
        options,
        mode,
        case_sensitive,
    )
}

/// [`select_options`] over arbitrary streams
pub fn select_options_from<R, W, S>(
    reader: &mut R,
    writer: &mut W,
    msg: &str,
    options: &[S],
    mode: SelectMode,
    case_sensitive: bool,
) -> Result<String>
where
    R: BufRead,
    W: Write,
    S: Display,
{
    if options.is_empty() {
        return Err(ConsoleError::invalid_argument("options cannot be empty"));
    }

    let options: Vec<String> = options.iter().map(|o| o.to_string()).collect();

    writeln!(writer, "{}", msg)?;
    for (index, option) in options.iter().enumerate() {
        match mode {
            SelectMode::Numeric => writeln!(writer, "  {}. {}", index + 1, option)?,
            SelectMode::Bullet => writeln!(writer, "  • {}", option)?,
        }
    }
    write!(writer, "Enter option: ")?;
    writer.flush()?;

    loop {
        let choice = read_line(reader)?;
        let picked = match mode {
            SelectMode::Numeric => pick_by_index(writer, &options, &choice)?,
            SelectMode::Bullet => {
                let found = options.iter().find(|option| {
                    if case_sensitive {
                        **option == choice
                    } else {
                        option.to_lowercase() == choice.to_lowercase()
                    }
                });
                if found.is_none() {
                    write!(writer, "Invalid Option! Please try again: ")?;
                }
                found.cloned()
            }
        };

        if let Some(option) = picked {
            return Ok(option);
        }
        writer.flush()?;
    }
}

fn pick_by_index<W: Write>(writer: &mut W, options: &[String], choice: &str) -> Result<Option<String>> {
    if choice.is_empty() || !choice.chars().all(|c| c.is_ascii_digit()) {
        writeln!(writer, "Invalid Option! Please choose a valid index: ")?;
        return Ok(None);
    }

    match choice.parse::<usize>() {
        Ok(num) if (1..=options.len()).contains(&num) => Ok(Some(options[num - 1].clone())),
        _ => {
            writeln!(writer, "Option {} does not exist!", choice)?;
            Ok(None)
        }
    }
}

/// Erase the `count` lines above the cursor
pub fn clear_lines(count: usize) -> io::Result<()> {
    let mut stdout = io::stdout();
    clear_lines_to(&mut stdout, count)?;
    stdout.flush()
}

pub fn clear_lines_to<W: Write>(writer: &mut W, count: usize) -> io::Result<()> {
    for _ in 0..count {
        // cursor up one line, then erase it
        writer.write_all(b"\x1b[1A\x1b[2K")?;
    }
    Ok(())
}

/// Display a warning message
pub fn warn(message: &str) {
    println!("{}", format!("⚠️  Warning: {}", message).yellow().bold());
}

/// Display an info message
pub fn info(message: &str) {
    println!("{}", message.cyan());
}

/// Display a success message
pub fn success(message: &str) {
    println!("{}", message.green().bold());
}

/// Display an error message
pub fn error(message: &str) {
    println!("{}", message.red().bold());
}
