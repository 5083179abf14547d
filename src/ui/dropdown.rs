// Arrow-key driven dropdown menu

use colored::Colorize;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal,
};
use std::io::{self, Write};

use crate::error::{ConsoleError, Result};
use crate::ui::prompts::clear_lines_to;

/// Outcome of a single key press on the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownAction {
    /// Highlight moved; redraw needed
    Moved,
    /// Key had no effect
    Ignored,
    Selected(usize),
    Cancelled,
}

/// Highlighted row of a dropdown with `len` options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownState {
    selected: usize,
    len: usize,
}

impl DropdownState {
    pub fn new(len: usize) -> Self {
        Self { selected: 0, len }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Apply a key press. Movement stops at the first and last option.
    pub fn handle_key(&mut self, key: KeyEvent) -> DropdownAction {
        match key.code {
            KeyCode::Up if self.selected > 0 => {
                self.selected -= 1;
                DropdownAction::Moved
            }
            KeyCode::Down if self.selected + 1 < self.len => {
                self.selected += 1;
                DropdownAction::Moved
            }
            KeyCode::Enter => DropdownAction::Selected(self.selected),
            KeyCode::Esc => DropdownAction::Cancelled,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                DropdownAction::Cancelled
            }
            _ => DropdownAction::Ignored,
        }
    }
}

/// Lines of the menu: the title followed by one bullet per option
pub fn menu_lines<S: AsRef<str>>(title: &str, options: &[S], selected: usize) -> Vec<String> {
    let mut lines = Vec::with_capacity(options.len() + 1);
    lines.push(title.to_string());
    for (index, option) in options.iter().enumerate() {
        let option = option.as_ref();
        if index == selected {
            lines.push(format!("  • {}", option.black().on_white()));
        } else {
            lines.push(format!("  • {}", option));
        }
    }
    lines
}

/// Number of terminal lines one drawing of the menu occupies
fn drawn_height(option_count: usize) -> usize {
    // title + options + trailing blank line
    option_count + 2
}

fn draw<W: Write, S: AsRef<str>>(out: &mut W, title: &str, options: &[S], selected: usize) -> io::Result<()> {
    for line in menu_lines(title, options, selected) {
        // raw mode: newline does not return the carriage
        write!(out, "{}\r\n", line)?;
    }
    write!(out, "\r\n")?;
    out.flush()
}

/// Show `options` under `title` and let the user pick one with the arrow keys
/// and Enter. Returns the chosen index, or `None` when cancelled with Esc or
/// Ctrl-C.
pub fn dropdown_menu<S: AsRef<str>>(title: &str, options: &[S]) -> Result<Option<usize>> {
    if options.is_empty() {
        return Err(ConsoleError::invalid_argument("dropdown needs at least one option"));
    }

    let mut stdout = io::stdout();

    terminal::enable_raw_mode().map_err(|e| {
        ConsoleError::terminal(format!(
            "Failed to enable raw mode: {}. Try running in a different terminal.",
            e
        ))
    })?;

    let result = run_menu_loop(title, options, &mut stdout);

    // Always disable raw mode, even if there was an error
    let _ = terminal::disable_raw_mode();

    result
}

fn run_menu_loop<S: AsRef<str>>(
    title: &str,
    options: &[S],
    stdout: &mut io::Stdout,
) -> Result<Option<usize>> {
    let mut state = DropdownState::new(options.len());
    draw(stdout, title, options, state.selected())?;

    loop {
        let key = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => key,
            // Ignore releases, mouse and resize events
            _ => continue,
        };

        match state.handle_key(key) {
            DropdownAction::Moved => {
                clear_lines_to(stdout, drawn_height(options.len()))?;
                draw(stdout, title, options, state.selected())?;
            }
            DropdownAction::Ignored => {}
            DropdownAction::Selected(index) => {
                log::debug!("Dropdown selection: {}", index);
                return Ok(Some(index));
            }
            DropdownAction::Cancelled => return Ok(None),
        }
    }
}
