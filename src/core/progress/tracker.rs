// Progress bar state and rendering

use crate::error::{ConsoleError, Result};
use crate::ui::sink::{DisplaySink, RenderMode};

use super::options::ProgressConfig;

/// Holds the bar configuration and the last rendered progress value
pub struct ProgressTracker<S: DisplaySink> {
    config: ProgressConfig,
    current_progress: f64,
    sink: S,
}

impl<S: DisplaySink> ProgressTracker<S> {
    pub fn new(config: ProgressConfig, sink: S) -> Self {
        Self {
            config,
            current_progress: 0.0,
            sink,
        }
    }

    pub fn config(&self) -> &ProgressConfig {
        &self.config
    }

    /// The last rendered progress value (0 before the first render)
    pub fn current_progress(&self) -> f64 {
        self.current_progress
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Emit the configured title, if any
    pub fn print_title(&mut self) -> Result<()> {
        if let Some(title) = &self.config.title {
            self.sink.emit(title, RenderMode::Append)?;
        }
        Ok(())
    }

    /// Record `progress` and write the bar for it
    pub fn render(&mut self, progress: f64, mode: RenderMode) -> Result<()> {
        if !(0.0..=1.0).contains(&progress) {
            return Err(ConsoleError::Range(progress));
        }

        self.current_progress = progress;
        let line = format_bar(&self.config, progress);
        self.sink.emit(&line, mode)?;
        Ok(())
    }
}

/// Build the bar line for `progress`, which must already be within [0, 1].
///
/// The percentage rounds half away from zero, so 0.005 shows as `1%`.
pub fn format_bar(config: &ProgressConfig, progress: f64) -> String {
    let filled = ((progress * config.width as f64).floor() as usize).min(config.width);
    let empty = config.width - filled;
    let percentage = (progress * 100.0).round() as u32;

    let mut line = String::with_capacity(config.width * 3 + 6);
    line.extend(std::iter::repeat(config.filled_char).take(filled));
    line.extend(std::iter::repeat(config.empty_char).take(empty));
    line.push_str(&format!(" {}%", percentage));
    line
}
