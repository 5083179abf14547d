// Drives a producer and forwards its progress reports to a tracker

use std::io::Stdout;

use crate::error::{ConsoleError, Result};
use crate::ui::sink::{DisplaySink, RenderMode, StreamSink};

use super::options::ProgressOptions;
use super::producer::{AsProgress, Producer, Step};
use super::tracker::ProgressTracker;

/// Bridges a progress-producing computation to a [`ProgressTracker`].
///
/// A driver is single use: each run gets a fresh tracker starting at 0.
pub struct ProgressDriver<S: DisplaySink> {
    tracker: ProgressTracker<S>,
}

impl<S: DisplaySink> ProgressDriver<S> {
    /// Validate `options` and prepare a tracker writing to `sink`.
    /// Nothing is written until the driver runs.
    pub fn new(options: &ProgressOptions, sink: S) -> Result<Self> {
        let config = options.validate()?;
        Ok(Self {
            tracker: ProgressTracker::new(config, sink),
        })
    }

    /// Pull every value from a fresh producer, rendering those that advanced
    /// by more than the configured step since the last render, then render
    /// 100% and return the producer's result.
    ///
    /// A non-numeric value aborts the run with [`ConsoleError::ValueKind`];
    /// the producer is not resumed and no final render happens.
    pub fn run<F, P>(mut self, factory: F) -> Result<P::Output>
    where
        F: FnOnce() -> P,
        P: Producer,
        P::Value: AsProgress,
    {
        log::debug!("Starting progress run with {:?}", self.tracker.config());
        self.tracker.print_title()?;

        let mut producer = factory();
        loop {
            match producer.resume() {
                Step::Yield(value) => {
                    let progress = value
                        .as_progress()
                        .ok_or_else(|| ConsoleError::value_kind(value.describe()))?;
                    self.offer(progress)?;
                }
                Step::Complete(result) => {
                    self.tracker.render(1.0, RenderMode::Append)?;
                    log::debug!("Progress run complete");
                    return Ok(result);
                }
            }
        }
    }

    /// Callback flavour of [`ProgressDriver::run`]: `work` reports progress
    /// through the [`Reporter`] and returns the final result.
    ///
    /// The final 100% line is only rendered when `work` succeeds.
    pub fn run_with_reporter<F, R>(mut self, work: F) -> Result<R>
    where
        F: FnOnce(&mut Reporter<'_, S>) -> Result<R>,
    {
        log::debug!("Starting progress run with {:?}", self.tracker.config());
        self.tracker.print_title()?;

        let result = work(&mut Reporter { driver: &mut self })?;
        self.tracker.render(1.0, RenderMode::Append)?;
        log::debug!("Progress run complete");
        Ok(result)
    }

    /// Render `progress` if it moved strictly more than one step past the
    /// last rendered value. Returns whether a render happened.
    fn offer(&mut self, progress: f64) -> Result<bool> {
        let delta = progress - self.tracker.current_progress();
        if delta > self.tracker.config().step {
            self.tracker.render(progress, RenderMode::Overwrite)?;
            Ok(true)
        } else {
            log::trace!("Skipping progress {} (delta {})", progress, delta);
            Ok(false)
        }
    }
}

/// Handle passed to [`ProgressDriver::run_with_reporter`] callbacks
pub struct Reporter<'a, S: DisplaySink> {
    driver: &'a mut ProgressDriver<S>,
}

impl<S: DisplaySink> Reporter<'_, S> {
    /// Report a progress value; returns whether it was rendered
    pub fn report(&mut self, progress: f64) -> Result<bool> {
        let progress = progress
            .as_progress()
            .ok_or_else(|| ConsoleError::value_kind(progress.describe()))?;
        self.driver.offer(progress)
    }

    /// The last rendered progress value
    pub fn current_progress(&self) -> f64 {
        self.driver.tracker.current_progress()
    }
}

/// Run a producer with a progress bar on stdout
pub fn run<F, P>(factory: F, options: &ProgressOptions) -> Result<P::Output>
where
    F: FnOnce() -> P,
    P: Producer,
    P::Value: AsProgress,
{
    run_with_sink(factory, options, StreamSink::stdout())
}

/// Run a producer with a progress bar written to `sink`
pub fn run_with_sink<F, P, S>(factory: F, options: &ProgressOptions, sink: S) -> Result<P::Output>
where
    F: FnOnce() -> P,
    P: Producer,
    P::Value: AsProgress,
    S: DisplaySink,
{
    ProgressDriver::new(options, sink)?.run(factory)
}

impl ProgressDriver<StreamSink<Stdout>> {
    pub fn stdout(options: &ProgressOptions) -> Result<Self> {
        Self::new(options, StreamSink::stdout())
    }
}
