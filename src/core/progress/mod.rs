// Generator-driven progress bar

pub mod driver;
pub mod options;
pub mod producer;
pub mod tracker;

pub use driver::{run, run_with_sink, ProgressDriver, Reporter};
pub use options::{ProgressConfig, ProgressOptions};
pub use producer::{from_fn, from_iter, AsProgress, Producer, Step};
pub use tracker::{format_bar, ProgressTracker};
