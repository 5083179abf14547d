// Core helpers: progress bars, call wrappers, save files and configuration

pub mod config;
pub mod decorators;
pub mod progress;
pub mod save;

// Re-export commonly used items
pub use config::Config;
pub use decorators::{deprecated, runtime, timed};
pub use progress::{ProgressDriver, ProgressOptions, ProgressTracker};
pub use save::SaveFile;
