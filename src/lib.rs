// consolekit library - public API

// Re-export error types
pub mod error;
pub use error::{ConsoleError, Result};

// Module declarations
pub mod commands;
pub mod core;
pub mod ui;

// Re-export commonly used types
pub use crate::core::config::Config;
pub use crate::core::progress::{ProgressDriver, ProgressOptions, ProgressTracker, Step};
pub use crate::core::save::SaveFile;

// Initialize logging; RUST_LOG overrides the default `info` level
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
