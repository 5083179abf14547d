// Command handlers module
pub mod ask;
pub mod config;
pub mod dropdown;
pub mod progress;
pub mod scroll;
pub mod select;
pub mod version;
