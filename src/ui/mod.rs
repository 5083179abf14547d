// UI and terminal interaction module

pub mod dropdown;
pub mod prompts;
pub mod scroll;
pub mod sink;

// Re-export commonly used items for cleaner imports
pub use dropdown::dropdown_menu;
pub use prompts::{
    clear_lines, error, info, select_options, success, validated_input, warn, SelectMode,
};
pub use scroll::{scroll_text, ScrollOptions};
pub use sink::{DisplaySink, MemorySink, RenderMode, StreamSink};
