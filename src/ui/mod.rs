// UI and formatting module

pub mod formatters;
pub mod prompts;

// Re-export commonly used items for cleaner imports
pub use formatters::{format_message_preview, format_status, format_toggle};
pub use prompts::{dimmed, error, info, success, warn};
