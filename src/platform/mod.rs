// Platform-specific code module

pub mod osc;
pub mod process;

// Re-exports para imports limpios
pub use osc::OscChatboxClient;
pub use process::run_capture;
