// Core business logic module

pub mod chatbox;
pub mod composer;
pub mod config;
pub mod one_shot;
pub mod sensors;
pub mod toggles;
pub mod transmitter;

// Re-export commonly used items
pub use chatbox::{ChatboxSink, SendRequest, MAX_MESSAGE_LENGTH};
pub use composer::{compose, sample, Readings};
pub use config::Config;
pub use one_shot::{OneShotOutcome, OneShotSender};
pub use sensors::{LiveSensors, Sensors, SystemUsage};
pub use toggles::{Source, Toggles};
pub use transmitter::{LoopState, TickOutcome, Transmitter};
