use std::io;
use thiserror::Error;

/// Custom error type for chatbox-stats
#[derive(Error, Debug)]
pub enum ChatboxError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("OSC encoding error: {0}")]
    Osc(String),

    #[error("Send failed: {0}")]
    Send(String),

    #[error("Sensor unavailable: {0}")]
    Sensor(String),

    #[error("Unexpected output: {0}")]
    Parse(String),

    #[error("Timed out: {0}")]
    Timeout(String),

    #[error("D-Bus error: {0}")]
    Bus(#[from] zbus::Error),

    #[error("D-Bus call failed: {0}")]
    BusCall(#[from] zbus::fdo::Error),

    #[error("Runtime error: {0}")]
    Runtime(String),
}

/// Result type alias for chatbox-stats
pub type Result<T> = std::result::Result<T, ChatboxError>;

impl ChatboxError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        ChatboxError::Config(msg.into())
    }

    /// Create an OSC encoding error
    pub fn osc<S: Into<String>>(msg: S) -> Self {
        ChatboxError::Osc(msg.into())
    }

    /// Create a send error
    pub fn send<S: Into<String>>(msg: S) -> Self {
        ChatboxError::Send(msg.into())
    }

    /// Create a sensor-unavailable error
    pub fn sensor<S: Into<String>>(msg: S) -> Self {
        ChatboxError::Sensor(msg.into())
    }

    pub fn parse<S: Into<String>>(msg: S) -> Self {
        ChatboxError::Parse(msg.into())
    }

    pub fn timeout<S: Into<String>>(msg: S) -> Self {
        ChatboxError::Timeout(msg.into())
    }

    pub fn runtime<S: Into<String>>(msg: S) -> Self {
        ChatboxError::Runtime(msg.into())
    }

    /// True for the "output had the wrong shape" class of failures.
    pub fn is_parse(&self) -> bool {
        matches!(self, ChatboxError::Parse(_))
    }
}
