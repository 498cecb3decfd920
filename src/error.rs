//! Application error types
//!
//! Only failures of the outside world surface as [`AppError`]: acquiring or
//! drawing to the terminal, spawning the event threads, installing the log
//! writer, or rejecting a configuration. Everything inside the run loop
//! (unknown keys, commands whose preconditions do not hold) is absorbed as a
//! no-op and never becomes an error.

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// The terminal could not be put into raw / alternate-screen mode
    #[error("failed to initialize terminal: {0}")]
    TerminalInit(#[source] io::Error),

    /// Drawing or restoring the terminal failed after initialization
    #[error("terminal error: {0}")]
    Terminal(#[source] io::Error),

    /// An input or clock thread could not be spawned
    #[error("failed to start event source: {0}")]
    EventSource(#[source] io::Error),

    /// A producer thread panicked while the run loop was waiting on it
    #[error("event thread {0} stopped unexpectedly")]
    SourceLost(&'static str),

    #[error("failed to set up logging: {0}")]
    Logging(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_cause() {
        let err = AppError::TerminalInit(io::Error::new(io::ErrorKind::Other, "no tty"));
        assert_eq!(err.to_string(), "failed to initialize terminal: no tty");

        let err = AppError::Config("fps must be at least 1".to_string());
        assert_eq!(err.to_string(), "invalid configuration: fps must be at least 1");
    }
}
