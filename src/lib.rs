pub mod animation;
pub mod api;
pub mod config;
pub mod demo;
pub mod polling;
pub mod progress;
pub mod ui;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipperError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Request cancelled")]
    Cancelled,

    #[error("IO error: {0}")]
    Io(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Channel error: {0}")]
    Channel(String),

    #[error("Worker error: {0}")]
    Worker(String),
}

impl From<std::io::Error> for ClipperError {
    fn from(e: std::io::Error) -> Self {
        ClipperError::Io(e.to_string())
    }
}

impl From<reqwest::Error> for ClipperError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            return ClipperError::Http {
                status: status.as_u16(),
                message: e.to_string(),
            };
        }
        if e.is_decode() {
            return ClipperError::Decode(e.to_string());
        }
        ClipperError::Transport(e.to_string())
    }
}

impl ClipperError {
    /// Check if this error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            // Network hiccups and 5xx responses usually go away on the next tick
            ClipperError::Transport(_) => true,
            ClipperError::Http { status, .. } => *status >= 500 || *status == 429,
            ClipperError::Decode(_) => false,
            ClipperError::Cancelled => true,
            ClipperError::Io(_) => false,
            ClipperError::Config(_) => false,
            ClipperError::Channel(_) => false,
            ClipperError::Worker(_) => false,
        }
    }

    /// Get a user-friendly description
    pub fn user_message(&self) -> String {
        match self {
            ClipperError::Transport(_)
            | ClipperError::Http { .. }
            | ClipperError::Decode(_)
            | ClipperError::Cancelled
            | ClipperError::Io(_) => "Upload failed. Please try again.".to_string(),
            ClipperError::Config(_) => {
                "Configuration error. Please check CLIPPER_* settings.".to_string()
            }
            ClipperError::Channel(_) | ClipperError::Worker(_) => {
                "Internal communication error. Please restart the application.".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ClipperError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_split() {
        assert!(ClipperError::Transport("reset".into()).is_recoverable());
        assert!(ClipperError::Http { status: 503, message: String::new() }.is_recoverable());
        assert!(!ClipperError::Http { status: 404, message: String::new() }.is_recoverable());
        assert!(!ClipperError::Config("bad".into()).is_recoverable());
    }

    #[test]
    fn test_upload_failures_share_one_message() {
        let msg = "Upload failed. Please try again.";
        assert_eq!(ClipperError::Cancelled.user_message(), msg);
        assert_eq!(ClipperError::Transport("x".into()).user_message(), msg);
        assert_eq!(
            ClipperError::Http { status: 500, message: "boom".into() }.user_message(),
            msg
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let err: ClipperError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, ClipperError::Io(_)));
    }
}
