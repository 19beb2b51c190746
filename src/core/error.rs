//! Error types for the logging core

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A destination refused or failed a write/sync
    #[error("Sink error ({sink}): {message}")]
    SinkError { sink: String, message: String },

    /// Encoder error with format type
    #[error("Encoder error ({format}): {message}")]
    EncoderError { format: String, message: String },

    /// A hook rejected an entry
    #[error("Hook error: {0}")]
    HookError(String),

    /// A level value that does not name a known severity
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// File lock error
    #[error("Failed to acquire file lock on '{path}'")]
    FileLockError { path: String },

    /// Several fan-out members failed for the same entry
    #[error("{} facilities failed: {}", .0.len(), join_errors(.0))]
    Multiple(Vec<LoggerError>),
}

fn join_errors(errors: &[LoggerError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a sink error
    pub fn sink(sink: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::SinkError {
            sink: sink.into(),
            message: message.into(),
        }
    }

    /// Create an encoder error
    pub fn encoder(format: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::EncoderError {
            format: format.into(),
            message: message.into(),
        }
    }

    /// Create a hook error
    pub fn hook<S: Into<String>>(msg: S) -> Self {
        LoggerError::HookError(msg.into())
    }

    /// Create an invalid level error
    pub fn invalid_level<S: Into<String>>(level: S) -> Self {
        LoggerError::InvalidLevel(level.into())
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a file lock error
    pub fn file_lock(path: impl Into<String>) -> Self {
        LoggerError::FileLockError { path: path.into() }
    }

    /// Collapse a list of member failures into a single error.
    ///
    /// Returns `None` for an empty list and the error itself for a single one.
    pub fn from_many(mut errors: Vec<LoggerError>) -> Option<Self> {
        match errors.len() {
            0 => None,
            1 => errors.pop(),
            _ => Some(LoggerError::Multiple(errors)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::sink("file", "disk full");
        assert!(matches!(err, LoggerError::SinkError { .. }));

        let err = LoggerError::config("LoggerConfig", "Invalid path");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = LoggerError::hook("rejected");
        assert!(matches!(err, LoggerError::HookError(_)));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::sink("console", "closed");
        assert_eq!(err.to_string(), "Sink error (console): closed");

        let err = LoggerError::encoder("json", "bad key");
        assert_eq!(err.to_string(), "Encoder error (json): bad key");

        let err = LoggerError::invalid_level("verbose");
        assert_eq!(err.to_string(), "Invalid log level: 'verbose'");
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::io_operation("writing log file", "cannot write to file", io_err);

        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("writing log file"));
        assert!(err.to_string().contains("cannot write to file"));
    }

    #[test]
    fn test_from_many() {
        assert!(LoggerError::from_many(Vec::new()).is_none());

        let single = LoggerError::from_many(vec![LoggerError::hook("a")]);
        assert!(matches!(single, Some(LoggerError::HookError(_))));

        let many = LoggerError::from_many(vec![LoggerError::hook("a"), LoggerError::hook("b")])
            .expect("two errors");
        assert_eq!(many.to_string(), "2 facilities failed: Hook error: a; Hook error: b");
    }
}
