//! Logging macros that check before building fields.
//!
//! Key/value pairs after the `;` are only evaluated when the entry passes
//! [`Logger::check`](crate::Logger::check), so expensive field values cost
//! nothing at disabled levels. Without a `;` the arguments are treated like
//! `format!` arguments, and the message is likewise only formatted once the
//! entry is enabled.
//!
//! # Examples
//!
//! ```
//! use rust_facility_logger::prelude::*;
//! use rust_facility_logger::{debug, info};
//!
//! let (facility, sink) = CaptureFacility::new();
//! let logger = Logger::builder().facility(facility).build();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! // With fields
//! info!(logger, "request served"; "status" => 200, "path" => "/health");
//!
//! // Below the logger's level: nothing is formatted or recorded
//! debug!(logger, "skipped"; "dump" => format!("{:?}", vec![0u8; 4096]));
//!
//! assert_eq!(sink.logs().len(), 3);
//! ```

/// Log at an explicit level.
///
/// # Examples
///
/// ```
/// # use rust_facility_logger::prelude::*;
/// # let (facility, sink) = CaptureFacility::new();
/// # let logger = Logger::builder().facility(facility).build();
/// use rust_facility_logger::log;
/// log!(logger, Level::Info, "Simple message");
/// log!(logger, Level::Error, "Error code: {}", 500);
/// log!(logger, Level::Warn, "slow query"; "millis" => 1200u64);
/// # assert_eq!(sink.logs().len(), 3);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $msg:expr; $($key:expr => $value:expr),* $(,)?) => {
        if let Some(ce) = $logger.check($level, $msg) {
            ce.write(&[$($crate::Field::new($key, $value)),*]);
        }
    };
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        if let Some(ce) = $logger.check_with($level, || format!($($arg)+)) {
            ce.write(&[]);
        }
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use rust_facility_logger::prelude::*;
/// # let logger = Logger::builder().facility(CaptureFacility::new().0).level(Level::Debug).build();
/// use rust_facility_logger::debug;
/// debug!(logger, "Debug information");
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use rust_facility_logger::prelude::*;
/// # let (facility, sink) = CaptureFacility::new();
/// # let logger = Logger::builder().facility(facility).build();
/// use rust_facility_logger::error;
/// let err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
/// error!(logger, "write failed"; "path" => "/var/data", "error" => err.to_string());
/// # assert_eq!(sink.logs()[0].fields.len(), 2);
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Error, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use std::cell::Cell;
    use std::fmt;

    struct Counting<'a>(&'a Cell<usize>);

    impl fmt::Display for Counting<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            self.0.set(self.0.get() + 1);
            f.write_str("counted")
        }
    }

    #[test]
    fn test_fields_evaluated_only_when_enabled() {
        let (facility, sink) = CaptureFacility::new();
        let logger = Logger::builder().facility(facility).level(Level::Info).build();
        let evaluated = Cell::new(0);
        let expensive = || {
            evaluated.set(evaluated.get() + 1);
            "value"
        };

        debug!(logger, "hidden"; "k" => expensive());
        info!(logger, "shown"; "k" => expensive());

        assert_eq!(evaluated.get(), 1);
        let logs = sink.logs();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].fields, vec![Field::string("k", "value")]);
    }

    #[test]
    fn test_format_arguments_rendered_only_when_enabled() {
        let (facility, sink) = CaptureFacility::new();
        let logger = Logger::builder().facility(facility).level(Level::Info).build();
        let rendered = Cell::new(0);

        debug!(logger, "state: {}", Counting(&rendered));
        assert_eq!(rendered.get(), 0);

        info!(logger, "state: {}", Counting(&rendered));
        assert_eq!(rendered.get(), 1);
        assert_eq!(sink.logs()[0].message, "state: counted");
    }

    #[test]
    fn test_format_arguments() {
        let (facility, sink) = CaptureFacility::new();
        let logger = Logger::builder().facility(facility).build();

        warn!(logger, "retry {} of {}", 2, 5);
        error!(logger, "plain");

        let logs = sink.logs();
        assert_eq!(logs[0].message, "retry 2 of 5");
        assert_eq!(logs[0].level, Level::Warn);
        assert_eq!(logs[1].message, "plain");
    }

    #[test]
    fn test_log_macro_keeps_field_order() {
        let (facility, sink) = CaptureFacility::new();
        let logger = Logger::builder().facility(facility).build();

        log!(logger, Level::Info, "ordered"; "a" => 1, "b" => true, "c" => 2.5,);

        let keys: Vec<String> = sink.logs()[0].fields.iter().map(|f| f.key.clone()).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }
}
