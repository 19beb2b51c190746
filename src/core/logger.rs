//! Main logger implementation

use super::{
    checked_entry::{CheckedEntry, WriteChecked},
    error::{LoggerError, Result},
    facility::{Facility, FacilityRef},
    field::Field,
    hook::{Hook, ProcessExit, Terminator},
    log_entry::Entry,
    log_level::{Level, LevelEnabler},
    write_syncer::{LockedWriteSyncer, WriteSyncer},
};
use crate::encoders::JsonEncoder;
use crate::facilities::WriterFacility;
use crate::sinks::ConsoleSink;
use chrono::Utc;
use std::fmt;
use std::sync::Arc;

/// Exit status passed to the terminator after a `Fatal` entry.
pub const FATAL_EXIT_CODE: i32 = 1;

/// Leveled, structured logger. All methods are safe for concurrent use.
///
/// A logger gates each call on its own level enabler and on its facility,
/// runs hooks, dispatches to the facility, and then applies the side effect
/// of the severity: [`Logger::panic`] panics, [`Logger::fatal`] terminates
/// the process, and [`Logger::dpanic`] panics in development mode only.
/// [`Logger::log`] never applies side effects, whatever the level.
#[derive(Clone)]
pub struct Logger {
    facility: FacilityRef,
    enabler: Arc<dyn LevelEnabler>,
    development: bool,
    hooks: Arc<[Hook]>,
    error_output: LockedWriteSyncer,
    terminator: Arc<dyn Terminator>,
}

impl Logger {
    /// Logger over `facility` logging at `Info`, development mode off,
    /// internal errors to standard error.
    #[must_use]
    pub fn new(facility: FacilityRef) -> Self {
        Self {
            facility,
            enabler: Arc::new(Level::Info),
            development: false,
            hooks: Arc::from(Vec::new()),
            error_output: LockedWriteSyncer::new(ConsoleSink::stderr()),
            terminator: Arc::new(ProcessExit),
        }
    }

    /// Create a child logger whose records carry `fields`.
    ///
    /// The receiver is left untouched; hooks and error output are shared.
    #[must_use]
    pub fn with(&self, fields: &[Field]) -> Self {
        Self {
            facility: self.facility.with(fields),
            enabler: Arc::clone(&self.enabler),
            development: self.development,
            hooks: Arc::clone(&self.hooks),
            error_output: self.error_output.clone(),
            terminator: Arc::clone(&self.terminator),
        }
    }

    /// Return a [`CheckedEntry`] if logging at `level` is enabled.
    ///
    /// `Panic` and `Fatal` always yield an entry, as does `DPanic` in
    /// development mode. Other levels need both the logger's enabler and the
    /// facility to agree; when either refuses, nothing beyond those two
    /// checks is done.
    pub fn check(&self, level: Level, message: impl Into<String>) -> Option<CheckedEntry<'_>> {
        self.check_with(level, || message)
    }

    /// Like [`check`](Self::check), but the message is only built once
    /// both gates have passed.
    ///
    /// ```
    /// use rust_facility_logger::prelude::*;
    ///
    /// let (facility, sink) = CaptureFacility::new();
    /// let logger = Logger::builder().facility(facility).level(Level::Info).build();
    ///
    /// let skipped = logger.check_with(Level::Debug, || "expensive ".repeat(1024));
    /// assert!(skipped.is_none());
    ///
    /// logger.check_with(Level::Info, || format!("{} ready", "cache")).write(&[]);
    /// assert_eq!(sink.logs()[0].message, "cache ready");
    /// ```
    pub fn check_with<M, F>(&self, level: Level, message: F) -> Option<CheckedEntry<'_>>
    where
        M: Into<String>,
        F: FnOnce() -> M,
    {
        let forced = match level {
            Level::Panic | Level::Fatal => true,
            Level::DPanic => self.development,
            _ => false,
        };

        if !forced && !self.enabler.enabled(level) {
            return None;
        }
        // Facilities gate on the level, so the message can wait.
        let mut entry = Entry::new(level, String::new());
        if !forced && !self.facility.enabled(&entry) {
            return None;
        }
        entry.message = message().into();
        Some(CheckedEntry::new(entry, Arc::clone(&self.facility), self))
    }

    /// Log at `level` without any severity side effect.
    pub fn log(&self, level: Level, message: impl Into<String>, fields: &[Field]) {
        self.check(level, message).write(fields);
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>, fields: &[Field]) {
        self.log(Level::Debug, message, fields);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>, fields: &[Field]) {
        self.log(Level::Info, message, fields);
    }

    #[inline]
    pub fn warn(&self, message: impl Into<String>, fields: &[Field]) {
        self.log(Level::Warn, message, fields);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>, fields: &[Field]) {
        self.log(Level::Error, message, fields);
    }

    /// Log at `DPanic`, then panic with `message` if in development mode.
    pub fn dpanic(&self, message: impl Into<String>, fields: &[Field]) {
        let message = message.into();
        if self.development {
            self.log(Level::DPanic, message.clone(), fields);
            panic!("{}", message);
        }
        self.log(Level::DPanic, message, fields);
    }

    /// Log at `Panic`, then panic with `message`.
    pub fn panic(&self, message: impl Into<String>, fields: &[Field]) -> ! {
        let message = message.into();
        self.log(Level::Panic, message.clone(), fields);
        panic!("{}", message);
    }

    /// Log at `Fatal`, then terminate the process with status 1.
    ///
    /// Only returns if the configured [`Terminator`] does.
    pub fn fatal(&self, message: impl Into<String>, fields: &[Field]) {
        self.log(Level::Fatal, message, fields);
        self.terminator.terminate(FATAL_EXIT_CODE);
    }

    /// Report a failure inside the logging pipeline on the error output.
    ///
    /// Best effort: a failing error output is ignored.
    pub fn internal_error(&self, cause: &str, err: &LoggerError) {
        let line = format!("{} {} error: {}\n", Utc::now().to_rfc3339(), cause, err);
        let _ = self.error_output.write_and_sync(line.as_bytes());
    }

    pub fn facility(&self) -> &FacilityRef {
        &self.facility
    }

    pub fn is_development(&self) -> bool {
        self.development
    }

    pub(crate) fn hooks(&self) -> &[Hook] {
        &self.hooks
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use rust_facility_logger::prelude::*;
    ///
    /// let (facility, sink) = CaptureFacility::new();
    /// let logger = Logger::builder()
    ///     .facility(facility)
    ///     .level(Level::Debug)
    ///     .development(true)
    ///     .build();
    ///
    /// logger.debug("ready", &[Field::int("workers", 4)]);
    /// assert_eq!(sink.logs()[0].message, "ready");
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

impl Default for Logger {
    /// JSON records on standard output.
    fn default() -> Self {
        Logger::builder().build()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("development", &self.development)
            .field("hooks", &self.hooks.len())
            .field("error_output", &self.error_output)
            .finish_non_exhaustive()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use rust_facility_logger::prelude::*;
///
/// let output = SharedBuffer::new();
/// let logger = Logger::builder()
///     .facility(WriterFacility::new(JsonEncoder::new(), output.clone()))
///     .level(Level::Warn)
///     .hook(|entry: &mut Entry| {
///         assert!(entry.level >= Level::Warn);
///         Ok(())
///     })
///     .build();
///
/// logger.info("dropped", &[]);
/// logger.warn("kept", &[]);
/// assert_eq!(output.lines().len(), 1);
/// ```
pub struct LoggerBuilder {
    facility: Option<FacilityRef>,
    enabler: Arc<dyn LevelEnabler>,
    development: bool,
    hooks: Vec<Hook>,
    error_output: Option<LockedWriteSyncer>,
    terminator: Arc<dyn Terminator>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            facility: None,
            enabler: Arc::new(Level::Info),
            development: false,
            hooks: Vec::new(),
            error_output: None,
            terminator: Arc::new(ProcessExit),
        }
    }

    /// Set the facility records are dispatched to
    #[must_use = "builder methods return a new value"]
    pub fn facility<F: Facility + 'static>(self, facility: F) -> Self {
        self.facility_ref(Arc::new(facility))
    }

    /// Set an already shared facility, such as the result of [`tee`](crate::tee)
    #[must_use = "builder methods return a new value"]
    pub fn facility_ref(mut self, facility: FacilityRef) -> Self {
        self.facility = Some(facility);
        self
    }

    /// Set the logger's own level gate
    #[must_use = "builder methods return a new value"]
    pub fn level<E: LevelEnabler + 'static>(mut self, enabler: E) -> Self {
        self.enabler = Arc::new(enabler);
        self
    }

    /// Development mode makes `dpanic` panic after logging
    #[must_use = "builder methods return a new value"]
    pub fn development(mut self, development: bool) -> Self {
        self.development = development;
        self
    }

    /// Register a hook; hooks run in registration order
    #[must_use = "builder methods return a new value"]
    pub fn hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(&mut Entry) -> Result<()> + Send + Sync + 'static,
    {
        self.hooks.push(Arc::new(hook));
        self
    }

    /// Set where internal errors are reported
    #[must_use = "builder methods return a new value"]
    pub fn error_output<W: WriteSyncer + 'static>(self, output: W) -> Self {
        self.error_output_ref(LockedWriteSyncer::new(output))
    }

    #[must_use = "builder methods return a new value"]
    pub fn error_output_boxed(self, output: Box<dyn WriteSyncer>) -> Self {
        self.error_output_ref(LockedWriteSyncer::from_boxed(output))
    }

    /// Set an already shared error output
    #[must_use = "builder methods return a new value"]
    pub fn error_output_ref(mut self, output: LockedWriteSyncer) -> Self {
        self.error_output = Some(output);
        self
    }

    /// Replace process termination after `Fatal` entries
    #[must_use = "builder methods return a new value"]
    pub fn terminator<T: Terminator + 'static>(mut self, terminator: T) -> Self {
        self.terminator = Arc::new(terminator);
        self
    }

    /// Build the Logger
    ///
    /// Without a facility, records are JSON encoded to standard output.
    pub fn build(self) -> Logger {
        let facility = self.facility.unwrap_or_else(|| {
            Arc::new(WriterFacility::new(JsonEncoder::new(), ConsoleSink::stdout()))
        });
        let error_output = self
            .error_output
            .unwrap_or_else(|| LockedWriteSyncer::new(ConsoleSink::stderr()));

        Logger {
            facility,
            enabler: self.enabler,
            development: self.development,
            hooks: Arc::from(self.hooks),
            error_output,
            terminator: self.terminator,
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
