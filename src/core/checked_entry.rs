//! Pre-authorized entries returned by [`Logger::check`]

use super::facility::FacilityRef;
use super::field::Field;
use super::log_entry::Entry;
use super::logger::Logger;

/// An [`Entry`] together with the facility that already agreed to log it.
///
/// Returned by [`Logger::check`] so hot call sites can skip building their
/// field slice when the level is disabled. Writing consumes the value, so an
/// entry is dispatched at most once.
///
/// # Example
///
/// ```
/// use rust_facility_logger::{CaptureFacility, Field, Level, Logger};
/// use std::sync::Arc;
///
/// let (facility, sink) = CaptureFacility::new();
/// let logger = Logger::builder()
///     .facility(facility)
///     .level(Level::Info)
///     .build();
///
/// if let Some(ce) = logger.check(Level::Debug, "cache miss") {
///     ce.write(&[Field::string("key", "expensive to build")]);
/// }
/// if let Some(ce) = logger.check(Level::Info, "request served") {
///     ce.write(&[Field::int("status", 200)]);
/// }
///
/// assert_eq!(sink.logs().len(), 1);
/// ```
pub struct CheckedEntry<'a> {
    entry: Entry,
    facility: FacilityRef,
    logger: &'a Logger,
}

impl<'a> CheckedEntry<'a> {
    pub(crate) fn new(entry: Entry, facility: FacilityRef, logger: &'a Logger) -> Self {
        Self {
            entry,
            facility,
            logger,
        }
    }

    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    /// Attach a batch of fields ahead of the call-site fields.
    #[must_use]
    pub fn add_fields(mut self, fields: Vec<Field>) -> Self {
        self.entry = self.entry.add_fields(fields);
        self
    }

    /// Run the logger's hooks and dispatch to the bound facility.
    ///
    /// Hook and facility failures go to the logger's error output; they are
    /// never returned to the caller.
    pub fn write(mut self, fields: &[Field]) {
        for hook in self.logger.hooks() {
            if let Err(err) = hook(&mut self.entry) {
                self.logger.internal_error("hook", &err);
            }
        }
        if let Err(err) = self.facility.log(&self.entry, fields) {
            self.logger.internal_error("facility", &err);
        }
    }
}

/// Lets an absent check result be written like a present one.
///
/// Writing `None` is a no-op.
pub trait WriteChecked {
    fn write(self, fields: &[Field]);
}

impl WriteChecked for Option<CheckedEntry<'_>> {
    #[inline]
    fn write(self, fields: &[Field]) {
        if let Some(ce) = self {
            ce.write(fields);
        }
    }
}
