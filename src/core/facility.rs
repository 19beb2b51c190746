//! Facility trait: a destination for committed log entries

use super::error::Result;
use super::field::Field;
use super::log_entry::Entry;
use std::sync::Arc;

/// Shared handle to a facility.
pub type FacilityRef = Arc<dyn Facility>;

/// A destination for log entries.
///
/// Implementations must treat `self` as immutable: [`Facility::with`]
/// returns a new facility sharing the underlying destination and carrying
/// extra context fields, so children derived concurrently from the same
/// parent never observe each other's context.
pub trait Facility: Send + Sync {
    /// Derive a child carrying `fields` on every record it logs.
    fn with(&self, fields: &[Field]) -> FacilityRef;

    /// Whether this facility wants `entry` at all.
    fn enabled(&self, entry: &Entry) -> bool;

    /// Commit `entry` plus call-site `fields`.
    fn log(&self, entry: &Entry, fields: &[Field]) -> Result<()>;
}

/// The absent facility: never enabled, logging is a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct NopFacility;

impl Facility for NopFacility {
    fn with(&self, _fields: &[Field]) -> FacilityRef {
        Arc::new(NopFacility)
    }

    fn enabled(&self, _entry: &Entry) -> bool {
        false
    }

    fn log(&self, _entry: &Entry, _fields: &[Field]) -> Result<()> {
        Ok(())
    }
}
