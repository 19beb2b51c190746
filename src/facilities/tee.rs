//! Fan-out across several facilities

use crate::core::{Entry, Facility, FacilityRef, Field, Level, LoggerError, NopFacility, Result};
use std::sync::Arc;

/// Duplicate entries into every facility in `facilities`.
///
/// With no members the result is a [`NopFacility`]; with exactly one the
/// member itself is returned, so `tee(vec![x])` behaves exactly like `x`.
///
/// # Example
///
/// ```
/// use rust_facility_logger::prelude::*;
/// use std::sync::Arc;
///
/// let (errors_only, errors) = CaptureFacility::with_level(Level::Error);
/// let (everything, all) = CaptureFacility::with_level(Level::Debug);
///
/// let logger = Logger::builder()
///     .facility_ref(tee(vec![Arc::new(errors_only), Arc::new(everything)]))
///     .level(Level::Debug)
///     .build();
///
/// logger.debug("noise", &[]);
/// logger.error("signal", &[]);
///
/// assert_eq!(all.logs().len(), 2);
/// assert_eq!(errors.logs().len(), 1);
/// ```
pub fn tee(mut facilities: Vec<FacilityRef>) -> FacilityRef {
    match facilities.len() {
        0 => Arc::new(NopFacility),
        1 => facilities.remove(0),
        _ => Arc::new(MultiFacility { facilities }),
    }
}

/// Broadcasting facility built by [`tee`] for two or more members.
pub struct MultiFacility {
    facilities: Vec<FacilityRef>,
}

impl MultiFacility {
    pub fn len(&self) -> usize {
        self.facilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facilities.is_empty()
    }
}

impl Facility for MultiFacility {
    fn with(&self, fields: &[Field]) -> FacilityRef {
        Arc::new(MultiFacility {
            facilities: self.facilities.iter().map(|f| f.with(fields)).collect(),
        })
    }

    fn enabled(&self, entry: &Entry) -> bool {
        self.facilities.iter().any(|f| f.enabled(entry))
    }

    /// Log to every member that wants the entry, in member order. Entries at
    /// `DPanic` and above reach every member, since the logger may panic or
    /// exit right after. One member failing does not stop the others; all
    /// failures are returned together.
    fn log(&self, entry: &Entry, fields: &[Field]) -> Result<()> {
        let broadcast = entry.level >= Level::DPanic;
        let errors: Vec<LoggerError> = self
            .facilities
            .iter()
            .filter(|f| broadcast || f.enabled(entry))
            .filter_map(|f| f.log(entry, fields).err())
            .collect();
        match LoggerError::from_many(errors) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
