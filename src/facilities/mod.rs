//! Facility implementations

pub mod bridge;
pub mod capture;
pub mod tee;
pub mod writer;

pub use bridge::{bridge_logger, fields_to_map, BridgeFacility, FieldMap, ForeignLogger};
pub use capture::{CaptureFacility, CaptureSink, CapturedLog};
pub use tee::{tee, MultiFacility};
pub use writer::WriterFacility;

// Re-export traits for convenience
pub use crate::core::{Facility, FacilityRef, NopFacility};
