//! # Rust Facility Logger
//!
//! A leveled, structured logging core built around pluggable facilities.
//!
//! ## Features
//!
//! - **Cheap when disabled**: [`Logger::check`] refuses disabled levels
//!   before any field is built
//! - **Composable facilities**: single destination, fan-out with [`tee`],
//!   in-memory capture, and a bridge to foreign map-based loggers
//! - **Context without mutation**: [`Logger::with`] derives children that
//!   never affect their parent or siblings
//! - **Severity side effects**: `dpanic`, `panic` and `fatal` log first,
//!   then panic or terminate
//!
//! ## Example
//!
//! ```
//! use rust_facility_logger::prelude::*;
//!
//! let output = SharedBuffer::new();
//! let logger = Logger::builder()
//!     .facility(WriterFacility::new(JsonEncoder::new(), output.clone()))
//!     .level(Level::Info)
//!     .build();
//!
//! let request_logger = logger.with(&[Field::string("request_id", "r-17")]);
//! request_logger.info("handled", &[Field::int("status", 200)]);
//! request_logger.debug("not written", &[]);
//!
//! let record: serde_json::Value = serde_json::from_str(&output.lines()[0]).unwrap();
//! assert_eq!(record["level"], "INFO");
//! assert_eq!(record["request_id"], "r-17");
//! assert_eq!(record["status"], 200);
//! ```

pub mod core;
pub mod encoders;
pub mod facilities;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        AtomicLevel, CheckedEntry, Encoder, Encoding, Entry, Facility, FacilityRef, Field,
        FieldValue, Level, LevelEnabler, Logger, LoggerBuilder, LoggerConfig, LoggerError,
        NopFacility, OutputTarget, Result, Terminator, TimestampFormat, WriteChecked,
        WriteSyncer,
    };
    pub use crate::encoders::{JsonEncoder, TextEncoder};
    pub use crate::facilities::{
        bridge_logger, tee, BridgeFacility, CaptureFacility, CaptureSink, CapturedLog,
        ForeignLogger, WriterFacility,
    };
    pub use crate::sinks::{ConsoleSink, FileSink, IoSink, SharedBuffer};
}

pub use core::{
    add_fields, AtomicLevel, CheckedEntry, Encoder, Encoding, Entry, Facility, FacilityRef,
    Field, FieldValue, Hook, Level, LevelEnabler, LockedWriteSyncer, Logger, LoggerBuilder,
    LoggerConfig, LoggerError, NopFacility, OutputTarget, ProcessExit, Result, Terminator,
    TimestampFormat, WriteChecked, WriteSyncer, FATAL_EXIT_CODE,
};
pub use encoders::{JsonEncoder, TextEncoder};
pub use facilities::{
    bridge_logger, tee, BridgeFacility, CaptureFacility, CaptureSink, CapturedLog, FieldMap,
    ForeignLogger, MultiFacility, WriterFacility,
};
pub use sinks::{ConsoleSink, FileSink, IoSink, SharedBuffer};
