//! Core logger types and traits

pub mod checked_entry;
pub mod config;
pub mod encoder;
pub mod error;
pub mod facility;
pub mod field;
pub mod hook;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod timestamp;
pub mod write_syncer;

pub use checked_entry::{CheckedEntry, WriteChecked};
pub use config::{Encoding, LoggerConfig, OutputTarget};
pub use encoder::{add_fields, Encoder};
pub use error::{LoggerError, Result};
pub use facility::{Facility, FacilityRef, NopFacility};
pub use field::{Field, FieldValue};
pub use hook::{Hook, ProcessExit, Terminator};
pub use log_entry::Entry;
pub use log_level::{AtomicLevel, Level, LevelEnabler};
pub use logger::{Logger, LoggerBuilder, FATAL_EXIT_CODE};
pub use timestamp::TimestampFormat;
pub use write_syncer::{IoSink, LockedWriteSyncer, WriteSyncer};
