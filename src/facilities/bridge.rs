//! Adapter that plugs a foreign, map-based logger in as a facility
//!
//! The foreign side knows six named severities and takes its fields as a
//! string-keyed map. Logging at `Panic` or `Fatal` calls the foreign
//! logger's own `panic`/`fatal`, which typically panic or exit themselves, so
//! such loggers do not compose with other facilities at those levels.

use crate::core::{Entry, Facility, FacilityRef, Field, Level, Logger, Result};
use std::sync::Arc;

/// Fields in the representation foreign loggers accept.
pub type FieldMap = serde_json::Map<String, serde_json::Value>;

/// The contract a foreign logger must offer to be bridged.
pub trait ForeignLogger: Send + Sync {
    /// A child logger carrying `fields` on every message.
    fn with_fields(&self, fields: FieldMap) -> Arc<dyn ForeignLogger>;
    fn debug(&self, message: &str);
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn panic(&self, message: &str);
    fn fatal(&self, message: &str);
}

/// Flatten fields into a foreign map; a repeated key keeps its last value.
pub fn fields_to_map<'a>(fields: impl IntoIterator<Item = &'a Field>) -> FieldMap {
    fields
        .into_iter()
        .map(|field| (field.key.clone(), field.value.to_json_value()))
        .collect()
}

pub struct BridgeFacility {
    foreign: Arc<dyn ForeignLogger>,
    level: Level,
}

impl BridgeFacility {
    pub fn new(foreign: Arc<dyn ForeignLogger>, level: Level) -> Self {
        Self { foreign, level }
    }
}

impl Facility for BridgeFacility {
    fn with(&self, fields: &[Field]) -> FacilityRef {
        Arc::new(BridgeFacility {
            foreign: self.foreign.with_fields(fields_to_map(fields)),
            level: self.level,
        })
    }

    fn enabled(&self, entry: &Entry) -> bool {
        entry.level.enabled_at(self.level)
    }

    fn log(&self, entry: &Entry, fields: &[Field]) -> Result<()> {
        let foreign = self
            .foreign
            .with_fields(fields_to_map(entry.fields().chain(fields)));
        let message = entry.message.as_str();
        match entry.level {
            Level::Debug => foreign.debug(message),
            Level::Info => foreign.info(message),
            Level::Warn => foreign.warn(message),
            Level::Error | Level::DPanic => foreign.error(message),
            Level::Panic => foreign.panic(message),
            Level::Fatal => foreign.fatal(message),
        }
        Ok(())
    }
}

/// Wrap a foreign logger in a [`Logger`] gated at `level`.
pub fn bridge_logger(foreign: Arc<dyn ForeignLogger>, level: Level) -> Logger {
    Logger::builder()
        .facility(BridgeFacility::new(foreign, level))
        .level(level)
        .build()
}
