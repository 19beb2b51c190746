//! In-memory capture facility for tests and introspection

use crate::core::{Entry, Facility, FacilityRef, Field, Level, LevelEnabler, Result};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// An encoding-agnostic record of one logged entry.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedLog {
    pub level: Level,
    pub time: DateTime<Utc>,
    pub message: String,
    /// Context fields, then entry fields, then call-site fields
    pub fields: Vec<Field>,
}

/// Append-only store of captured records.
#[derive(Debug, Default)]
pub struct CaptureSink {
    logs: Mutex<Vec<CapturedLog>>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_log(&self, log: CapturedLog) {
        self.logs.lock().push(log);
    }

    /// A snapshot of the records captured so far.
    pub fn logs(&self) -> Vec<CapturedLog> {
        self.logs.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.logs.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.logs.lock().is_empty()
    }
}

/// A facility that records every entry it is handed into a [`CaptureSink`].
///
/// Its level only answers [`Facility::enabled`]; `log` records whatever it
/// receives.
#[derive(Clone)]
pub struct CaptureFacility {
    enabler: Arc<dyn LevelEnabler>,
    sink: Arc<CaptureSink>,
    context: Arc<[Field]>,
}

impl CaptureFacility {
    /// A facility enabled for every level, and the sink it writes to.
    pub fn new() -> (Self, Arc<CaptureSink>) {
        Self::with_level(Level::Debug)
    }

    pub fn with_level<L: LevelEnabler + 'static>(enabler: L) -> (Self, Arc<CaptureSink>) {
        let sink = Arc::new(CaptureSink::new());
        let facility = Self {
            enabler: Arc::new(enabler),
            sink: Arc::clone(&sink),
            context: Arc::from(Vec::new()),
        };
        (facility, sink)
    }
}

impl Facility for CaptureFacility {
    fn with(&self, fields: &[Field]) -> FacilityRef {
        let context: Vec<Field> = self.context.iter().chain(fields).cloned().collect();
        Arc::new(CaptureFacility {
            enabler: Arc::clone(&self.enabler),
            sink: Arc::clone(&self.sink),
            context: Arc::from(context),
        })
    }

    fn enabled(&self, entry: &Entry) -> bool {
        self.enabler.enabled(entry.level)
    }

    fn log(&self, entry: &Entry, fields: &[Field]) -> Result<()> {
        let all: Vec<Field> = self
            .context
            .iter()
            .chain(entry.fields())
            .chain(fields)
            .cloned()
            .collect();
        self.sink.write_log(CapturedLog {
            level: entry.level,
            time: entry.time,
            message: entry.message.clone(),
            fields: all,
        });
        Ok(())
    }
}

impl fmt::Debug for CaptureFacility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaptureFacility")
            .field("context", &self.context)
            .field("captured", &self.sink.len())
            .finish()
    }
}
