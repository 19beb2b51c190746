//! Log entry structure

use super::field::Field;
use super::log_level::Level;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// One batch of fields plus a link to the batches added before it.
#[derive(Debug)]
struct FieldBatch {
    fields: Arc<[Field]>,
    prev: Option<Arc<FieldBatch>>,
}

/// The record under construction for a single logging call.
///
/// Cloning is cheap: field batches live in a persistent list, so
/// [`Entry::add_fields`] hands back a new entry and never touches batches
/// visible through other entries derived from the same ancestor.
#[derive(Debug, Clone)]
pub struct Entry {
    pub level: Level,
    pub time: DateTime<Utc>,
    pub message: String,
    batches: Option<Arc<FieldBatch>>,
}

impl Entry {
    /// Create an entry stamped with the current UTC time.
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self::at(level, message, Utc::now())
    }

    pub fn at(level: Level, message: impl Into<String>, time: DateTime<Utc>) -> Self {
        Self {
            level,
            time,
            message: message.into(),
            batches: None,
        }
    }

    /// Return a new entry carrying one more batch of fields.
    #[must_use]
    pub fn add_fields(&self, fields: impl Into<Arc<[Field]>>) -> Self {
        let batch = FieldBatch {
            fields: fields.into(),
            prev: self.batches.clone(),
        };
        Self {
            level: self.level,
            time: self.time,
            message: self.message.clone(),
            batches: Some(Arc::new(batch)),
        }
    }

    /// Iterate over every field added through [`Entry::add_fields`], oldest
    /// batch first.
    pub fn fields(&self) -> impl Iterator<Item = &Field> + '_ {
        let mut batches = Vec::new();
        let mut current = self.batches.as_deref();
        while let Some(batch) = current {
            batches.push(batch);
            current = batch.prev.as_deref();
        }
        batches.into_iter().rev().flat_map(|batch| batch.fields.iter())
    }
}
