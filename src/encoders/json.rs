//! JSON encoder for structured logging
//!
//! Writes each record as a single-line JSON object (JSONL), compatible with
//! log aggregation tools like ELK or Loki.

use crate::core::{Encoder, Field, FieldValue, Level, LoggerError, Result, TimestampFormat};
use chrono::{DateTime, Utc};
use std::io::Write;

/// One JSON object per record: `timestamp`, `level`, `message`, then fields
/// in the order they were added. Repeated keys are written as given.
#[derive(Debug, Clone, Default)]
pub struct JsonEncoder {
    /// Pre-encoded `"key":value` pairs, comma separated
    fields: Vec<u8>,
    timestamp_format: TimestampFormat,
    /// First failure seen by `add_field`
    error: Option<String>,
}

impl JsonEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    fn try_add(&mut self, field: &Field) -> serde_json::Result<()> {
        if !self.fields.is_empty() {
            self.fields.push(b',');
        }
        write_pair(&mut self.fields, field)
    }
}

fn write_pair(buf: &mut Vec<u8>, field: &Field) -> serde_json::Result<()> {
    serde_json::to_writer(&mut *buf, &field.key)?;
    buf.push(b':');
    write_value(buf, &field.value)
}

fn write_value(buf: &mut Vec<u8>, value: &FieldValue) -> serde_json::Result<()> {
    match value {
        FieldValue::Nested(fields) => {
            buf.push(b'{');
            for (i, field) in fields.iter().enumerate() {
                if i > 0 {
                    buf.push(b',');
                }
                write_pair(buf, field)?;
            }
            buf.push(b'}');
            Ok(())
        }
        other => serde_json::to_writer(&mut *buf, &other.to_json_value()),
    }
}

impl Encoder for JsonEncoder {
    fn clone_encoder(&self) -> Box<dyn Encoder> {
        Box::new(self.clone())
    }

    fn add_field(&mut self, field: &Field) {
        if let Err(err) = self.try_add(field) {
            self.error.get_or_insert_with(|| err.to_string());
        }
    }

    fn write_entry(
        &self,
        out: &mut dyn Write,
        message: &str,
        level: Level,
        time: &DateTime<Utc>,
    ) -> Result<()> {
        if let Some(ref err) = self.error {
            return Err(LoggerError::encoder(self.name(), err.clone()));
        }

        let mut line = Vec::with_capacity(64 + message.len() + self.fields.len());
        line.extend_from_slice(b"{\"timestamp\":");
        serde_json::to_writer(&mut line, &self.timestamp_format.to_json_value(time))?;
        line.extend_from_slice(b",\"level\":");
        serde_json::to_writer(&mut line, level.to_str())?;
        line.extend_from_slice(b",\"message\":");
        serde_json::to_writer(&mut line, message)?;
        if !self.fields.is_empty() {
            line.push(b',');
            line.extend_from_slice(&self.fields);
        }
        line.extend_from_slice(b"}\n");

        out.write_all(&line)?;
        Ok(())
    }

    fn name(&self) -> &str {
        "json"
    }
}
