//! Single-destination facility: an encoder over a locked byte sink

use crate::core::{
    add_fields, Encoder, Entry, Facility, FacilityRef, Field, Level, LevelEnabler,
    LockedWriteSyncer, Result, WriteSyncer,
};
use std::fmt;
use std::sync::Arc;

/// Encodes entries and writes them to one destination.
///
/// Context fields added through [`Facility::with`] are pre-encoded into a
/// private encoder copy. Every `log` call clones that encoder before adding
/// entry and call-site fields, so siblings derived from the same parent never
/// share a buffer. Records at `Error` and above are flushed before `log`
/// returns.
///
/// # Example
///
/// ```
/// use rust_facility_logger::prelude::*;
///
/// let output = SharedBuffer::new();
/// let facility = WriterFacility::new(TextEncoder::new(), output.clone());
/// let logger = Logger::builder().facility(facility).build();
///
/// logger.with(&[Field::string("service", "api")]).info("started", &[]);
/// assert!(output.contents().contains("started service=api"));
/// ```
pub struct WriterFacility {
    encoder: Box<dyn Encoder>,
    output: LockedWriteSyncer,
    enabler: Option<Arc<dyn LevelEnabler>>,
}

impl WriterFacility {
    pub fn new<E, W>(encoder: E, output: W) -> Self
    where
        E: Encoder + 'static,
        W: WriteSyncer + 'static,
    {
        Self::with_output(encoder, LockedWriteSyncer::new(output))
    }

    pub fn with_boxed_output<E: Encoder + 'static>(
        encoder: E,
        output: Box<dyn WriteSyncer>,
    ) -> Self {
        Self::with_output(encoder, LockedWriteSyncer::from_boxed(output))
    }

    /// Share an already locked destination, e.g. between several facilities.
    pub fn with_output<E: Encoder + 'static>(encoder: E, output: LockedWriteSyncer) -> Self {
        Self {
            encoder: Box::new(encoder),
            output,
            enabler: None,
        }
    }

    /// Give the facility its own level gate, independent of the logger's.
    #[must_use]
    pub fn with_level<L: LevelEnabler + 'static>(mut self, enabler: L) -> Self {
        self.enabler = Some(Arc::new(enabler));
        self
    }

    pub fn output(&self) -> &LockedWriteSyncer {
        &self.output
    }
}

impl Facility for WriterFacility {
    fn with(&self, fields: &[Field]) -> FacilityRef {
        let mut encoder = self.encoder.clone_encoder();
        add_fields(encoder.as_mut(), fields);
        Arc::new(WriterFacility {
            encoder,
            output: self.output.clone(),
            enabler: self.enabler.clone(),
        })
    }

    fn enabled(&self, entry: &Entry) -> bool {
        self.enabler
            .as_ref()
            .map_or(true, |enabler| enabler.enabled(entry.level))
    }

    fn log(&self, entry: &Entry, fields: &[Field]) -> Result<()> {
        let mut encoder = self.encoder.clone_encoder();
        add_fields(encoder.as_mut(), entry.fields());
        add_fields(encoder.as_mut(), fields);

        let mut record = Vec::new();
        encoder.write_entry(&mut record, &entry.message, entry.level, &entry.time)?;

        if entry.level >= Level::Error {
            // Panic and Fatal may end the process right after this returns.
            self.output.write_and_sync(&record)
        } else {
            self.output.write(&record)
        }
    }
}

impl fmt::Debug for WriterFacility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriterFacility")
            .field("encoder", &self.encoder.name())
            .field("output", &self.output)
            .field("leveled", &self.enabler.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoders::JsonEncoder;
    use crate::sinks::SharedBuffer;

    fn parse_lines(buffer: &SharedBuffer) -> Vec<serde_json::Value> {
        buffer
            .lines()
            .iter()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_field_order_context_entry_call_site() {
        let output = SharedBuffer::new();
        let facility = WriterFacility::new(JsonEncoder::new(), output.clone())
            .with(&[Field::int("a", 1), Field::int("b", 2)]);

        let entry = Entry::new(Level::Info, "ordered").add_fields(vec![Field::int("e", 0)]);
        facility
            .log(&entry, &[Field::int("c", 3), Field::int("d", 4)])
            .unwrap();

        let line = output.contents();
        let positions: Vec<usize> = ["\"a\"", "\"b\"", "\"e\"", "\"c\"", "\"d\""]
            .iter()
            .map(|key| line.find(key).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{}", line);
    }

    #[test]
    fn test_siblings_do_not_share_context() {
        let output = SharedBuffer::new();
        let parent = WriterFacility::new(JsonEncoder::new(), output.clone())
            .with(&[Field::string("root", "r")]);
        let left = parent.with(&[Field::string("side", "left")]);
        let right = parent.with(&[Field::string("other", "right")]);

        left.log(&Entry::new(Level::Info, "l"), &[]).unwrap();
        right.log(&Entry::new(Level::Info, "r"), &[]).unwrap();
        parent.log(&Entry::new(Level::Info, "p"), &[]).unwrap();

        let lines = parse_lines(&output);
        assert_eq!(lines[0]["side"], "left");
        assert!(lines[0].get("other").is_none());
        assert_eq!(lines[1]["other"], "right");
        assert!(lines[1].get("side").is_none());
        assert!(lines[2].get("side").is_none() && lines[2].get("other").is_none());
        assert!(lines.iter().all(|l| l["root"] == "r"));
    }

    #[test]
    fn test_sync_at_error_and_above() {
        let output = SharedBuffer::new();
        let facility = WriterFacility::new(JsonEncoder::new(), output.clone());

        facility.log(&Entry::new(Level::Warn, "w"), &[]).unwrap();
        assert_eq!(output.sync_count(), 0);

        facility.log(&Entry::new(Level::Error, "e"), &[]).unwrap();
        facility.log(&Entry::new(Level::Fatal, "f"), &[]).unwrap();
        assert_eq!(output.sync_count(), 2);
    }

    #[test]
    fn test_enabled_defaults_to_true() {
        let facility = WriterFacility::new(JsonEncoder::new(), SharedBuffer::new());
        assert!(facility.enabled(&Entry::new(Level::Debug, "d")));

        let strict = WriterFacility::new(JsonEncoder::new(), SharedBuffer::new())
            .with_level(Level::Warn);
        assert!(!strict.enabled(&Entry::new(Level::Info, "i")));
        assert!(strict.with(&[]).enabled(&Entry::new(Level::Warn, "w")));
    }
}
