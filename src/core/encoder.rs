//! Encoder trait: the boundary between the logging core and a wire format

use super::error::Result;
use super::field::Field;
use super::log_level::Level;
use chrono::{DateTime, Utc};
use std::io::Write;

/// Serializes accumulated fields plus an entry header into bytes.
///
/// An encoder carries the context fields added so far. Facilities call
/// [`Encoder::clone_encoder`] before adding per-entry fields so the shared
/// context is never modified by a single logging call. Pooled resources are
/// released on `Drop`.
pub trait Encoder: Send + Sync {
    /// An independent copy sharing no mutable buffer with `self`.
    fn clone_encoder(&self) -> Box<dyn Encoder>;

    /// Append a field. Failures are remembered and reported by
    /// [`Encoder::write_entry`].
    fn add_field(&mut self, field: &Field);

    /// Write one complete record (header plus accumulated fields) to `out`.
    fn write_entry(
        &self,
        out: &mut dyn Write,
        message: &str,
        level: Level,
        time: &DateTime<Utc>,
    ) -> Result<()>;

    fn name(&self) -> &str;
}

impl Clone for Box<dyn Encoder> {
    fn clone(&self) -> Self {
        self.clone_encoder()
    }
}

/// Add every field in `fields` to `enc`, in order.
pub fn add_fields<'a>(enc: &mut dyn Encoder, fields: impl IntoIterator<Item = &'a Field>) {
    for field in fields {
        enc.add_field(field);
    }
}
