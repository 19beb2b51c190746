//! Byte destinations for encoded records

use super::error::Result;
use parking_lot::Mutex;
use std::fmt;
use std::io::Write;
use std::sync::Arc;

/// A destination that accepts whole encoded records and can be flushed.
pub trait WriteSyncer: Send {
    fn write(&mut self, buf: &[u8]) -> Result<()>;
    fn sync(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}

/// A `WriteSyncer` shared between facilities and serialized by a mutex.
///
/// Each call holds the lock for one whole record, so concurrent writers never
/// interleave partial records.
#[derive(Clone)]
pub struct LockedWriteSyncer {
    inner: Arc<Mutex<Box<dyn WriteSyncer>>>,
}

impl LockedWriteSyncer {
    pub fn new<W: WriteSyncer + 'static>(sink: W) -> Self {
        Self::from_boxed(Box::new(sink))
    }

    pub fn from_boxed(sink: Box<dyn WriteSyncer>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(sink)),
        }
    }

    pub fn write(&self, buf: &[u8]) -> Result<()> {
        let mut sink = self.inner.lock();
        WriteSyncer::write(sink.as_mut(), buf)
    }

    /// Write a record and flush the destination under a single lock.
    pub fn write_and_sync(&self, buf: &[u8]) -> Result<()> {
        let mut sink = self.inner.lock();
        WriteSyncer::write(sink.as_mut(), buf)?;
        sink.sync()
    }

    pub fn sync(&self) -> Result<()> {
        self.inner.lock().sync()
    }

    pub fn name(&self) -> String {
        self.inner.lock().name().to_string()
    }
}

impl fmt::Debug for LockedWriteSyncer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LockedWriteSyncer")
            .field("sink", &self.name())
            .finish()
    }
}

/// Adapts any `std::io::Write` into a [`WriteSyncer`]; `sync` flushes.
pub struct IoSink<W> {
    writer: W,
    name: String,
}

impl<W: Write + Send> IoSink<W> {
    pub fn new(writer: W) -> Self {
        Self::named(writer, "io")
    }

    pub fn named(writer: W, name: impl Into<String>) -> Self {
        Self {
            writer,
            name: name.into(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> WriteSyncer for IoSink<W> {
    fn write(&mut self, buf: &[u8]) -> Result<()> {
        self.writer.write_all(buf)?;
        Ok(())
    }

    fn sync(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
