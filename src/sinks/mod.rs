//! Sink implementations

pub mod buffer;
pub mod console;
pub mod file;

pub use buffer::SharedBuffer;
pub use console::ConsoleSink;
pub use file::FileSink;

// Re-export traits for convenience
pub use crate::core::{IoSink, LockedWriteSyncer, WriteSyncer};
