//! Entry hooks and process termination

use super::error::Result;
use super::log_entry::Entry;
use std::sync::Arc;

/// Observer run on every accepted entry before it reaches the facility.
///
/// Returning an error reports it on the logger's error output; logging and
/// the remaining hooks proceed regardless.
pub type Hook = Arc<dyn Fn(&mut Entry) -> Result<()> + Send + Sync>;

/// Terminates the process after a `Fatal` entry has been written.
pub trait Terminator: Send + Sync {
    fn terminate(&self, code: i32);
}

/// The real process exit.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExit;

impl Terminator for ProcessExit {
    fn terminate(&self, code: i32) {
        std::process::exit(code);
    }
}

impl<F> Terminator for F
where
    F: Fn(i32) + Send + Sync,
{
    fn terminate(&self, code: i32) {
        self(code)
    }
}
