//! Declarative logger configuration
//!
//! A [`LoggerConfig`] describes a single-destination logger and can be
//! loaded from JSON:
//!
//! ```
//! use rust_facility_logger::prelude::*;
//!
//! let config = LoggerConfig::from_json_str(
//!     r#"{"level": "warn", "encoding": "text", "output": "stderr"}"#,
//! )
//! .unwrap();
//! assert_eq!(config.level, Level::Warn);
//! assert_eq!(config.encoding, Encoding::Text);
//!
//! let logger = config.build().unwrap();
//! assert!(logger.check(Level::Info, "dropped").is_none());
//! ```

use super::{
    error::{LoggerError, Result},
    log_level::Level,
    logger::Logger,
    timestamp::TimestampFormat,
    write_syncer::WriteSyncer,
};
use crate::encoders::{JsonEncoder, TextEncoder};
use crate::facilities::WriterFacility;
use crate::sinks::{ConsoleSink, FileSink};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Record encoding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    #[default]
    Json,
    Text,
}

/// Where records or internal errors are written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputTarget {
    Stdout,
    Stderr,
    /// Appended to, created if missing
    File(PathBuf),
}

impl OutputTarget {
    fn open(&self) -> Result<Box<dyn WriteSyncer>> {
        let sink: Box<dyn WriteSyncer> = match self {
            OutputTarget::Stdout => Box::new(ConsoleSink::stdout()),
            OutputTarget::Stderr => Box::new(ConsoleSink::stderr()),
            OutputTarget::File(path) => Box::new(FileSink::new(path.clone())?),
        };
        Ok(sink)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub level: Level,
    pub development: bool,
    pub encoding: Encoding,
    pub timestamp_format: TimestampFormat,
    /// Only used by the text encoding
    pub colors: bool,
    pub output: OutputTarget,
    pub error_output: OutputTarget,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: Level::Info,
            development: false,
            encoding: Encoding::Json,
            timestamp_format: TimestampFormat::default(),
            colors: false,
            output: OutputTarget::Stdout,
            error_output: OutputTarget::Stderr,
        }
    }
}

impl LoggerConfig {
    /// Parse a configuration; missing keys take their default values.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reject settings that cannot work together.
    pub fn validate(&self) -> Result<()> {
        if self.colors && self.encoding == Encoding::Json {
            return Err(LoggerError::config(
                "colors",
                "colored output requires the text encoding",
            ));
        }
        if let TimestampFormat::Custom(format) = &self.timestamp_format {
            if format.trim().is_empty() {
                return Err(LoggerError::config(
                    "timestamp_format",
                    "custom format must not be empty",
                ));
            }
        }
        Ok(())
    }

    /// Open the configured destinations and assemble a logger.
    pub fn build(&self) -> Result<Logger> {
        self.validate()?;

        let output = self.output.open()?;
        let facility = match self.encoding {
            Encoding::Json => WriterFacility::with_boxed_output(
                JsonEncoder::new().with_timestamp_format(self.timestamp_format.clone()),
                output,
            ),
            Encoding::Text => WriterFacility::with_boxed_output(
                TextEncoder::new()
                    .with_timestamp_format(self.timestamp_format.clone())
                    .with_colors(self.colors),
                output,
            ),
        };

        Ok(Logger::builder()
            .facility(facility)
            .level(self.level)
            .development(self.development)
            .error_output_boxed(self.error_output.open()?)
            .build())
    }
}
