//! Human-readable text encoder
//!
//! Example: `[2025-01-08T10:30:45.123Z] [INFO ] Request processed user=alice count=5`

use crate::core::{Encoder, Field, FieldValue, Level, Result, TimestampFormat};
use chrono::{DateTime, Utc};
use std::fmt::Write as _;
use std::io::Write;

#[cfg(feature = "console")]
use colored::Colorize;

#[derive(Debug, Clone, Default)]
pub struct TextEncoder {
    /// Pre-rendered ` key=value` pairs
    fields: String,
    timestamp_format: TimestampFormat,
    #[cfg_attr(not(feature = "console"), allow(dead_code))]
    use_colors: bool,
}

impl TextEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Colorize the level column; ignored without the `console` feature
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    fn format_level(&self, level: Level) -> String {
        let padded = format!("{:5}", level.to_str());
        #[cfg(feature = "console")]
        if self.use_colors {
            return padded.color(level.color_code()).to_string();
        }
        padded
    }
}

/// Escape control characters so one record stays on one line.
fn sanitize_message(message: &str) -> String {
    let mut out = String::with_capacity(message.len());
    for c in message.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

fn escape_key(key: &str) -> String {
    key.chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-' || *c == '.')
        .collect()
}

fn escape_value(value: &str) -> String {
    if value.is_empty()
        || value.contains(' ')
        || value.contains('"')
        || value.contains('=')
        || value.chars().any(char::is_control)
    {
        quote_value(value)
    } else {
        value.to_string()
    }
}

fn quote_value(value: &str) -> String {
    format!(
        "\"{}\"",
        sanitize_message(&value.replace('\\', "\\\\").replace('"', "\\\""))
    )
}

fn render_value(value: &FieldValue) -> String {
    match value {
        FieldValue::String(s) | FieldValue::Error(s) => escape_value(s),
        other => escape_value(&other.to_string()),
    }
}

impl Encoder for TextEncoder {
    fn clone_encoder(&self) -> Box<dyn Encoder> {
        Box::new(self.clone())
    }

    fn add_field(&mut self, field: &Field) {
        // Writing into a String cannot fail.
        let _ = write!(
            self.fields,
            " {}={}",
            escape_key(&field.key),
            render_value(&field.value)
        );
    }

    fn write_entry(
        &self,
        out: &mut dyn Write,
        message: &str,
        level: Level,
        time: &DateTime<Utc>,
    ) -> Result<()> {
        let line = format!(
            "[{}] [{}] {}{}\n",
            self.timestamp_format.format(time),
            self.format_level(level),
            sanitize_message(message),
            self.fields
        );
        out.write_all(line.as_bytes())?;
        Ok(())
    }

    fn name(&self) -> &str {
        "text"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(enc: &TextEncoder, message: &str, level: Level) -> String {
        let mut out = Vec::new();
        enc.write_entry(&mut out, message, level, &Utc::now()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_format() {
        let line = encode(&TextEncoder::new(), "Test message", Level::Info);
        assert!(line.contains("[INFO ]"));
        assert!(line.ends_with("Test message\n"));
    }

    #[test]
    fn test_text_format_with_fields() {
        let mut enc = TextEncoder::new();
        enc.add_field(&Field::int("user_id", 123));
        enc.add_field(&Field::string("action", "login"));

        let line = encode(&enc, "User logged in", Level::Info);
        assert!(line.contains("User logged in user_id=123 action=login"));
    }

    #[test]
    fn test_control_characters_in_values_are_escaped() {
        let mut enc = TextEncoder::new();
        enc.add_field(&Field::string("v", "a\rFAKE\tb"));
        enc.add_field(&Field::string("bell", "x\u{7}y"));

        let line = encode(&enc, "msg", Level::Info);
        let body = line.strip_suffix('\n').unwrap();
        assert!(!body.chars().any(char::is_control), "{:?}", line);
        assert!(body.contains(r#"v="a\rFAKE\tb""#), "{:?}", line);
        assert!(body.ends_with(r#"bell="x\u0007y""#), "{:?}", line);
    }

    #[test]
    fn test_text_quotes_special_values() {
        let mut enc = TextEncoder::new();
        enc.add_field(&Field::string("query", "SELECT * FROM users WHERE id=1"));

        let line = encode(&enc, "Query executed", Level::Debug);
        assert!(line.contains("query=\"SELECT * FROM users WHERE id=1\""));
    }

    #[test]
    fn test_text_escapes_newlines() {
        let line = encode(
            &TextEncoder::new(),
            "User login\nERROR fake entry",
            Level::Info,
        );
        assert_eq!(line.lines().count(), 1);
        assert!(line.contains("User login\\nERROR fake entry"));
    }

    #[test]
    fn test_text_colors_off_by_default() {
        let line = encode(&TextEncoder::new(), "plain", Level::Error);
        assert!(!line.contains('\u{1b}'));
    }
}
