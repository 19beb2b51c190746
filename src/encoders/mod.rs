//! Encoder implementations

pub mod json;
pub mod text;

pub use json::JsonEncoder;
pub use text::TextEncoder;

// Re-export the trait for convenience
pub use crate::core::Encoder;
