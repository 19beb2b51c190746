//! Basic logger usage example
//!
//! Demonstrates leveled structured logging, derived context, fan-out and a
//! recoverable fatal call.
//!
//! Run with: cargo run --example basic_usage

use rust_facility_logger::prelude::*;
use rust_facility_logger::{info, warn};
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Rust Facility Logger - Basic Usage Example ===\n");

    // JSON to stdout, Info and above
    let logger = Logger::builder().level(Level::Info).build();

    println!("1. Logging at different levels:");
    logger.debug("This is a debug message (hidden)", &[]);
    logger.info("This is an info message", &[Field::int("port", 8080)]);
    logger.warn("This is a warning message", &[Field::float("load", 0.93)]);
    logger.error(
        "This is an error message",
        &[Field::error(&std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "config.toml",
        ))],
    );

    println!("\n2. Derived context:");
    let request = logger.with(&[Field::string("request_id", "r-42")]);
    info!(request, "request started"; "path" => "/users", "method" => "GET");
    info!(request, "request finished in {}ms", 12);

    println!("\n3. Fan-out: text to stdout, warnings also captured in memory:");
    let (warnings, captured) = CaptureFacility::with_level(Level::Warn);
    let level = AtomicLevel::new(Level::Info);
    let teed = Logger::builder()
        .facility_ref(tee(vec![
            Arc::new(WriterFacility::new(
                TextEncoder::new().with_colors(true),
                ConsoleSink::stdout(),
            )),
            Arc::new(warnings),
        ]))
        .level(level.clone())
        .build();
    teed.info("service ready", &[]);
    warn!(teed, "disk almost full"; "free_mb" => 512u64);
    level.set_level(Level::Debug);
    teed.debug("debug enabled at runtime", &[]);
    println!("   captured {} warning(s)", captured.len());

    println!("\n4. Fatal with a non-exiting terminator:");
    let recoverable = Logger::builder()
        .facility(WriterFacility::new(TextEncoder::new(), ConsoleSink::stdout()))
        .terminator(|code: i32| println!("   terminate({}) requested", code))
        .build();
    recoverable.fatal("unrecoverable state", &[]);

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
