//! Stress tests for concurrent logging
//!
//! These tests verify:
//! - The capture facility neither drops nor duplicates records under contention
//! - Concurrent writers never interleave partial records
//! - Context derivation from one parent is safe across threads

use rust_facility_logger::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

const THREADS: usize = 8;
const PER_THREAD: usize = 250;

#[test]
fn test_concurrent_capture_is_exact() {
    let (facility, sink) = CaptureFacility::new();
    let logger = Arc::new(Logger::builder().facility(facility).build());

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    logger.info(format!("t{}-m{}", t, i), &[]);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("logging thread panicked");
    }

    let logs = sink.logs();
    assert_eq!(logs.len(), THREADS * PER_THREAD);
    let unique: HashSet<&str> = logs.iter().map(|l| l.message.as_str()).collect();
    assert_eq!(unique.len(), THREADS * PER_THREAD);
}

#[test]
fn test_concurrent_writers_do_not_interleave() {
    let output = SharedBuffer::new();
    let logger = Logger::builder()
        .facility(WriterFacility::new(JsonEncoder::new(), output.clone()))
        .level(Level::Debug)
        .build();

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let child = logger.with(&[Field::uint("thread", t as u64)]);
            thread::spawn(move || {
                let payload = "x".repeat(512);
                for i in 0..PER_THREAD {
                    child.debug(
                        "payload",
                        &[Field::uint("seq", i as u64), Field::string("data", payload.clone())],
                    );
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("logging thread panicked");
    }

    let lines = output.lines();
    assert_eq!(lines.len(), THREADS * PER_THREAD);
    for line in &lines {
        let record: serde_json::Value =
            serde_json::from_str(line).unwrap_or_else(|e| panic!("corrupt line {}: {}", line, e));
        assert_eq!(record["data"].as_str().map(str::len), Some(512));
    }
}

#[test]
fn test_siblings_derived_concurrently_stay_independent() {
    let (facility, sink) = CaptureFacility::new();
    let parent = Logger::builder()
        .facility(facility)
        .build()
        .with(&[Field::string("root", "shared")]);

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let parent = parent.clone();
            thread::spawn(move || {
                let child = parent.with(&[Field::uint("child", t as u64)]);
                for _ in 0..PER_THREAD {
                    child.info("work", &[]);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("logging thread panicked");
    }

    let logs = sink.logs();
    assert_eq!(logs.len(), THREADS * PER_THREAD);
    for log in &logs {
        assert_eq!(log.fields.len(), 2);
        assert_eq!(log.fields[0], Field::string("root", "shared"));
        assert_eq!(log.fields[1].key, "child");
    }
}

#[test]
fn test_concurrent_file_writes_with_tee() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("stress.log");

    let file = FileSink::new(&log_file).expect("Failed to open log file");
    let (capture, sink) = CaptureFacility::with_level(Level::Error);
    let logger = Arc::new(
        Logger::builder()
            .facility_ref(tee(vec![
                Arc::new(WriterFacility::new(TextEncoder::new(), file)),
                Arc::new(capture),
            ]))
            .build(),
    );

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    if i % 50 == 0 {
                        logger.error(format!("t{} failure {}", t, i), &[]);
                    } else {
                        logger.info(format!("t{} progress {}", t, i), &[]);
                    }
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("logging thread panicked");
    }
    // Dropping the last logger drops the file sink, which flushes.
    drop(logger);

    let content = std::fs::read_to_string(&log_file).expect("Failed to read log file");
    assert_eq!(content.lines().count(), THREADS * PER_THREAD);
    assert!(content
        .lines()
        .all(|l| l.contains("[INFO ]") || l.contains("[ERROR]")));
    assert_eq!(sink.len(), THREADS * (PER_THREAD / 50));
}
