//! Headless mode - NDJSON output instead of the TUI
//!
//! Prints the same derived data the TUI shows as newline-delimited JSON,
//! one event per line, so scripts can consume it without parsing ANSI
//! escape codes.
//!
//! # Example Output
//!
//! ```json
//! {"event":"dataset_loaded","path":"nutrients_csvfile.csv","count":2,"dropped":1,"timestamp":1704700001000}
//! {"event":"model","loaded":false,"status":"model unavailable: ...","timestamp":1704700001000}
//! {"event":"product","label":"Apple (Grade: A)","grade":"a","health_score":5,"timestamp":1704700001000}
//! {"event":"report","report":{"label":"Apple (Grade: A)", ...},"timestamp":1704700001000}
//! ```

pub mod runner;

use chrono::Utc;
use serde::Serialize;
use std::io::Write;

use nutriscan_core::prelude::*;
use nutriscan_core::{Grade, ProductReport};

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent<'a> {
    /// Dataset parsed; `dropped` rows had no valid grade
    DatasetLoaded {
        path: String,
        count: usize,
        dropped: usize,
        timestamp: i64,
    },

    /// Dataset missing or malformed
    DatasetFailed {
        path: String,
        message: String,
        timestamp: i64,
    },

    /// Model artifact status
    Model {
        loaded: bool,
        status: String,
        timestamp: i64,
    },

    /// The filters exclude every product
    NoMatch { message: &'static str, timestamp: i64 },

    /// One row of the filtered view
    Product {
        label: String,
        grade: Grade,
        health_score: u8,
        timestamp: i64,
    },

    /// All derived fields of the selected product
    Report {
        report: ProductReport<'a>,
        timestamp: i64,
    },

    /// A problem during the run; `fatal` is set when nothing more follows,
    /// e.g. after `dataset_failed`, and clear for an unknown `--select` label
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl<'a> HeadlessEvent<'a> {
    /// Write this event as one JSON line
    pub fn emit_to<W: Write>(&self, out: &mut W) -> Result<()> {
        let json = serde_json::to_string(self)?;
        writeln!(out, "{}", json)?;
        out.flush()?;
        Ok(())
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn dataset_loaded(path: &std::path::Path, count: usize, dropped: usize) -> Self {
        Self::DatasetLoaded {
            path: path.display().to_string(),
            count,
            dropped,
            timestamp: Self::now(),
        }
    }

    pub fn dataset_failed(path: &std::path::Path, message: &str) -> Self {
        Self::DatasetFailed {
            path: path.display().to_string(),
            message: message.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn model(loaded: bool, status: String) -> Self {
        Self::Model {
            loaded,
            status,
            timestamp: Self::now(),
        }
    }

    pub fn no_match() -> Self {
        Self::NoMatch {
            message: "No products found matching your filters. Please adjust your search criteria.",
            timestamp: Self::now(),
        }
    }

    pub fn product(label: String, grade: Grade) -> Self {
        Self::Product {
            label,
            grade,
            health_score: grade.health_score(),
            timestamp: Self::now(),
        }
    }

    pub fn report(report: ProductReport<'a>) -> Self {
        Self::Report {
            report,
            timestamp: Self::now(),
        }
    }

    pub fn error(message: String, fatal: bool) -> Self {
        Self::Error {
            message,
            fatal,
            timestamp: Self::now(),
        }
    }
}
